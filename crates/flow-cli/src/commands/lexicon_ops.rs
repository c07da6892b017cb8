use flow_core::translate::strip_suffix;
use flow_core::{Lexicon, LexiconEntry, WordClass};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Serialize)]
struct EntryRow<'a> {
    flowing: &'a str,
    class: &'a str,
    senses: &'a [String],
}

impl<'a> From<&'a LexiconEntry> for EntryRow<'a> {
    fn from(e: &'a LexiconEntry) -> Self {
        Self {
            flowing: &e.flowing,
            class: e.class.as_str(),
            senses: &e.senses,
        }
    }
}

/// Every match for `word` in either direction, one per line.
pub fn render_lookup(lex: &Lexicon, suffixes: &[String], word: &str) -> String {
    let word = word.to_lowercase();
    let mut out = String::new();

    if let Some(entry) = lex.lookup(&word) {
        out.push_str(&format!(
            "flowing {} ({}) → {}\n",
            entry.flowing,
            entry.class,
            entry.joined_gloss()
        ));
    }
    if let Some(flowing) = lex.english_to_flowing(&word) {
        out.push_str(&format!("english {word} → {flowing}\n"));
    } else if let Some(base) = strip_suffix(&word, suffixes) {
        if let Some(flowing) = lex.english_to_flowing(base) {
            out.push_str(&format!("english {word} (as {base}) → {flowing}\n"));
        }
    }

    if out.is_empty() {
        out.push_str(&format!("Not found: {word}\n"));
    }
    out
}

pub fn lookup_cmd(word: &str) {
    let suffixes = &flow_core::settings::settings().english.suffixes;
    print!("{}", render_lookup(Lexicon::global(), suffixes, word));
}

/// Aligned `word  class  gloss` table, optionally filtered by class.
pub fn render_list(lex: &Lexicon, class: Option<WordClass>) -> String {
    let rows: Vec<&LexiconEntry> = lex
        .entries()
        .iter()
        .filter(|e| class.map_or(true, |c| e.class == c))
        .collect();

    let word_w = rows.iter().map(|e| e.flowing.width()).max().unwrap_or(0);
    let class_w = rows.iter().map(|e| e.class.as_str().len()).max().unwrap_or(0);

    let mut out = String::new();
    for e in &rows {
        out.push_str(&format!(
            "{}{}  {}{}  {}\n",
            e.flowing,
            " ".repeat(word_w - e.flowing.width()),
            e.class,
            " ".repeat(class_w - e.class.as_str().len()),
            e.joined_gloss()
        ));
    }
    out.push_str("---\n");
    out.push_str(&format!("{} entries\n", rows.len()));
    out
}

pub fn list_cmd(class: Option<WordClass>, json: bool) {
    let lex = Lexicon::global();
    if json {
        let rows: Vec<EntryRow> = lex
            .entries()
            .iter()
            .filter(|e| class.map_or(true, |c| e.class == c))
            .map(EntryRow::from)
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization failed")
        );
    } else {
        print!("{}", render_list(lex, class));
    }
}
