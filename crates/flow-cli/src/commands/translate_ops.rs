use clap::ValueEnum;
use flow_core::{Direction, SegmentKind, Translation, Translator};
use flow_session::TranslationSession;

/// Output language of a one-shot translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Flowing,
    English,
}

impl Target {
    pub fn direction(self) -> Direction {
        match self {
            Target::Flowing => Direction::EnglishToFlowing,
            Target::English => Direction::FlowingToEnglish,
        }
    }
}

pub fn translate_cmd(text: &str, to: Target) {
    let translation = Translator::global().translate(to.direction(), text);
    println!("{translation}");
}

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Exact => "exact",
        SegmentKind::Stemmed => "stemmed",
        SegmentKind::TenseMarker => "tense",
        SegmentKind::Pronoun => "pronoun",
        SegmentKind::Untranslatable => "unknown",
    }
}

/// One line per token: `source → text  (kind)`.
pub fn render_explain(translation: &Translation) -> String {
    let width = translation
        .segments
        .iter()
        .map(|s| unicode_width::UnicodeWidthStr::width(s.source.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", translation.direction);
    for seg in &translation.segments {
        let pad = width - unicode_width::UnicodeWidthStr::width(seg.source.as_str());
        out.push_str(&format!(
            "  {}{} → {}  ({})\n",
            seg.source,
            " ".repeat(pad),
            seg.text,
            kind_label(seg.kind)
        ));
    }
    out.push_str(&format!("= {translation}\n"));
    out
}

pub fn explain_cmd(text: &str, to: Target, json: bool) {
    let translation = Translator::global().translate(to.direction(), text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&translation).expect("JSON serialization failed")
        );
    } else {
        print!("{}", render_explain(&translation));
    }
}

/// The translate button: fill both fields, let the longer one win, print both.
pub fn auto_cmd(english: &str, flowing: &str) {
    let mut session = TranslationSession::global();
    session.set_live(false);
    session.set_english(english);
    session.set_flowing(flowing);
    let resp = session.translate_both();

    match resp.direction {
        Some(direction) => eprintln!("direction: {direction}"),
        None => eprintln!("direction: none (both fields empty)"),
    }
    println!("english: {}", session.text(flow_session::Field::English));
    println!("flowing: {}", session.text(flow_session::Field::Flowing));
}
