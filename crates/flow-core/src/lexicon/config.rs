use serde::Deserialize;

use super::{Lexicon, LexiconEntry, LexiconError, WordClass, SENSE_SEPARATOR};

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconConfig {
    #[serde(default)]
    marker: Vec<RawEntry>,
    #[serde(default)]
    pronoun: Vec<RawEntry>,
    #[serde(default)]
    number: Vec<RawEntry>,
    #[serde(default)]
    postposition: Vec<RawEntry>,
    #[serde(default)]
    verb: Vec<RawEntry>,
    #[serde(default)]
    noun: Vec<RawEntry>,
    #[serde(default)]
    adjective: Vec<RawEntry>,
    #[serde(default)]
    adverb: Vec<RawEntry>,
}

impl LexiconConfig {
    fn take(&mut self, class: WordClass) -> Vec<RawEntry> {
        let slot = match class {
            WordClass::Marker => &mut self.marker,
            WordClass::Pronoun => &mut self.pronoun,
            WordClass::Number => &mut self.number,
            WordClass::Postposition => &mut self.postposition,
            WordClass::Verb => &mut self.verb,
            WordClass::Noun => &mut self.noun,
            WordClass::Adjective => &mut self.adjective,
            WordClass::Adverb => &mut self.adverb,
        };
        std::mem::take(slot)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    flowing: String,
    gloss: GlossSpec,
}

/// `gloss = ["HE", "SHE"]` or the joined form `gloss = "HE/SHE"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum GlossSpec {
    Senses(Vec<String>),
    Joined(String),
}

impl GlossSpec {
    fn into_senses(self) -> Vec<String> {
        match self {
            GlossSpec::Senses(senses) => senses,
            GlossSpec::Joined(joined) if joined.is_empty() => Vec::new(),
            GlossSpec::Joined(joined) => joined
                .split(SENSE_SEPARATOR)
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Parse TOML text into a validated `Lexicon`.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
    let mut config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    let mut entries = Vec::new();
    for class in WordClass::ALL {
        for raw in config.take(class) {
            entries.push(LexiconEntry {
                flowing: raw.flowing,
                senses: raw.gloss.into_senses(),
                class,
            });
        }
    }

    Lexicon::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
noun = [
  { flowing = "maku", gloss = ["DOG"] },
  { flowing = "ro", gloss = ["SUN", "DAY"] },
]
"#;
        let lex = parse_lexicon_toml(toml).unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.lookup("ro").unwrap().senses, vec!["SUN", "DAY"]);
        assert_eq!(lex.lookup("maku").unwrap().class, WordClass::Noun);
    }

    #[test]
    fn parse_joined_gloss() {
        let toml = r#"
pronoun = [{ flowing = "che", gloss = "HE/SHE/IT" }]
"#;
        let lex = parse_lexicon_toml(toml).unwrap();
        assert_eq!(lex.lookup("che").unwrap().senses, vec!["HE", "SHE", "IT"]);
    }

    #[test]
    fn classes_load_in_canonical_order() {
        // Declared adverb first in the file; markers still load first.
        let toml = r#"
adverb = [{ flowing = "tena", gloss = ["QUICKLY"] }]
marker = [{ flowing = "era", gloss = ["PAST"] }]
"#;
        let lex = parse_lexicon_toml(toml).unwrap();
        let words: Vec<&str> = lex.entries().iter().map(|e| e.flowing.as_str()).collect();
        assert_eq!(words, vec!["era", "tena"]);
    }

    #[test]
    fn parse_default_toml() {
        let lex = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
        assert_eq!(lex.len(), 61);
    }

    #[test]
    fn error_empty_lexicon() {
        let err = parse_lexicon_toml("").unwrap_err();
        assert!(matches!(err, LexiconError::Empty));
    }

    #[test]
    fn error_unknown_class() {
        let toml = r#"
conjunction = [{ flowing = "pe", gloss = ["AND"] }]
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn error_empty_joined_gloss() {
        let toml = r#"
noun = [{ flowing = "fu", gloss = "" }]
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyGloss(ref w) if w == "fu"));
    }

    #[test]
    fn error_dangling_separator() {
        let toml = r#"
noun = [{ flowing = "ro", gloss = "SUN/" }]
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidSense { .. }));
    }

    #[test]
    fn error_duplicate_across_classes() {
        let toml = r#"
noun = [{ flowing = "ko", gloss = ["STONE"] }]
verb = [{ flowing = "ko", gloss = ["THROW"] }]
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconError::DuplicateWord(ref w) if w == "ko"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_lexicon_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }
}
