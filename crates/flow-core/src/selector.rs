//! Direction selection for a pair of English/Flowing text fields.
//!
//! Whichever field holds more characters is assumed to be the one the user
//! just edited; ties go to English → Flowing.

use tracing::debug;

use crate::translate::{Direction, Translator};

/// The two text surfaces a frontend exposes.
pub trait TextFields {
    fn english(&self) -> &str;
    fn flowing(&self) -> &str;
    fn set_english(&mut self, text: String);
    fn set_flowing(&mut self, text: String);
}

/// Pick a direction by comparing character counts. `None` when both are empty.
pub fn select_direction(english: &str, flowing: &str) -> Option<Direction> {
    if english.is_empty() && flowing.is_empty() {
        return None;
    }
    if english.chars().count() >= flowing.chars().count() {
        Some(Direction::EnglishToFlowing)
    } else {
        Some(Direction::FlowingToEnglish)
    }
}

impl Translator<'_> {
    /// Translate whichever field is longer into the other one.
    ///
    /// With both fields empty nothing is translated and both are reset to
    /// empty. Returns the direction that ran.
    pub fn translate_fields<F: TextFields + ?Sized>(&self, fields: &mut F) -> Option<Direction> {
        let Some(direction) = select_direction(fields.english(), fields.flowing()) else {
            fields.set_english(String::new());
            fields.set_flowing(String::new());
            return None;
        };
        debug!(%direction, "translating fields");
        match direction {
            Direction::EnglishToFlowing => {
                let out = self.translate(direction, fields.english()).text();
                fields.set_flowing(out);
            }
            Direction::FlowingToEnglish => {
                let out = self.translate(direction, fields.flowing()).text();
                fields.set_english(out);
            }
        }
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{parse_lexicon_toml, DEFAULT_LEXICON_TOML};
    use crate::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};

    #[derive(Default)]
    struct Boxes {
        english: String,
        flowing: String,
        writes: usize,
    }

    impl TextFields for Boxes {
        fn english(&self) -> &str {
            &self.english
        }
        fn flowing(&self) -> &str {
            &self.flowing
        }
        fn set_english(&mut self, text: String) {
            self.writes += 1;
            self.english = text;
        }
        fn set_flowing(&mut self, text: String) {
            self.writes += 1;
            self.flowing = text;
        }
    }

    fn boxes(english: &str, flowing: &str) -> Boxes {
        Boxes {
            english: english.to_string(),
            flowing: flowing.to_string(),
            writes: 0,
        }
    }

    #[test]
    fn test_select_longer_english() {
        assert_eq!(
            select_direction("0123456789", "abc"),
            Some(Direction::EnglishToFlowing)
        );
    }

    #[test]
    fn test_select_longer_flowing() {
        assert_eq!(
            select_direction("ni", "era sa maku"),
            Some(Direction::FlowingToEnglish)
        );
    }

    #[test]
    fn test_select_tie_prefers_english() {
        assert_eq!(
            select_direction("abc", "xyz"),
            Some(Direction::EnglishToFlowing)
        );
        assert_eq!(select_direction("a", ""), Some(Direction::EnglishToFlowing));
        assert_eq!(select_direction("", "a"), Some(Direction::FlowingToEnglish));
    }

    #[test]
    fn test_select_counts_characters_not_bytes() {
        // 3 chars / 6 bytes vs 4 chars / 4 bytes.
        assert_eq!(
            select_direction("ééé", "abcd"),
            Some(Direction::FlowingToEnglish)
        );
    }

    #[test]
    fn test_select_both_empty() {
        assert_eq!(select_direction("", ""), None);
    }

    #[test]
    fn test_translate_fields_english_to_flowing() {
        let lex = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let t = Translator::new(&lex, &s);

        let mut b = boxes("I see the dog", "old");
        assert_eq!(t.translate_fields(&mut b), Some(Direction::EnglishToFlowing));
        assert_eq!(b.flowing, "ni sa [the] maku");
        assert_eq!(b.english, "I see the dog");
        assert_eq!(b.writes, 1);
    }

    #[test]
    fn test_translate_fields_flowing_to_english() {
        let lex = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let t = Translator::new(&lex, &s);

        let mut b = boxes("", "era sa che");
        assert_eq!(t.translate_fields(&mut b), Some(Direction::FlowingToEnglish));
        assert_eq!(b.english, "[PAST] see He/She");
        assert_eq!(b.flowing, "era sa che");
    }

    #[test]
    fn test_translate_fields_both_empty() {
        let lex = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let t = Translator::new(&lex, &s);

        let mut b = Boxes::default();
        assert_eq!(t.translate_fields(&mut b), None);
        assert_eq!(b.english, "");
        assert_eq!(b.flowing, "");
    }

    #[test]
    fn test_translate_fields_whitespace_english() {
        let lex = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let t = Translator::new(&lex, &s);

        // Whitespace counts toward length but produces no tokens.
        let mut b = boxes("   ", "ni");
        assert_eq!(t.translate_fields(&mut b), Some(Direction::EnglishToFlowing));
        assert_eq!(b.flowing, "");
    }
}
