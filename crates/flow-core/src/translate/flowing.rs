use tracing::{debug_span, trace};

use super::{Direction, Segment, SegmentKind, Translation, Translator};
use crate::lexicon::{LexiconEntry, WordClass, SENSE_SEPARATOR};

impl Translator<'_> {
    /// Gloss each Flowing token in source order.
    ///
    /// Output keeps the Flowing word order so the sentence structure stays
    /// visible in the English rendering.
    pub fn flowing_to_english<S: AsRef<str>>(&self, tokens: &[S]) -> Translation {
        let _span = debug_span!("flowing_to_english", tokens = tokens.len()).entered();
        let segments = tokens
            .iter()
            .map(|t| self.flowing_segment(t.as_ref()))
            .collect();
        Translation {
            direction: Direction::FlowingToEnglish,
            segments,
        }
    }

    fn flowing_segment(&self, token: &str) -> Segment {
        let Some(entry) = self.lexicon().lookup(token) else {
            trace!(token, "not in lexicon");
            return Segment::untranslatable(token);
        };

        let flowing = &self.settings().flowing;
        if let [gloss] = entry.senses.as_slice() {
            if flowing.is_tense_marker(gloss) {
                return Segment::new(
                    token,
                    format!("[{}]", gloss.to_uppercase()),
                    SegmentKind::TenseMarker,
                );
            }
        }

        if entry.class == WordClass::Pronoun && entry.is_multi_sense() {
            return Segment::new(
                token,
                render_pronoun(entry, flowing.pronoun_senses),
                SegmentKind::Pronoun,
            );
        }

        Segment::new(token, entry.joined_gloss().to_lowercase(), SegmentKind::Exact)
    }
}

/// First `count` senses in title case, e.g. `He/She` for `HE/SHE/IT`.
fn render_pronoun(entry: &LexiconEntry, count: usize) -> String {
    entry
        .senses
        .iter()
        .take(count)
        .map(|s| title_case(s))
        .collect::<Vec<_>>()
        .join(SENSE_SEPARATOR)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("HE"), "He");
        assert_eq!(title_case("she"), "She");
        assert_eq!(title_case("I"), "I");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_render_pronoun_truncates() {
        let entry = LexiconEntry::new("che", vec!["HE", "SHE", "IT"], WordClass::Pronoun);
        assert_eq!(render_pronoun(&entry, 2), "He/She");
        assert_eq!(render_pronoun(&entry, 3), "He/She/It");
        assert_eq!(render_pronoun(&entry, 10), "He/She/It");
    }
}
