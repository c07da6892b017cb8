use tracing::{debug_span, trace};

use super::{Segment, SegmentKind, Translation, Translator};
use crate::translate::Direction;

impl Translator<'_> {
    /// Map each English token to a Flowing word, keeping token order.
    ///
    /// The raw token is tried first, then the token with one configured
    /// suffix removed. Plural and tense information is dropped.
    pub fn english_to_flowing<S: AsRef<str>>(&self, tokens: &[S]) -> Translation {
        let _span = debug_span!("english_to_flowing", tokens = tokens.len()).entered();
        let segments = tokens
            .iter()
            .map(|t| self.english_segment(t.as_ref()))
            .collect();
        Translation {
            direction: Direction::EnglishToFlowing,
            segments,
        }
    }

    fn english_segment(&self, token: &str) -> Segment {
        let reverse = self.lexicon().reverse();
        if let Some(flowing) = reverse.get(token) {
            return Segment::new(token, flowing.to_string(), SegmentKind::Exact);
        }

        let base = strip_suffix(token, &self.settings().english.suffixes);
        if let Some(flowing) = base.and_then(|b| reverse.get(b)) {
            return Segment::new(token, flowing.to_string(), SegmentKind::Stemmed);
        }

        trace!(token, "no Flowing word");
        Segment::untranslatable(token)
    }
}

/// Remove the longest configured suffix `word` ends with.
///
/// Returns `None` when no suffix matches. A suffix may consume the whole
/// word, in which case the base is empty.
pub fn strip_suffix<'w, S: AsRef<str>>(word: &'w str, suffixes: &[S]) -> Option<&'w str> {
    suffixes
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .filter_map(|s| word.strip_suffix(s).map(|base| (s.len(), base)))
        .max_by_key(|(len, _)| *len)
        .map(|(_, base)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: [&str; 3] = ["s", "ing", "ed"];

    #[test]
    fn test_strip_each_default_suffix() {
        assert_eq!(strip_suffix("runs", &DEFAULT), Some("run"));
        assert_eq!(strip_suffix("seeing", &DEFAULT), Some("see"));
        assert_eq!(strip_suffix("walked", &DEFAULT), Some("walk"));
        assert_eq!(strip_suffix("dog", &DEFAULT), None);
    }

    #[test]
    fn test_strip_only_once() {
        assert_eq!(strip_suffix("things", &DEFAULT), Some("thing"));
        assert_eq!(strip_suffix("seeds", &DEFAULT), Some("seed"));
    }

    #[test]
    fn test_strip_longest_of_overlapping() {
        assert_eq!(strip_suffix("boxes", &["s", "es"]), Some("box"));
        assert_eq!(strip_suffix("boxes", &["es", "s"]), Some("box"));
    }

    #[test]
    fn test_strip_whole_word() {
        assert_eq!(strip_suffix("s", &DEFAULT), Some(""));
        assert_eq!(strip_suffix("ed", &DEFAULT), Some(""));
    }

    #[test]
    fn test_strip_ignores_empty_suffix() {
        assert_eq!(strip_suffix("dog", &["", "s"]), None);
    }
}
