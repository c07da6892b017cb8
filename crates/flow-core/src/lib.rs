//! Dictionary-driven English ↔ Flowing translation.

pub mod lexicon;
pub mod sanitize;
pub mod selector;
pub mod settings;
pub mod translate;

pub use lexicon::{Lexicon, LexiconEntry, LexiconError, WordClass};
pub use selector::{select_direction, TextFields};
pub use translate::{Direction, Segment, SegmentKind, Translation, Translator};
