//! Word-for-word translation between English and Flowing.
//!
//! Both directions map one sanitized token to exactly one output segment and
//! never reorder. Tokens with no dictionary match come out as `[token]`.

mod english;
mod flowing;

pub use english::strip_suffix;

use std::fmt;

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::sanitize::sanitize_with;
use crate::settings::{settings, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    EnglishToFlowing,
    FlowingToEnglish,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::EnglishToFlowing => "english-to-flowing",
            Direction::FlowingToEnglish => "flowing-to-english",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::EnglishToFlowing => Direction::FlowingToEnglish,
            Direction::FlowingToEnglish => Direction::EnglishToFlowing,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single token was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Direct dictionary hit.
    Exact,
    /// Hit after removing an English suffix.
    Stemmed,
    /// Flowing tense marker rendered as `[PAST]` etc.
    TenseMarker,
    /// Multi-sense pronoun rendered as `He/She`.
    Pronoun,
    /// No match; text is the token in brackets.
    Untranslatable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub source: String,
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub(crate) fn new(source: &str, text: String, kind: SegmentKind) -> Self {
        Self {
            source: source.to_string(),
            text,
            kind,
        }
    }

    pub(crate) fn untranslatable(source: &str) -> Self {
        Self::new(source, format!("[{source}]"), SegmentKind::Untranslatable)
    }

    pub fn is_translated(&self) -> bool {
        self.kind != SegmentKind::Untranslatable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub direction: Direction,
    pub segments: Vec<Segment>,
}

impl Translation {
    /// Segment texts joined by single spaces.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn untranslated(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| !s.is_translated())
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// A lexicon paired with the settings that shape tokenization and rendering.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    lexicon: &'a Lexicon,
    settings: &'a Settings,
}

impl Translator<'static> {
    /// Translator over the process-wide lexicon and settings.
    pub fn global() -> Self {
        Self::new(Lexicon::global(), settings())
    }
}

impl<'a> Translator<'a> {
    pub fn new(lexicon: &'a Lexicon, settings: &'a Settings) -> Self {
        Self { lexicon, settings }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn sanitize(&self, text: &str) -> Vec<String> {
        sanitize_with(text, &self.settings.sanitizer.strip_chars)
    }

    /// Sanitize `text` and translate it in `direction`.
    pub fn translate(&self, direction: Direction, text: &str) -> Translation {
        let tokens = self.sanitize(text);
        self.translate_tokens(direction, &tokens)
    }

    pub fn translate_tokens<S: AsRef<str>>(&self, direction: Direction, tokens: &[S]) -> Translation {
        match direction {
            Direction::EnglishToFlowing => self.english_to_flowing(tokens),
            Direction::FlowingToEnglish => self.flowing_to_english(tokens),
        }
    }
}

/// English text → Flowing text using the global lexicon.
pub fn translate_english(text: &str) -> String {
    Translator::global()
        .translate(Direction::EnglishToFlowing, text)
        .text()
}

/// Flowing text → English text using the global lexicon.
pub fn translate_flowing(text: &str) -> String {
    Translator::global()
        .translate(Direction::FlowingToEnglish, text)
        .text()
}
