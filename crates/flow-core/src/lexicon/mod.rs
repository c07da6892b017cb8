//! Flowing lexicon and its derived English index.
//!
//! `Lexicon` is the single source of truth: Flowing word → English senses.
//! `ReverseIndex` maps each lowercased sense back to its Flowing word and is
//! rebuilt whenever a new `Lexicon` is constructed.

mod config;
mod reverse;

pub use config::{default_toml, parse_lexicon_toml, DEFAULT_LEXICON_TOML};
pub use reverse::{ReverseIndex, Shadowed};

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

/// Separator used when a multi-sense gloss is rendered as one string.
pub const SENSE_SEPARATOR: &str = "/";

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("lexicon has no entries")]
    Empty,
    #[error("invalid Flowing word {0:?}: must be non-empty lowercase without whitespace")]
    InvalidWord(String),
    #[error("duplicate Flowing word: {0}")]
    DuplicateWord(String),
    #[error("empty gloss for Flowing word: {0}")]
    EmptyGloss(String),
    #[error("invalid sense {sense:?} for Flowing word {word}")]
    InvalidSense { word: String, sense: String },
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Grammatical grouping of a Flowing word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordClass {
    Marker,
    Pronoun,
    Number,
    Postposition,
    Verb,
    Noun,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Canonical load order. Later classes win reverse-index collisions.
    pub const ALL: [WordClass; 8] = [
        WordClass::Marker,
        WordClass::Pronoun,
        WordClass::Number,
        WordClass::Postposition,
        WordClass::Verb,
        WordClass::Noun,
        WordClass::Adjective,
        WordClass::Adverb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WordClass::Marker => "marker",
            WordClass::Pronoun => "pronoun",
            WordClass::Number => "number",
            WordClass::Postposition => "postposition",
            WordClass::Verb => "verb",
            WordClass::Noun => "noun",
            WordClass::Adjective => "adjective",
            WordClass::Adverb => "adverb",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordClass::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = WordClass::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown word class '{s}' (available: {})", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub flowing: String,
    /// English senses in declaration order, never empty once validated.
    pub senses: Vec<String>,
    pub class: WordClass,
}

impl LexiconEntry {
    pub fn new<S: Into<String>>(flowing: &str, senses: Vec<S>, class: WordClass) -> Self {
        Self {
            flowing: flowing.to_string(),
            senses: senses.into_iter().map(Into::into).collect(),
            class,
        }
    }

    /// All senses joined with `/`, e.g. `HE/SHE/IT`.
    pub fn joined_gloss(&self) -> String {
        self.senses.join(SENSE_SEPARATOR)
    }

    pub fn is_multi_sense(&self) -> bool {
        self.senses.len() > 1
    }

    fn validate(&self) -> Result<(), LexiconError> {
        let w = &self.flowing;
        if w.is_empty() || w.chars().any(|c| c.is_whitespace() || c.is_uppercase()) {
            return Err(LexiconError::InvalidWord(w.clone()));
        }
        if self.senses.is_empty() {
            return Err(LexiconError::EmptyGloss(w.clone()));
        }
        for sense in &self.senses {
            if sense.is_empty()
                || sense.contains(SENSE_SEPARATOR)
                || sense.chars().any(char::is_whitespace)
            {
                return Err(LexiconError::InvalidSense {
                    word: w.clone(),
                    sense: sense.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable bidirectional dictionary.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    by_flowing: HashMap<String, usize>,
    reverse: ReverseIndex,
}

impl Lexicon {
    /// Validate `entries` and derive the reverse index.
    ///
    /// Entry order matters only for English senses shared by several
    /// Flowing words: the last entry wins.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        let mut by_flowing = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if by_flowing.insert(entry.flowing.clone(), idx).is_some() {
                return Err(LexiconError::DuplicateWord(entry.flowing.clone()));
            }
        }

        let reverse = ReverseIndex::build(&entries);
        debug!(
            entries = entries.len(),
            english_keys = reverse.len(),
            shadowed = reverse.shadowed().len(),
            "lexicon built"
        );

        Ok(Self {
            entries,
            by_flowing,
            reverse,
        })
    }

    /// Read and parse a lexicon TOML file.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        parse_lexicon_toml(&content)
    }

    /// Set custom lexicon TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        // Validate eagerly
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_LEXICON_TOML);
            parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    /// Exact Flowing-word lookup.
    pub fn lookup(&self, flowing: &str) -> Option<&LexiconEntry> {
        self.by_flowing.get(flowing).map(|&idx| &self.entries[idx])
    }

    /// Exact lookup of a lowercased English word.
    pub fn english_to_flowing(&self, english: &str) -> Option<&str> {
        self.reverse.get(english)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn entries_of(&self, class: WordClass) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter().filter(move |e| e.class == class)
    }

    pub fn reverse(&self) -> &ReverseIndex {
        &self.reverse
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
