//! Stateful translation session over an English/Flowing field pair.
//!
//! `TranslationSession` owns the text of both fields and reacts to edits and
//! to the explicit translate action, returning responses that a frontend
//! applies to its text boxes.

mod edit;
mod recording;
mod translate;
mod types;

#[cfg(test)]
mod tests;

use flow_core::{Direction, TextFields, Translator};

pub use types::{Field, SessionConfig, SessionResponse};

/// Two text fields plus the translator that links them.
pub struct TranslationSession<'a> {
    translator: Translator<'a>,
    config: SessionConfig,

    english: String,
    flowing: String,

    /// Direction of the most recent translation that actually ran.
    last_direction: Option<Direction>,
}

impl TranslationSession<'static> {
    /// Session over the process-wide lexicon and settings.
    pub fn global() -> Self {
        Self::new(Translator::global())
    }
}

impl<'a> TranslationSession<'a> {
    pub fn new(translator: Translator<'a>) -> Self {
        Self {
            translator,
            config: SessionConfig::default(),
            english: String::new(),
            flowing: String::new(),
            last_direction: None,
        }
    }

    pub fn set_live(&mut self, enabled: bool) {
        self.config.live = enabled;
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn translator(&self) -> Translator<'a> {
        self.translator
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::English => &self.english,
            Field::Flowing => &self.flowing,
        }
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_empty() && self.flowing.is_empty()
    }
}

impl TextFields for TranslationSession<'_> {
    fn english(&self) -> &str {
        &self.english
    }

    fn flowing(&self) -> &str {
        &self.flowing
    }

    fn set_english(&mut self, text: String) {
        self.english = text;
    }

    fn set_flowing(&mut self, text: String) {
        self.flowing = text;
    }
}
