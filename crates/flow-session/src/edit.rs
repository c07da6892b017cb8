use tracing::debug;

use super::types::{Field, SessionResponse};
use super::TranslationSession;

impl TranslationSession<'_> {
    /// Replace the English field, translating it in live mode.
    pub fn set_english(&mut self, text: &str) -> SessionResponse {
        self.edit(Field::English, text)
    }

    /// Replace the Flowing field, translating it in live mode.
    pub fn set_flowing(&mut self, text: &str) -> SessionResponse {
        self.edit(Field::Flowing, text)
    }

    pub fn edit(&mut self, field: Field, text: &str) -> SessionResponse {
        debug!(?field, chars = text.chars().count(), live = self.config.live, "edit");
        match field {
            Field::English => self.english = text.to_string(),
            Field::Flowing => self.flowing = text.to_string(),
        }
        if self.config.live {
            self.auto_translate(field.source_direction())
        } else {
            SessionResponse::none()
        }
    }

    /// Empty both fields.
    pub fn clear(&mut self) -> SessionResponse {
        self.english.clear();
        self.flowing.clear();
        SessionResponse {
            direction: None,
            english: Some(String::new()),
            flowing: Some(String::new()),
        }
    }
}
