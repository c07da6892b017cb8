use flow_core::Direction;
use tracing::debug;

use super::recording::Recording;
use super::types::{Field, SessionResponse};
use super::TranslationSession;

impl TranslationSession<'_> {
    /// Translate out of the source field of `direction`.
    ///
    /// An empty source field translates nothing; if the other field is empty
    /// too, both are cleared.
    pub fn auto_translate(&mut self, direction: Direction) -> SessionResponse {
        let source = match direction {
            Direction::EnglishToFlowing => &self.english,
            Direction::FlowingToEnglish => &self.flowing,
        };

        if !source.is_empty() {
            let out = self.translator.translate(direction, source).text();
            return self.write_translation(direction, out);
        }

        if self.is_empty() {
            debug!("both fields empty, clearing");
            return self.clear();
        }

        SessionResponse::none()
    }

    /// Translate from whichever field holds more text into the other.
    pub fn translate_both(&mut self) -> SessionResponse {
        let translator = self.translator;
        let mut fields = Recording::new(&mut self.english, &mut self.flowing);
        let direction = translator.translate_fields(&mut fields);
        let mut response = fields.response;
        response.direction = direction;
        if direction.is_some() {
            self.last_direction = direction;
        }
        response
    }

    fn write_translation(&mut self, direction: Direction, text: String) -> SessionResponse {
        let mut response = SessionResponse {
            direction: Some(direction),
            ..SessionResponse::none()
        };
        match Field::target_of(direction) {
            Field::English => {
                self.english.clone_from(&text);
                response.english = Some(text);
            }
            Field::Flowing => {
                self.flowing.clone_from(&text);
                response.flowing = Some(text);
            }
        }
        self.last_direction = Some(direction);
        response
    }
}
