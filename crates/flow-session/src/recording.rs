use flow_core::TextFields;

use super::SessionResponse;

/// `TextFields` view over the session's strings that logs every write.
pub(super) struct Recording<'s> {
    pub english: &'s mut String,
    pub flowing: &'s mut String,
    pub response: SessionResponse,
}

impl<'s> Recording<'s> {
    pub fn new(english: &'s mut String, flowing: &'s mut String) -> Self {
        Self {
            english,
            flowing,
            response: SessionResponse::none(),
        }
    }
}

impl TextFields for Recording<'_> {
    fn english(&self) -> &str {
        self.english.as_str()
    }

    fn flowing(&self) -> &str {
        self.flowing.as_str()
    }

    fn set_english(&mut self, text: String) {
        self.english.clone_from(&text);
        self.response.english = Some(text);
    }

    fn set_flowing(&mut self, text: String) {
        self.flowing.clone_from(&text);
        self.response.flowing = Some(text);
    }
}
