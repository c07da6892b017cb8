use std::sync::{Arc, Mutex};

use flow_core::TextFields;
use flow_session::TranslationSession;

use super::{FlowDirection, FlowResponse};

/// Text-box pair owned by the host UI.
#[derive(uniffi::Object)]
pub struct FlowSession {
    session: Mutex<TranslationSession<'static>>,
}

#[uniffi::export]
impl FlowSession {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(TranslationSession::global()),
        })
    }

    pub fn set_english(&self, text: String) -> FlowResponse {
        self.session.lock().unwrap().set_english(&text).into()
    }

    pub fn set_flowing(&self, text: String) -> FlowResponse {
        self.session.lock().unwrap().set_flowing(&text).into()
    }

    pub fn auto_translate(&self, direction: FlowDirection) -> FlowResponse {
        self.session
            .lock()
            .unwrap()
            .auto_translate(direction.into())
            .into()
    }

    pub fn translate_both(&self) -> FlowResponse {
        self.session.lock().unwrap().translate_both().into()
    }

    pub fn clear(&self) -> FlowResponse {
        self.session.lock().unwrap().clear().into()
    }

    pub fn english(&self) -> String {
        self.session.lock().unwrap().english().to_string()
    }

    pub fn flowing(&self) -> String {
        self.session.lock().unwrap().flowing().to_string()
    }

    pub fn set_live(&self, enabled: bool) {
        self.session.lock().unwrap().set_live(enabled);
    }

    pub fn last_direction(&self) -> Option<FlowDirection> {
        self.session
            .lock()
            .unwrap()
            .last_direction()
            .map(Into::into)
    }
}
