//! UniFFI export layer for native frontends.
//!
//! Each public type here maps to a generated foreign class, struct, or enum.

mod session;
mod types;

#[cfg(test)]
mod tests;

pub use session::FlowSession;
pub use types::{FlowDirection, FlowEntry, FlowError, FlowResponse, FlowSegment, FlowSegmentKind};

use std::path::Path;

use flow_core::{Lexicon, Translator};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn sanitize(text: String) -> Vec<String> {
    flow_core::sanitize::sanitize(&text)
}

#[uniffi::export]
fn translate_english(text: String) -> String {
    flow_core::translate::translate_english(&text)
}

#[uniffi::export]
fn translate_flowing(text: String) -> String {
    flow_core::translate::translate_flowing(&text)
}

#[uniffi::export]
fn explain(text: String, direction: FlowDirection) -> Vec<FlowSegment> {
    Translator::global()
        .translate(direction.into(), &text)
        .segments
        .into_iter()
        .map(Into::into)
        .collect()
}

#[uniffi::export]
fn select_direction(english: String, flowing: String) -> Option<FlowDirection> {
    flow_core::select_direction(&english, &flowing).map(Into::into)
}

#[uniffi::export]
fn lexicon_lookup(flowing: String) -> Option<FlowEntry> {
    Lexicon::global().lookup(&flowing).map(Into::into)
}

#[uniffi::export]
fn lexicon_entries() -> Vec<FlowEntry> {
    Lexicon::global().entries().iter().map(Into::into).collect()
}

#[uniffi::export]
fn lexicon_load_config(path: String) -> Result<(), FlowError> {
    let content = std::fs::read_to_string(&path).map_err(|e| FlowError::Io {
        msg: format!("{path}: {e}"),
    })?;
    Lexicon::init_custom(content).map_err(|e| FlowError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), FlowError> {
    let content = std::fs::read_to_string(&path).map_err(|e| FlowError::Io {
        msg: format!("{path}: {e}"),
    })?;
    flow_core::settings::init_custom(content)
        .map_err(|e| FlowError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn lexicon_default_config() -> String {
    flow_core::lexicon::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    flow_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
