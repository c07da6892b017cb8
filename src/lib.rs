//! Host-facing engine for the Flowing translator.
//!
//! Re-exports the core and session crates and adds the UniFFI layer used by
//! native frontends.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use flow_core;
pub use flow_session;
