//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON deploy events for CI/automation
//! - JsonProvisionSink: NDJSON provision events
//!
//! Console rendering lives in the binary's `ui` module.

mod json;

pub use json::{JsonEventSink, JsonProvisionSink};
