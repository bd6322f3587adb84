//! Terminal and NDJSON output for the binary
//!
//! `primitives` and `widgets` are rendering building blocks; `blocks`
//! compose them; `views` turn use case events into console output.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
