//! Domain Layer
//!
//! Pure types and port traits. Nothing in here spawns processes, performs
//! network IO or reads the terminal; the infrastructure layer implements the
//! ports and the application layer sequences them.
//!
//! ## Structure
//!
//! - `entities` - Records with identity or an outcome log
//! - `value_objects` - Immutable values built from configuration
//! - `ports` - Traits implemented by infrastructure adapters

pub mod entities;
pub mod ports;
pub mod value_objects;
