//! DigitalOcean v2 API adapter
//!
//! - `client` - Blocking HTTP client implementing the CloudProvider port
//! - `wire` - Request/response bodies as the API shapes them

mod client;
mod wire;

pub use client::DigitalOceanClient;
