//! Public IP Port
//!
//! Resolves the operator's public IPv4 address for the SSH allow rule.

use std::net::Ipv4Addr;

use crate::error::LaunchpadResult;

pub trait PublicIpResolver {
    fn resolve(&self) -> LaunchpadResult<Ipv4Addr>;
}
