pub mod deploy;
pub mod provision;
