//! CLI library components for the SUNA log decoder.

pub mod decode;
pub mod logging;
pub mod types;
