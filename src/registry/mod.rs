//! Routing registry access.
//!
//! - [`cli`] - External command execution
//! - [`whois`] - Registry queries per identifier and family
//! - [`throttle`] - Pacing between identifiers

mod cli;
mod throttle;
mod whois;

pub use cli::{run, CommandError};
pub use throttle::{FixedDelay, RateGate};
pub use whois::{query_string, RegistryClient, WhoisCommand};
