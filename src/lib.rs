//! Resolve Autonomous System Numbers to the prefixes they originate.
//!
//! Identifiers are normalized, each is queried per address family against a
//! routing registry, prefixes are extracted from the free-text responses and
//! written as cidr, csv or json to the console or to files.

pub mod args;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod registry;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::{collect, run};
