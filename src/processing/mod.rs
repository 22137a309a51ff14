//! Registry response processing.
//!
//! - [`extract`] - Family-specific prefix extraction
//! - [`collect`] - Per-family accumulation and de-duplication

mod collect;
mod extract;

// Re-export public types and functions
pub use collect::ResultSet;
pub use extract::{extractor_for, Extractor, Ipv4Extractor, Ipv6Extractor};
