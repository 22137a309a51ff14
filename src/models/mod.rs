//! Domain models for ASN prefix resolution.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Asn`] - canonical ASN identifier and its normalizer
//! - [`AddressFamily`] and [`Families`] - address family selection
//! - [`PrefixRecord`] - a CIDR extracted from a registry response

mod asn;
mod family;
mod prefix;

// Re-export public types
pub use asn::{normalize, parse_asn_list, read_asn_file, scan_asn_text, Asn};
pub use family::{AddressFamily, Families};
pub use prefix::PrefixRecord;
