//! Prefix record extracted from a registry response.

use super::AddressFamily;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CIDR network tagged with the family it was extracted under.
///
/// The CIDR text is kept as found in the response; no numeric validation is
/// performed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixRecord {
    pub cidr: String,
    pub family: AddressFamily,
}

impl PrefixRecord {
    pub fn new(cidr: impl Into<String>, family: AddressFamily) -> Self {
        PrefixRecord {
            cidr: cidr.into(),
            family,
        }
    }
}

impl fmt::Display for PrefixRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cidr)
    }
}
