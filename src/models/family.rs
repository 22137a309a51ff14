//! Address family selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IP address family a registry query and its records belong to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

impl AddressFamily {
    /// Family number used in csv output.
    pub fn number(self) -> u8 {
        match self {
            AddressFamily::IPv4 => 4,
            AddressFamily::IPv6 => 6,
        }
    }

    /// Suffix appended to a shared output path when both families are written.
    pub fn suffix(self) -> &'static str {
        match self {
            AddressFamily::IPv4 => "ipv4",
            AddressFamily::IPv6 => "ipv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::IPv4 => write!(f, "IPv4"),
            AddressFamily::IPv6 => write!(f, "IPv6"),
        }
    }
}

/// The set of families a run queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Families {
    V4,
    V6,
    #[default]
    Both,
}

impl Families {
    /// Active families, always IPv4 before IPv6.
    pub fn iter(self) -> impl Iterator<Item = AddressFamily> {
        let list: &'static [AddressFamily] = match self {
            Families::V4 => &[AddressFamily::IPv4],
            Families::V6 => &[AddressFamily::IPv6],
            Families::Both => &[AddressFamily::IPv4, AddressFamily::IPv6],
        };
        list.iter().copied()
    }

    pub fn is_both(self) -> bool {
        self == Families::Both
    }

    pub fn contains(self, family: AddressFamily) -> bool {
        self.iter().any(|f| f == family)
    }
}
