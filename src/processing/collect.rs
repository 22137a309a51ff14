//! Per-family accumulation of extracted records.

use crate::models::{AddressFamily, PrefixRecord};

/// Records per family, in identifier-then-extraction order until [`ResultSet::uniq`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultSet {
    ipv4: Vec<PrefixRecord>,
    ipv6: Vec<PrefixRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, family: AddressFamily) -> &[PrefixRecord] {
        match family {
            AddressFamily::IPv4 => &self.ipv4,
            AddressFamily::IPv6 => &self.ipv6,
        }
    }

    fn records_mut(&mut self, family: AddressFamily) -> &mut Vec<PrefixRecord> {
        match family {
            AddressFamily::IPv4 => &mut self.ipv4,
            AddressFamily::IPv6 => &mut self.ipv6,
        }
    }

    /// Append one query's records, preserving order.
    pub fn append(&mut self, family: AddressFamily, records: Vec<PrefixRecord>) {
        self.records_mut(family).extend(records);
    }

    /// Reduce each family to its sorted set of CIDR strings.
    pub fn uniq(&mut self) {
        for records in [&mut self.ipv4, &mut self.ipv6] {
            let before = records.len();
            // Dedup needs sorted input
            records.sort_by(|a, b| a.cidr.cmp(&b.cidr));
            records.dedup_by(|a, b| a.cidr == b.cidr);
            log::debug!("uniq: {before} -> {} records", records.len());
        }
    }

    /// Record counts as `(ipv4, ipv6)`.
    pub fn summary(&self) -> (usize, usize) {
        (self.ipv4.len(), self.ipv6.len())
    }
}
