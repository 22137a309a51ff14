//! Prefix extraction from raw registry responses.
//!
//! Each family has its own grammar, selected through [`extractor_for`].
//! Extraction is a best-effort text match, not a protocol parser.

use crate::models::{AddressFamily, PrefixRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Dotted quad followed by a prefix length, as one whole token.
///
/// The leading group stops a match from starting inside a longer digit or
/// dot run, so malformed tokens come out verbatim instead of as a shorter,
/// different network.
static IPV4_CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ipv4_cidr_regex() -> &'static Regex {
    IPV4_CIDR_REGEX.get_or_init(|| {
        Regex::new(r"(?:^|[^0-9.])([0-9]+(?:\.[0-9]+){3}/[0-9]+)").expect("Invalid Regex")
    })
}

/// Parses prefix records out of a registry response.
pub trait Extractor {
    fn family(&self) -> AddressFamily;

    /// Records in order of appearance, duplicates included.
    fn extract(&self, raw: &str) -> Vec<PrefixRecord>;
}

/// Every CIDR-looking IPv4 substring of the response.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ipv4Extractor;

impl Extractor for Ipv4Extractor {
    fn family(&self) -> AddressFamily {
        AddressFamily::IPv4
    }

    fn extract(&self, raw: &str) -> Vec<PrefixRecord> {
        get_ipv4_cidr_regex()
            .captures_iter(raw)
            .filter_map(|c| c.get(1))
            .map(|m| PrefixRecord::new(m.as_str(), AddressFamily::IPv4))
            .collect()
    }
}

/// The value of every `route6:` attribute line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ipv6Extractor;

impl Ipv6Extractor {
    const LABEL: &'static str = "route6:";

    fn route6_value(line: &str) -> Option<&str> {
        let line = line.trim_start();
        let label = line.get(..Self::LABEL.len())?;
        if !label.eq_ignore_ascii_case(Self::LABEL) {
            return None;
        }
        line[Self::LABEL.len()..].split_whitespace().next()
    }
}

impl Extractor for Ipv6Extractor {
    fn family(&self) -> AddressFamily {
        AddressFamily::IPv6
    }

    fn extract(&self, raw: &str) -> Vec<PrefixRecord> {
        raw.lines()
            .filter_map(Self::route6_value)
            .map(|cidr| PrefixRecord::new(cidr, AddressFamily::IPv6))
            .collect()
    }
}

/// Extractor for the grammar of `family`.
pub fn extractor_for(family: AddressFamily) -> &'static dyn Extractor {
    match family {
        AddressFamily::IPv4 => &Ipv4Extractor,
        AddressFamily::IPv6 => &Ipv6Extractor,
    }
}
