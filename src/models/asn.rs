//! ASN identifier normalization.
//!
//! Provides [`Asn`], the canonical `AS<digits>` identifier, and the helpers
//! that read identifiers from an inline list or a list file.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for identifiers embedded anywhere in free text.
static ASN_SCAN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_asn_scan_regex() -> &'static Regex {
    ASN_SCAN_REGEX.get_or_init(|| Regex::new(r"(?:[Aa][Ss])?[0-9]+").expect("Invalid Regex"))
}

/// Autonomous System Number in canonical `AS<digits>` form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Asn(String);

impl Asn {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a raw ASN token.
///
/// `AS<digits>` passes through unchanged; otherwise a leading `AS` (any case)
/// is stripped and `AS` is prepended to the remaining digits.
///
/// # Examples
/// ```
/// use asn_prefixes::models::normalize;
/// assert_eq!(normalize("as64500").unwrap().as_str(), "AS64500");
/// assert_eq!(normalize("64500").unwrap().as_str(), "AS64500");
/// ```
pub fn normalize(token: &str) -> Result<Asn> {
    let token = token.trim();
    let digits = match token.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("as") => &token[2..],
        _ => token,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Usage(format!("invalid ASN '{token}'")));
    }
    Ok(Asn(format!("AS{digits}")))
}

impl FromStr for Asn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        normalize(s)
    }
}

impl TryFrom<String> for Asn {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        normalize(&s)
    }
}

impl From<Asn> for String {
    fn from(asn: Asn) -> Self {
        asn.0
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse an inline list, separated by commas and/or whitespace.
pub fn parse_asn_list(list: &str) -> Result<Vec<Asn>> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(normalize)
        .collect()
}

/// Every `AS<digits>` or bare `<digits>` substring of `text`, in order.
pub fn scan_asn_text(text: &str) -> Vec<Asn> {
    get_asn_scan_regex()
        .find_iter(text)
        .filter_map(|m| normalize(m.as_str()).ok())
        .collect()
}

/// Read identifiers from a list file.
pub fn read_asn_file(path: &Path) -> Result<Vec<Asn>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::Usage(format!("cannot read list file {}: {e}", path.display()))
    })?;
    let asns = scan_asn_text(&text);
    log::debug!("Read {} ASNs from {}", asns.len(), path.display());
    Ok(asns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_passthrough() {
        assert_eq!(normalize("AS1234").unwrap().as_str(), "AS1234");
    }

    #[test]
    fn test_normalize_variants() {
        for token in ["1234", "as1234", "As1234", " AS1234 "] {
            assert_eq!(normalize(token).unwrap().as_str(), "AS1234", "{token}");
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        for token in ["7", "as15169", "AS13335", "0064500"] {
            let once = normalize(token).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            assert_eq!(once, twice);
            assert!(once.as_str().starts_with("AS"));
            assert!(once.as_str()[2..].bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        for token in ["", "AS", "ASX1", "12a", "AS-1"] {
            assert!(matches!(normalize(token), Err(Error::Usage(_))), "{token}");
        }
    }

    #[test]
    fn test_parse_asn_list() {
        let asns = parse_asn_list("AS1, 2 as3,,AS1").unwrap();
        let asns: Vec<&str> = asns.iter().map(Asn::as_str).collect();
        assert_eq!(asns, vec!["AS1", "AS2", "AS3", "AS1"]);
    }

    #[test]
    fn test_scan_asn_text() {
        let text = "# edge peers\nAS64500 transit\n64501,as64502\n";
        let asns: Vec<String> = scan_asn_text(text).into_iter().map(String::from).collect();
        assert_eq!(asns, vec!["AS64500", "AS64501", "AS64502"]);
    }

    #[test]
    fn test_read_asn_file_matches_inline() {
        let from_file = read_asn_file(Path::new("src/tests/test_data/asn_list.txt"))
            .expect("Error reading list file");
        let inline = parse_asn_list("AS1234 AS64500 as64501 15169 AS1234").unwrap();
        assert_eq!(from_file, inline);
    }

    #[test]
    fn test_read_asn_file_missing() {
        let result = read_asn_file(Path::new("src/tests/test_data/does_not_exist.txt"));
        assert!(matches!(result, Err(Error::Usage(_))));
    }

    #[test]
    fn test_asn_serde() {
        let asn: Asn = serde_json::from_str("\"as42\"").unwrap();
        assert_eq!(serde_json::to_string(&asn).unwrap(), "\"AS42\"");
    }
}
