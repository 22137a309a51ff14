//! Registry queries through the system whois client.

use super::cli;
use crate::error::{Error, Result};
use crate::models::{AddressFamily, Asn};

/// Something that can fetch the raw registry text for one identifier and family.
pub trait RegistryClient {
    /// One blocking round trip, no retry.
    fn query(&self, asn: &Asn, family: AddressFamily, server: &str) -> Result<String>;
}

/// Registry query string (RIPE/IRRd inverse lookup syntax).
pub fn query_string(asn: &Asn, family: AddressFamily) -> String {
    match family {
        AddressFamily::IPv4 => format!("-i origin {asn}"),
        AddressFamily::IPv6 => format!("-T route6 -i origin {asn}"),
    }
}

/// [`RegistryClient`] backed by an external whois command.
#[derive(Debug, Clone)]
pub struct WhoisCommand {
    command: String,
}

impl WhoisCommand {
    pub fn new(command: impl Into<String>) -> Self {
        WhoisCommand {
            command: command.into(),
        }
    }
}

impl RegistryClient for WhoisCommand {
    fn query(&self, asn: &Asn, family: AddressFamily, server: &str) -> Result<String> {
        let query = query_string(asn, family);
        cli::run(&self.command, &["-h", server, "--", &query]).map_err(|e| Error::Query {
            asn: asn.to_string(),
            family: family.to_string(),
            server: server.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::normalize;

    #[test]
    fn test_query_string() {
        let asn = normalize("as1234").unwrap();
        assert_eq!(query_string(&asn, AddressFamily::IPv4), "-i origin AS1234");
        assert_eq!(
            query_string(&asn, AddressFamily::IPv6),
            "-T route6 -i origin AS1234"
        );
    }

    #[test]
    fn test_missing_client_is_query_failure() {
        let client = WhoisCommand::new("asn-prefixes-no-such-whois");
        let asn = normalize("AS1").unwrap();
        let err = client
            .query(&asn, AddressFamily::IPv4, "whois.example.net")
            .unwrap_err();
        match err {
            Error::Query { asn, family, server, .. } => {
                assert_eq!(asn, "AS1");
                assert_eq!(family, "IPv4");
                assert_eq!(server, "whois.example.net");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
