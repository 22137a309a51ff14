//! Run configuration.
//!
//! A [`RunConfig`] is built once from the command line and passed by
//! reference through the pipeline; nothing reads configuration from global
//! state.

use crate::models::{AddressFamily, Asn, Families};
use crate::output::OutputFormat;
use std::path::PathBuf;
use std::time::Duration;

/// Registry used when no server is configured.
pub const DEFAULT_SERVER: &str = "whois.radb.net";
/// External whois client.
pub const DEFAULT_WHOIS_COMMAND: &str = "whois";
/// Responses larger than this are treated as failed queries.
pub const MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;

pub const ENV_SERVER4: &str = "ASN_PREFIXES_SERVER4";
pub const ENV_SERVER6: &str = "ASN_PREFIXES_SERVER6";
pub const ENV_WHOIS: &str = "ASN_PREFIXES_WHOIS";

/// What to do when a registry query fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and treat it as zero records.
    #[default]
    Lenient,
    /// Abort the run.
    Strict,
}

/// Registry query settings.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub server4: String,
    pub server6: String,
    /// Pause between successive identifiers.
    pub throttle: Duration,
    pub whois_command: String,
    pub failure_policy: FailurePolicy,
}

impl QueryConfig {
    pub fn server(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::IPv4 => &self.server4,
            AddressFamily::IPv6 => &self.server6,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            server4: DEFAULT_SERVER.to_string(),
            server6: DEFAULT_SERVER.to_string(),
            throttle: Duration::ZERO,
            whois_command: DEFAULT_WHOIS_COMMAND.to_string(),
            failure_policy: FailurePolicy::Lenient,
        }
    }
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunConfig {
    /// Canonical identifiers in submission order, repeats kept.
    pub asns: Vec<Asn>,
    pub families: Families,
    pub query: QueryConfig,
    pub format: OutputFormat,
    /// Base output path shared by the active families.
    pub output: Option<PathBuf>,
    pub output4: Option<PathBuf>,
    pub output6: Option<PathBuf>,
    pub uniq: bool,
    pub quiet: bool,
}

impl RunConfig {
    /// Explicit output path for one family, if configured.
    pub fn family_output(&self, family: AddressFamily) -> Option<&PathBuf> {
        match family {
            AddressFamily::IPv4 => self.output4.as_ref(),
            AddressFamily::IPv6 => self.output6.as_ref(),
        }
    }
}
