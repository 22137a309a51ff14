//! Command line arguments.
//!
//! [`Args`] is the clap surface; [`Args::into_config`] validates it and
//! builds the immutable [`RunConfig`] before any query is issued.

use crate::config::{
    FailurePolicy, QueryConfig, RunConfig, DEFAULT_SERVER, DEFAULT_WHOIS_COMMAND, ENV_SERVER4,
    ENV_SERVER6, ENV_WHOIS,
};
use crate::error::{Error, Result};
use crate::models::{parse_asn_list, read_asn_file, Families};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Default)]
#[command(name = "asn-prefixes", version)]
#[command(about = "Resolve ASNs to the IPv4/IPv6 prefixes they originate.")]
pub struct Args {
    /// Comma or space separated ASNs, e.g. AS1234,64500
    #[arg(short, long, value_name = "LIST")]
    pub asn: Option<String>,

    /// File to scan for ASNs (any AS<digits> or <digits> substring)
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Query IPv4 prefixes only
    #[arg(short = '4')]
    pub ipv4: bool,

    /// Query IPv6 prefixes only
    #[arg(short = '6')]
    pub ipv6: bool,

    /// Query both families (default)
    #[arg(short, long)]
    pub both: bool,

    /// Registry server for both families
    #[arg(short, long, value_name = "HOST")]
    pub server: Option<String>,

    /// Registry server for IPv4 queries
    #[arg(long, value_name = "HOST")]
    pub server4: Option<String>,

    /// Registry server for IPv6 queries
    #[arg(long, value_name = "HOST")]
    pub server6: Option<String>,

    /// Output file; suffixed with .ipv4/.ipv6 when both families are queried
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output file for IPv4 prefixes
    #[arg(long, value_name = "FILE")]
    pub output4: Option<PathBuf>,

    /// Output file for IPv6 prefixes
    #[arg(long, value_name = "FILE")]
    pub output6: Option<PathBuf>,

    /// Write to the console (default)
    // Console is already the fallback route; the flag only rejects output paths.
    #[arg(short, long, conflicts_with_all = ["output", "output4", "output6"])]
    pub console: bool,

    /// Output format: cidr, csv or json
    #[arg(short, long, value_name = "FORMAT", default_value = "cidr")]
    pub format: String,

    /// Sort and remove duplicate prefixes
    #[arg(short, long)]
    pub uniq: bool,

    /// Seconds to wait between ASNs
    #[arg(short, long, value_name = "SEC", default_value_t = 0.0)]
    pub throttle: f64,

    /// Only print results and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Fail the run when a registry query fails
    #[arg(long)]
    pub strict: bool,

    /// Whois client command
    #[arg(long, value_name = "CMD", env = ENV_WHOIS, default_value = DEFAULT_WHOIS_COMMAND)]
    pub whois: String,
}

/// Registry server by priority: per-family flag, `-s`, environment, default.
fn resolve_server(
    specific: Option<String>,
    shared: Option<String>,
    from_env: Option<String>,
) -> String {
    specific
        .or(shared)
        .or(from_env)
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

impl Args {
    /// Families to query; a lone per-family output narrows the selection.
    fn families(&self) -> Families {
        match (&self.output4, &self.output6) {
            (Some(_), None) => return Families::V4,
            (None, Some(_)) => return Families::V6,
            _ => {}
        }
        match (self.both, self.ipv4, self.ipv6) {
            (true, _, _) | (_, true, true) => Families::Both,
            (_, true, false) => Families::V4,
            (_, false, true) => Families::V6,
            _ => Families::Both,
        }
    }

    fn throttle(&self) -> Result<Duration> {
        if !self.throttle.is_finite() || self.throttle < 0.0 {
            return Err(Error::Usage(format!(
                "throttle must be a non-negative number of seconds, got {}",
                self.throttle
            )));
        }
        Duration::try_from_secs_f64(self.throttle).map_err(|e| {
            Error::Usage(format!("throttle of {} seconds is out of range: {e}", self.throttle))
        })
    }

    /// Validate and build the run configuration. Reads the list file if given.
    pub fn into_config(self) -> Result<RunConfig> {
        let format: OutputFormat = self.format.parse()?;
        let families = self.families();
        let throttle = self.throttle()?;

        let mut asns = match &self.asn {
            Some(list) => parse_asn_list(list)?,
            None => Vec::new(),
        };
        if let Some(path) = &self.list {
            asns.extend(read_asn_file(path)?);
        }
        if asns.is_empty() {
            return Err(Error::Usage(
                "no ASNs given, use -a/--asn or -l/--list".to_string(),
            ));
        }

        let query = QueryConfig {
            server4: resolve_server(
                self.server4.clone(),
                self.server.clone(),
                std::env::var(ENV_SERVER4).ok(),
            ),
            server6: resolve_server(
                self.server6.clone(),
                self.server.clone(),
                std::env::var(ENV_SERVER6).ok(),
            ),
            throttle,
            whois_command: self.whois.clone(),
            failure_policy: if self.strict {
                FailurePolicy::Strict
            } else {
                FailurePolicy::Lenient
            },
        };

        Ok(RunConfig {
            asns,
            families,
            query,
            format,
            output: self.output,
            output4: self.output4,
            output6: self.output6,
            uniq: self.uniq,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressFamily;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("asn-prefixes").chain(args.iter().copied()))
            .expect("Error parsing args")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["-a", "AS1234"]);
        assert_eq!(args.format, "cidr");
        let cfg = args.into_config().unwrap();
        assert_eq!(cfg.families, Families::Both);
        assert_eq!(cfg.format, OutputFormat::Cidr);
        assert_eq!(cfg.asns.len(), 1);
        assert_eq!(cfg.query.throttle, Duration::ZERO);
        assert!(!cfg.uniq);
    }

    #[test]
    fn test_family_flags() {
        assert_eq!(parse(&["-a", "1", "-4"]).families(), Families::V4);
        assert_eq!(parse(&["-a", "1", "-6"]).families(), Families::V6);
        assert_eq!(parse(&["-a", "1", "-4", "-6"]).families(), Families::Both);
        assert_eq!(parse(&["-a", "1", "-4", "-b"]).families(), Families::Both);
    }

    #[test]
    fn test_lone_output4_forces_ipv4() {
        let cfg = parse(&["-a", "AS1234", "-b", "--output4", "a.txt"])
            .into_config()
            .unwrap();
        assert_eq!(cfg.families, Families::V4);
        assert!(!cfg.families.contains(AddressFamily::IPv6));
    }

    #[test]
    fn test_lone_output6_forces_ipv6() {
        let cfg = parse(&["-a", "AS1234", "-4", "--output6", "b.txt"])
            .into_config()
            .unwrap();
        assert_eq!(cfg.families, Families::V6);
    }

    #[test]
    fn test_both_outputs_keep_selection() {
        let args = parse(&["-a", "1", "-6", "--output4", "a", "--output6", "b"]);
        assert_eq!(args.families(), Families::V6);
    }

    #[test]
    fn test_server_priority() {
        let cfg = parse(&["-a", "1", "-s", "whois.example.net", "--server6", "whois.v6.example.net"])
            .into_config()
            .unwrap();
        assert_eq!(cfg.query.server(AddressFamily::IPv4), "whois.example.net");
        assert_eq!(cfg.query.server(AddressFamily::IPv6), "whois.v6.example.net");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = parse(&["-a", "1", "-f", "xml"]).into_config().unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_empty_asn_set_rejected() {
        let err = parse(&[]).into_config().unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        let err = parse(&["-a", " , "]).into_config().unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_missing_list_file_rejected() {
        let err = parse(&["-l", "src/tests/test_data/nope.txt"]).into_config().unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_list_and_inline_concatenate() {
        let cfg = parse(&["-a", "AS7", "-l", "src/tests/test_data/asn_list.txt"])
            .into_config()
            .unwrap();
        let asns: Vec<&str> = cfg.asns.iter().map(|a| a.as_str()).collect();
        assert_eq!(asns, vec!["AS7", "AS1234", "AS64500", "AS64501", "AS15169", "AS1234"]);
    }

    #[test]
    fn test_throttle() {
        let cfg = parse(&["-a", "1", "-t", "1.5"]).into_config().unwrap();
        assert_eq!(cfg.query.throttle, Duration::from_millis(1500));
        let args = Args {
            asn: Some("1".into()),
            format: "cidr".into(),
            throttle: -1.0,
            ..Default::default()
        };
        assert!(matches!(args.into_config(), Err(Error::Usage(_))));
    }

    #[test]
    fn test_throttle_too_large() {
        let err = parse(&["-a", "1", "-t", "1e20"]).into_config().unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_resolve_server_priority() {
        let some = |s: &str| Some(s.to_string());
        assert_eq!(
            resolve_server(some("v4.example.net"), some("cli.example.net"), some("env.example.net")),
            "v4.example.net"
        );
        assert_eq!(
            resolve_server(None, some("cli.example.net"), some("env.example.net")),
            "cli.example.net"
        );
        assert_eq!(resolve_server(None, None, some("env.example.net")), "env.example.net");
        assert_eq!(resolve_server(None, None, None), DEFAULT_SERVER);
    }

    #[test]
    fn test_shared_server_beats_environment() {
        std::env::set_var(ENV_SERVER4, "env.example.net");
        let cfg = parse(&["-a", "1", "-s", "cli.example.net"]).into_config().unwrap();
        std::env::remove_var(ENV_SERVER4);
        assert_eq!(cfg.query.server(AddressFamily::IPv4), "cli.example.net");
        assert_eq!(cfg.query.server(AddressFamily::IPv6), "cli.example.net");
    }

    #[test]
    fn test_console_conflicts_with_output() {
        let result = Args::try_parse_from(["asn-prefixes", "-a", "1", "-c", "-o", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_flag() {
        let cfg = parse(&["-a", "1", "--strict"]).into_config().unwrap();
        assert_eq!(cfg.query.failure_policy, FailurePolicy::Strict);
    }
}
