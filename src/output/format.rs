//! Text serialization of a family's records.

use crate::error::{Error, Result};
use crate::models::{AddressFamily, PrefixRecord};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format selected with `--format`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One CIDR per line.
    #[default]
    Cidr,
    /// `<cidr>,<4|6>` per line.
    Csv,
    /// A single JSON array of CIDR strings.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cidr" => Ok(OutputFormat::Cidr),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Format(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Cidr => "cidr",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Serialize `records` of `family`; every line ends with a newline.
pub fn format(records: &[PrefixRecord], family: AddressFamily, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Cidr => records.iter().map(|r| format!("{r}\n")).join(""),
        OutputFormat::Csv => records
            .iter()
            .map(|r| format!("{},{}\n", r.cidr, family.number()))
            .join(""),
        OutputFormat::Json => {
            let cidrs: Vec<&str> = records.iter().map(|r| r.cidr.as_str()).collect();
            format!("{}\n", serde_json::to_string(&cidrs)?)
        }
    };
    Ok(text)
}
