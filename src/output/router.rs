//! Destination selection and writing.

use super::format::{format, OutputFormat};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::models::AddressFamily;
use crate::processing::ResultSet;
use colored::Colorize;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where one family's output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Console => write!(f, "console"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// `<base>.<suffix>`, appended to the full file name.
fn suffixed(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Destination for `family`, by priority: explicit per-family path, shared
/// base path (suffixed when both families are active), console.
pub fn route(config: &RunConfig, family: AddressFamily) -> Destination {
    if let Some(path) = config.family_output(family) {
        return Destination::File(path.clone());
    }
    match &config.output {
        Some(base) if config.families.is_both() => Destination::File(suffixed(base, family.suffix())),
        Some(base) => Destination::File(base.clone()),
        None => Destination::Console,
    }
}

/// Destinations of all active families, fixed before any formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPlan {
    routes: Vec<(AddressFamily, Destination)>,
}

impl OutputPlan {
    pub fn new(config: &RunConfig) -> Self {
        let routes = config
            .families
            .iter()
            .map(|family| (family, route(config, family)))
            .collect();
        OutputPlan { routes }
    }

    pub fn destination(&self, family: AddressFamily) -> Option<&Destination> {
        self.routes.iter().find(|(f, _)| *f == family).map(|(_, d)| d)
    }

    pub fn routes(&self) -> &[(AddressFamily, Destination)] {
        &self.routes
    }
}

/// Format and write every planned family, IPv4 first.
///
/// A failed write is logged and does not stop the other family; the
/// failures are reported together once everything has been attempted.
/// Unless `quiet`, each file write is announced with an info line.
pub fn emit(
    plan: &OutputPlan,
    results: &ResultSet,
    output_format: OutputFormat,
    quiet: bool,
    console: &mut dyn Write,
) -> Result<()> {
    let mut failures = Vec::new();

    for (family, destination) in plan.routes() {
        let records = results.records(*family);
        let text = format(records, *family, output_format)?;
        match destination {
            Destination::Console => {
                if let Err(e) = console.write_all(text.as_bytes()) {
                    log::error!("Error writing {family} prefixes to console: {e}");
                    failures.push(format!("console: {e}"));
                }
            }
            Destination::File(path) => match std::fs::write(path, &text) {
                Ok(()) if quiet => {}
                Ok(()) => log::info!(
                    "{family} prefixes ({count}) written to {path}",
                    count = records.len(),
                    path = path.display().to_string().green()
                ),
                Err(e) => {
                    log::error!("Error writing {family} prefixes to {}: {e}", path.display());
                    failures.push(format!("{}: {e}", path.display()));
                }
            },
        }
    }
    if let Err(e) = console.flush() {
        log::error!("Error flushing console: {e}");
        failures.push(format!("console: {e}"));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::Output(failures.join("; ")))
    }
}
