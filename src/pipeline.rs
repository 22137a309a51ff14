//! Resolution pipeline for one invocation.
//!
//! Queries every identifier for every active family, strictly in sequence,
//! then finalizes the [`ResultSet`] and hands it to the output router.

use crate::config::{FailurePolicy, RunConfig};
use crate::error::Result;
use crate::models::{AddressFamily, Asn, PrefixRecord};
use crate::output::{emit, OutputPlan};
use crate::processing::{extractor_for, ResultSet};
use crate::registry::{RateGate, RegistryClient};
use colored::Colorize;
use std::io::Write;

/// Query and extract one identifier/family pair, applying the failure policy.
fn resolve(
    config: &RunConfig,
    client: &dyn RegistryClient,
    asn: &Asn,
    family: AddressFamily,
) -> Result<Vec<PrefixRecord>> {
    let server = config.query.server(family);
    log::info!("Querying {asn} ({family}) at {server}", asn = asn.as_str().bold());

    match client.query(asn, family, server) {
        Ok(raw) => {
            let records = extractor_for(family).extract(&raw);
            log::debug!("{asn} ({family}): {} records", records.len());
            Ok(records)
        }
        Err(e) if config.query.failure_policy == FailurePolicy::Lenient => {
            log::warn!("{e}, treating as no records");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Run every query and build the finalized result set.
pub fn collect(
    config: &RunConfig,
    client: &dyn RegistryClient,
    gate: &mut dyn RateGate,
) -> Result<ResultSet> {
    let mut results = ResultSet::new();

    for asn in &config.asns {
        gate.wait();
        for family in config.families.iter() {
            let records = resolve(config, client, asn, family)?;
            results.append(family, records);
        }
    }

    if config.uniq {
        results.uniq();
    }
    let (v4, v6) = results.summary();
    log::info!(
        "Resolved {} ASNs: {v4} IPv4 / {v6} IPv6 prefixes{}",
        config.asns.len(),
        if config.uniq { " (uniq)" } else { "" }
    );
    Ok(results)
}

/// Resolve, format and write. The output plan is fixed before the first query.
pub fn run(
    config: &RunConfig,
    client: &dyn RegistryClient,
    gate: &mut dyn RateGate,
    console: &mut dyn Write,
) -> Result<ResultSet> {
    let plan = OutputPlan::new(config);
    for (family, destination) in plan.routes() {
        log::debug!("{family} output -> {destination}");
    }

    let results = collect(config, client, gate)?;
    emit(&plan, &results, config.format, config.quiet, console)?;
    Ok(results)
}
