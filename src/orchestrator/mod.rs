//! High-level workflow coordination: ingestion, normalization, the four
//! matching passes, reconciliation, export and summary reporting.

pub mod summary;

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::config::AppConfig;
use crate::export::csv_export::{export_summary_csv, export_to_csv};
use crate::ingest::{load_companies, load_customers};
use crate::matching::reconcile::{reconcile, shuffle_rows};
use crate::matching::{match_by_key, MatchKey};
use crate::models::{NormalizedCompany, NormalizedCustomer};
use crate::normalize::{normalize_company, normalize_customer};
use crate::orchestrator::summary::MatchSummary;

/// Run the full pipeline described by `cfg` and return the run summary.
pub fn run(cfg: &AppConfig) -> Result<MatchSummary> {
    let started = chrono::Utc::now();

    let t_ingest = Instant::now();
    let companies = load_companies(&cfg.inputs.company_path)
        .with_context(|| format!("loading company list {}", cfg.inputs.company_path))?;
    let customers = load_customers(&cfg.inputs.customer_path)
        .with_context(|| format!("loading customer list {}", cfg.inputs.customer_path))?;
    let ingest_time = t_ingest.elapsed();
    info!(
        "Loaded {} companies and {} customers",
        companies.len(),
        customers.len()
    );

    let t_match = Instant::now();
    let companies_norm: Vec<NormalizedCompany> = companies.iter().map(normalize_company).collect();
    let customers_norm: Vec<NormalizedCustomer> =
        customers.iter().map(normalize_customer).collect();

    let by_name = match_by_key(&companies_norm, &customers_norm, MatchKey::Name);
    let by_phone_primary = match_by_key(&companies_norm, &customers_norm, MatchKey::PhonePrimary);
    let by_phone_secondary =
        match_by_key(&companies_norm, &customers_norm, MatchKey::PhoneSecondary);
    let by_address = match_by_key(&companies_norm, &customers_norm, MatchKey::Address);
    info!(
        "Candidates: name={} phone1={} phone2={} address={}",
        by_name.len(),
        by_phone_primary.len(),
        by_phone_secondary.len(),
        by_address.len()
    );

    let mut rows = reconcile(by_name, by_phone_primary, by_phone_secondary, by_address);
    if cfg.matching.shuffle {
        shuffle_rows(&mut rows, cfg.matching.shuffle_seed);
    }
    let match_time = t_match.elapsed();

    let t_export = Instant::now();
    export_to_csv(&rows, &cfg.export.out_path)
        .with_context(|| format!("writing {}", cfg.export.out_path))?;
    let export_time = t_export.elapsed();
    info!(
        "Wrote {} reconciled matches to {}",
        rows.len(),
        cfg.export.out_path
    );

    let summary = MatchSummary::new(&cfg.inputs.company_path, &cfg.inputs.customer_path)
        .with_counts(companies.len(), customers.len())
        .tally_methods(&rows)
        .with_timings(ingest_time, match_time, export_time)
        .with_timestamps(started, chrono::Utc::now());

    if let Some(path) = &cfg.export.summary_path {
        export_summary_csv(path, &summary).with_context(|| format!("writing {path}"))?;
        info!("Wrote run summary to {path}");
    }

    Ok(summary)
}
