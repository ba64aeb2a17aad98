use std::fs::File;
use std::io::BufWriter;

use csv::WriterBuilder;

use crate::error::ExportError;
use crate::models::MatchCandidate;
use crate::orchestrator::summary::MatchSummary;

/// Output columns, in fixed order.
pub const OUTPUT_HEADERS: [&str; 4] = [
    "CompanyName",
    "ToromontName",
    "MatchingMethod",
    "TotalProjectValue",
];

/// Write the reconciled table as a headered CSV, one row per surviving
/// candidate, no index column.
pub fn export_to_csv(results: &[MatchCandidate], path: &str) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(512 * 1024, file);
    let mut w = WriterBuilder::new().from_writer(buf_writer);
    w.write_record(OUTPUT_HEADERS)?;
    for row in results {
        w.write_record([
            row.company_name.as_str(),
            row.toromont_name.as_str(),
            row.method.as_str(),
            row.total_project_value.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write the run summary as Key/Value rows.
pub fn export_summary_csv(path: &str, ctx: &MatchSummary) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(512 * 1024, file);
    let mut w = WriterBuilder::new().from_writer(buf_writer);
    w.write_record(["Key", "Value"])?;

    let mut write_kv = |k: &str, v: String| -> Result<(), ExportError> {
        w.write_record([k, v.as_str()])?;
        Ok(())
    };

    write_kv("Company list", ctx.company_path.clone())?;
    write_kv("Customer list", ctx.customer_path.clone())?;
    write_kv("Total records (companies)", ctx.total_companies.to_string())?;
    write_kv("Total records (customers)", ctx.total_customers.to_string())?;
    write_kv("Matches (By name)", ctx.matches_by_name.to_string())?;
    write_kv("Matches (By phone)", ctx.matches_by_phone.to_string())?;
    write_kv("Matches (By address)", ctx.matches_by_address.to_string())?;
    write_kv("Matches (total)", ctx.total_matches().to_string())?;

    let fmt_time = |dt: &chrono::DateTime<chrono::Utc>| -> String {
        format!("{} UTC", dt.format("%Y-%m-%d %H:%M:%S"))
    };
    // Human-readable HH:MM:SS
    let fmt_duration = |secs: f64| -> String {
        let total = secs.floor() as u64;
        let h = total / 3600;
        let m = (total % 3600) / 60;
        let s = total % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    };
    write_kv("Started (UTC)", fmt_time(&ctx.started_utc))?;
    write_kv("Ended (UTC)", fmt_time(&ctx.ended_utc))?;
    write_kv("Duration", fmt_duration(ctx.duration_secs()))?;

    w.flush()?;
    Ok(())
}
