//! Run summary: per-method match counts, totals and timings for one run.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::{MatchCandidate, MatchMethod};

#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub company_path: String,
    pub customer_path: String,
    pub total_companies: usize,
    pub total_customers: usize,
    pub matches_by_name: usize,
    pub matches_by_phone: usize,
    pub matches_by_address: usize,
    pub ingest_time: Duration,
    pub match_time: Duration,
    pub export_time: Duration,
    pub started_utc: DateTime<Utc>,
    pub ended_utc: DateTime<Utc>,
}

impl MatchSummary {
    pub fn new(company_path: &str, customer_path: &str) -> Self {
        let now = Utc::now();
        Self {
            company_path: company_path.to_string(),
            customer_path: customer_path.to_string(),
            total_companies: 0,
            total_customers: 0,
            matches_by_name: 0,
            matches_by_phone: 0,
            matches_by_address: 0,
            ingest_time: Duration::ZERO,
            match_time: Duration::ZERO,
            export_time: Duration::ZERO,
            started_utc: now,
            ended_utc: now,
        }
    }

    pub fn with_counts(mut self, companies: usize, customers: usize) -> Self {
        self.total_companies = companies;
        self.total_customers = customers;
        self
    }

    /// Count the surviving rows per matching method.
    pub fn tally_methods(mut self, rows: &[MatchCandidate]) -> Self {
        self.matches_by_name = 0;
        self.matches_by_phone = 0;
        self.matches_by_address = 0;
        for row in rows {
            match row.method {
                MatchMethod::Name => self.matches_by_name += 1,
                MatchMethod::Phone => self.matches_by_phone += 1,
                MatchMethod::Address => self.matches_by_address += 1,
            }
        }
        self
    }

    pub fn with_timings(mut self, ingest: Duration, matching: Duration, export: Duration) -> Self {
        self.ingest_time = ingest;
        self.match_time = matching;
        self.export_time = export;
        self
    }

    pub fn with_timestamps(mut self, started: DateTime<Utc>, ended: DateTime<Utc>) -> Self {
        self.started_utc = started;
        self.ended_utc = ended;
        self
    }

    pub fn total_matches(&self) -> usize {
        self.matches_by_name + self.matches_by_phone + self.matches_by_address
    }

    pub fn duration_secs(&self) -> f64 {
        (self.ended_utc - self.started_utc).num_milliseconds() as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_each_method() {
        let rows = vec![
            MatchCandidate {
                company_name: "a".into(),
                toromont_name: "a".into(),
                method: MatchMethod::Name,
                total_project_value: "1".into(),
            },
            MatchCandidate {
                company_name: "b".into(),
                toromont_name: "c".into(),
                method: MatchMethod::Phone,
                total_project_value: "2".into(),
            },
            MatchCandidate {
                company_name: "d".into(),
                toromont_name: "e".into(),
                method: MatchMethod::Address,
                total_project_value: "3".into(),
            },
            MatchCandidate {
                company_name: "d".into(),
                toromont_name: "f".into(),
                method: MatchMethod::Address,
                total_project_value: "3".into(),
            },
        ];
        let summary = MatchSummary::new("a.csv", "b.csv").tally_methods(&rows);
        assert_eq!(summary.matches_by_name, 1);
        assert_eq!(summary.matches_by_phone, 1);
        assert_eq!(summary.matches_by_address, 2);
        assert_eq!(summary.total_matches(), 4);
    }
}
