//! Exact equi-join matching between the normalized company and customer
//! tables, one pass per matching key.

use std::collections::HashMap;

use crate::models::{MatchCandidate, MatchMethod, NormalizedCompany, NormalizedCustomer};

pub mod reconcile;

/// Key a single matching pass joins on. Both phone keys tag their
/// candidates as [`MatchMethod::Phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey {
    Name,
    PhonePrimary,
    PhoneSecondary,
    Address,
}

impl MatchKey {
    pub fn method(self) -> MatchMethod {
        match self {
            MatchKey::Name => MatchMethod::Name,
            MatchKey::PhonePrimary | MatchKey::PhoneSecondary => MatchMethod::Phone,
            MatchKey::Address => MatchMethod::Address,
        }
    }

    fn company_field(self, c: &NormalizedCompany) -> &str {
        match self {
            MatchKey::Name => &c.company_name,
            MatchKey::PhonePrimary => &c.phone_primary,
            MatchKey::PhoneSecondary => &c.phone_secondary,
            MatchKey::Address => &c.address,
        }
    }

    fn customer_field(self, c: &NormalizedCustomer) -> &str {
        match self {
            MatchKey::Name => &c.name,
            MatchKey::PhonePrimary | MatchKey::PhoneSecondary => &c.phone,
            MatchKey::Address => &c.address,
        }
    }
}

/// Join the two normalized tables on `key` and emit one candidate per equal
/// pair. Fan-out is intentional: a company matching several customers (or
/// vice versa) yields one candidate for each pairing.
///
/// Blank keys never join: two records with an empty field in common are
/// not a real match. Output order is deterministic for a given input order:
/// companies outermost, customers in insertion order within a key value.
pub fn match_by_key(
    companies: &[NormalizedCompany],
    customers: &[NormalizedCustomer],
    key: MatchKey,
) -> Vec<MatchCandidate> {
    let mut index: HashMap<&str, Vec<&NormalizedCustomer>> = HashMap::new();
    for customer in customers {
        let value = key.customer_field(customer);
        if value.is_empty() {
            continue;
        }
        index.entry(value).or_default().push(customer);
    }

    let mut out = Vec::new();
    for company in companies {
        let value = key.company_field(company);
        if value.is_empty() {
            continue;
        }
        if let Some(bucket) = index.get(value) {
            for customer in bucket {
                out.push(MatchCandidate {
                    company_name: company.company_name.clone(),
                    toromont_name: customer.name.clone(),
                    method: key.method(),
                    total_project_value: company.total_project_value.clone(),
                });
            }
        }
    }
    out
}
