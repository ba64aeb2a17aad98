//! Reconciliation of the per-key candidate lists into one deduplicated,
//! priority-resolved table.
//!
//! Matching by name outranks matching by phone, which outranks matching by
//! address: when a (company, customer) pair was found by a stronger method,
//! the weaker-method candidates for the same pair are suppressed. Each stage
//! consumes its input and returns a new vector; nothing is mutated in place
//! across stages.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{MatchCandidate, MatchMethod};

/// Combine the four per-key candidate lists into the final table: priority
/// suppression (Name > Phone > Address), then exact-row deduplication
/// keeping the first occurrence. Row order is deterministic here; the
/// cosmetic shuffle is a separate step ([`shuffle_rows`]).
pub fn reconcile(
    name: Vec<MatchCandidate>,
    phone_primary: Vec<MatchCandidate>,
    phone_secondary: Vec<MatchCandidate>,
    address: Vec<MatchCandidate>,
) -> Vec<MatchCandidate> {
    let mut combined = Vec::with_capacity(
        name.len() + phone_primary.len() + phone_secondary.len() + address.len(),
    );
    combined.extend(name);
    combined.extend(phone_primary);
    combined.extend(phone_secondary);
    combined.extend(address);

    let combined = suppress_weaker(combined, MatchMethod::Name, MatchMethod::Phone);
    let combined = suppress_weaker(combined, MatchMethod::Name, MatchMethod::Address);
    let combined = suppress_weaker(combined, MatchMethod::Phone, MatchMethod::Address);
    dedup_exact(combined)
}

/// Remove `weaker`-method candidates whose (company, customer) pair also
/// appears among `stronger`-method candidates.
fn suppress_weaker(
    candidates: Vec<MatchCandidate>,
    stronger: MatchMethod,
    weaker: MatchMethod,
) -> Vec<MatchCandidate> {
    let stronger_pairs: HashSet<(&str, &str)> = candidates
        .iter()
        .filter(|c| c.method == stronger)
        .map(MatchCandidate::pair)
        .collect();
    let keep: Vec<bool> = candidates
        .iter()
        .map(|c| c.method != weaker || !stronger_pairs.contains(&c.pair()))
        .collect();
    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(c, keep)| keep.then_some(c))
        .collect()
}

/// Drop candidates equal to an earlier one across all four fields.
fn dedup_exact(candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    let mut seen: HashSet<(String, String, MatchMethod, String)> =
        HashSet::with_capacity(candidates.len());
    let mut out = Vec::with_capacity(candidates.len());
    for c in candidates {
        let key = (
            c.company_name.clone(),
            c.toromont_name.clone(),
            c.method,
            c.total_project_value.clone(),
        );
        if seen.insert(key) {
            out.push(c);
        }
    }
    out
}

/// Emit the surviving rows in a uniformly random order. The permutation is
/// cosmetic and carries no meaning; a `seed` pins it for reproducible runs.
pub fn shuffle_rows(rows: &mut [MatchCandidate], seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    rows.shuffle(&mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(company: &str, toromont: &str, method: MatchMethod, value: &str) -> MatchCandidate {
        MatchCandidate {
            company_name: company.into(),
            toromont_name: toromont.into(),
            method,
            total_project_value: value.into(),
        }
    }

    fn sort_key(c: &MatchCandidate) -> (String, String, &'static str, String) {
        (
            c.company_name.clone(),
            c.toromont_name.clone(),
            c.method.as_str(),
            c.total_project_value.clone(),
        )
    }

    #[test]
    fn test_name_match_suppresses_phone_duplicate() {
        // Acme Inc. vs acme: equal by name and by primary phone
        let name = vec![cand("acme", "acme", MatchMethod::Name, "500")];
        let phone1 = vec![cand("acme", "acme", MatchMethod::Phone, "500")];
        let out = reconcile(name, phone1, Vec::new(), Vec::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method, MatchMethod::Name);
        assert_eq!(out[0].company_name, "acme");
    }

    #[test]
    fn test_name_match_suppresses_address_duplicate() {
        let name = vec![cand("acme", "acme", MatchMethod::Name, "500")];
        let address = vec![cand("acme", "acme", MatchMethod::Address, "500")];
        let out = reconcile(name, Vec::new(), Vec::new(), address);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method, MatchMethod::Name);
    }

    #[test]
    fn test_phone_match_suppresses_address_duplicate() {
        let phone2 = vec![cand("zeta", "different co", MatchMethod::Phone, "900")];
        let address = vec![cand("zeta", "different co", MatchMethod::Address, "900")];
        let out = reconcile(Vec::new(), Vec::new(), phone2, address);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method, MatchMethod::Phone);
    }

    #[test]
    fn test_phone_only_pair_survives_as_phone() {
        let phone1 = vec![cand("zeta", "different co", MatchMethod::Phone, "900")];
        let out = reconcile(Vec::new(), phone1, Vec::new(), Vec::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].method, MatchMethod::Phone);
    }

    #[test]
    fn test_both_phone_keys_collapse_to_one_row() {
        // the same pair found via phone 1 and phone 2 is an exact duplicate
        let phone1 = vec![cand("acme", "acme co", MatchMethod::Phone, "500")];
        let phone2 = vec![cand("acme", "acme co", MatchMethod::Phone, "500")];
        let out = reconcile(Vec::new(), phone1, phone2, Vec::new());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_address_fan_out_kept_per_customer() {
        // two customers share one company's address and nothing else
        let address = vec![
            cand("acme", "acme east", MatchMethod::Address, "500"),
            cand("acme", "acme west", MatchMethod::Address, "500"),
        ];
        let out = reconcile(Vec::new(), Vec::new(), Vec::new(), address);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| c.method == MatchMethod::Address));
        assert_ne!(out[0].toromont_name, out[1].toromont_name);
    }

    #[test]
    fn test_suppression_is_per_pair_not_per_company() {
        // acme matches one customer by name and a different one by phone;
        // the phone row is a distinct pair and must survive
        let name = vec![cand("acme", "acme", MatchMethod::Name, "500")];
        let phone1 = vec![
            cand("acme", "acme", MatchMethod::Phone, "500"),
            cand("acme", "acme holdings", MatchMethod::Phone, "500"),
        ];
        let mut out = reconcile(name, phone1, Vec::new(), Vec::new());
        out.sort_by_key(sort_key);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].method, MatchMethod::Name);
        assert_eq!(out[1].toromont_name, "acme holdings");
        assert_eq!(out[1].method, MatchMethod::Phone);
    }

    #[test]
    fn test_no_identical_rows_survive() {
        let address = vec![
            cand("acme", "acme east", MatchMethod::Address, "500"),
            cand("acme", "acme east", MatchMethod::Address, "500"),
        ];
        let out = reconcile(Vec::new(), Vec::new(), Vec::new(), address);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert!(reconcile(Vec::new(), Vec::new(), Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn test_shuffle_preserves_row_multiset() {
        let mut rows: Vec<MatchCandidate> = (0..32)
            .map(|i| {
                cand(
                    &format!("company {i}"),
                    &format!("customer {i}"),
                    MatchMethod::Name,
                    "100",
                )
            })
            .collect();
        let mut expected = rows.clone();
        shuffle_rows(&mut rows, Some(7));
        rows.sort_by_key(sort_key);
        expected.sort_by_key(sort_key);
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_shuffle_with_seed_is_reproducible() {
        let make = || -> Vec<MatchCandidate> {
            (0..16)
                .map(|i| cand(&format!("c{i}"), &format!("t{i}"), MatchMethod::Phone, "1"))
                .collect()
        };
        let mut a = make();
        let mut b = make();
        shuffle_rows(&mut a, Some(42));
        shuffle_rows(&mut b, Some(42));
        assert_eq!(a, b);
    }
}
