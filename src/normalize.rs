use crate::models::{CompanyRecord, CustomerRecord, NormalizedCompany, NormalizedCustomer};

/// Which canonicalization rules apply to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Address,
    Phone,
}

/// Corporate suffixes removed from names. Substring removal, matching the
/// source data convention (inc vs ltd used interchangeably).
const NAME_SUFFIXES: [&str; 2] = ["inc", "ltd"];

/// Two-letter Canadian province/territory codes recognized at the tail of
/// an internal address.
const PROVINCE_CODES: [&str; 13] = [
    "ab", "bc", "mb", "nb", "nl", "ns", "nt", "nu", "on", "pe", "qc", "sk", "yt",
];

/// Drop everything that is neither alphanumeric nor whitespace; runs of
/// whitespace collapse to a single space.
fn strip_specials(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
        } else if ch.is_whitespace() && !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Canonicalize a single raw field. Total over any input; empty or missing
/// fields normalize to the empty string.
pub fn normalize_field(input: &str, kind: FieldKind) -> String {
    let cleaned = strip_specials(input);
    match kind {
        // Phone digits become contiguous; case is irrelevant for digits
        FieldKind::Phone => cleaned.chars().filter(|c| !c.is_whitespace()).collect(),
        FieldKind::Address => cleaned.to_lowercase(),
        FieldKind::Name => {
            let mut name = cleaned.to_lowercase();
            for suffix in NAME_SUFFIXES {
                name = name.replace(suffix, "");
            }
            name.trim().to_string()
        }
    }
}

/// Strip the locality tail from a normalized internal address.
///
/// The external addresses carry no city/province components, so the internal
/// side must lose them before comparison. The trailing token is dropped only
/// when it is a recognized province code, and the city token is dropped only
/// while at least two tokens remain, so short addresses keep their street
/// part intact.
pub fn strip_locality_suffix(address: &str) -> String {
    let mut tokens: Vec<&str> = address.split_whitespace().collect();
    if let Some(last) = tokens.last() {
        if PROVINCE_CODES.contains(last) {
            tokens.pop();
        }
    }
    if tokens.len() > 2 {
        tokens.pop();
    }
    tokens.join(" ")
}

pub fn normalize_company(c: &CompanyRecord) -> NormalizedCompany {
    NormalizedCompany {
        company_name: normalize_field(&c.company_name, FieldKind::Name),
        address: normalize_field(&c.address, FieldKind::Address),
        phone_primary: normalize_field(&c.phone_primary, FieldKind::Phone),
        phone_secondary: normalize_field(&c.phone_secondary, FieldKind::Phone),
        total_project_value: strip_specials(&c.total_project_value),
    }
}

pub fn normalize_customer(c: &CustomerRecord) -> NormalizedCustomer {
    NormalizedCustomer {
        name: normalize_field(&c.name, FieldKind::Name),
        phone: normalize_field(&c.phone, FieldKind::Phone),
        // asymmetric on purpose: only the internal address carries a locality tail
        address: strip_locality_suffix(&normalize_field(&c.address, FieldKind::Address)),
    }
}
