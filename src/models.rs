use serde::{Deserialize, Serialize};

/// One row of the external company list, as ingested. Extra source columns
/// beyond these five are dropped at the ingestion edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub address: String,
    pub phone_primary: String,
    pub phone_secondary: String,
    pub total_project_value: String,
}

/// One row of the internal (Toromont) customer list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// A company record after field normalization. Immutable once built.
#[derive(Debug, Clone)]
pub struct NormalizedCompany {
    pub company_name: String,
    pub address: String,
    pub phone_primary: String,
    pub phone_secondary: String,
    pub total_project_value: String,
}

/// A customer record after field normalization, including the locality
/// suffix strip on the address.
#[derive(Debug, Clone)]
pub struct NormalizedCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Field category on which two records were found equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMethod {
    #[serde(rename = "By name")]
    Name,
    #[serde(rename = "By phone")]
    Phone,
    #[serde(rename = "By address")]
    Address,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "By name",
            Self::Phone => "By phone",
            Self::Address => "By address",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A proposed correspondence between one company and one customer, tagged
/// with the method that produced it. Several candidates may reference the
/// same underlying pair when more than one method succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub company_name: String,
    pub toromont_name: String,
    pub method: MatchMethod,
    pub total_project_value: String,
}

impl MatchCandidate {
    /// The (company, customer) identity of this candidate, ignoring method.
    pub(crate) fn pair(&self) -> (&str, &str) {
        (&self.company_name, &self.toromont_name)
    }
}
