//! CSV ingestion for the two source lists.
//!
//! Columns are located by header name, so extra columns in the company file
//! are ignored. A missing required column is fatal; a missing value inside a
//! row defaults to the empty string and flows through normalization as such.

use csv::{ReaderBuilder, StringRecord};

use crate::error::IngestError;
use crate::models::{CompanyRecord, CustomerRecord};

/// Required headers of the external company list, in record-field order.
pub const COMPANY_COLUMNS: [&str; 5] = [
    "Company Name",
    "Address",
    "Phone 1",
    "Phone 2",
    "Total Project Value",
];

/// Required headers of the internal customer list.
pub const CUSTOMER_COLUMNS: [&str; 3] = ["Name", "Phone", "Address"];

fn column_indices(
    headers: &StringRecord,
    required: &[&str],
    path: &str,
) -> Result<Vec<usize>, IngestError> {
    required
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: (*name).to_string(),
                    path: path.to_string(),
                })
        })
        .collect()
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

pub fn load_companies(path: &str) -> Result<Vec<CompanyRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let idx = column_indices(&headers, &COMPANY_COLUMNS, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(CompanyRecord {
            company_name: field(&record, idx[0]),
            address: field(&record, idx[1]),
            phone_primary: field(&record, idx[2]),
            phone_secondary: field(&record, idx[3]),
            total_project_value: field(&record, idx[4]),
        });
    }
    Ok(rows)
}

pub fn load_customers(path: &str) -> Result<Vec<CustomerRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let idx = column_indices(&headers, &CUSTOMER_COLUMNS, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(CustomerRecord {
            name: field(&record, idx[0]),
            phone: field(&record, idx[1]),
            address: field(&record, idx[2]),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "company-matcher-test-{}-{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.csv"));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_companies_ignores_extra_columns() {
        let path = temp_csv(
            "companies",
            "Company Name,Contact,Address,Phone 1,Phone 2,Total Project Value,Notes\n\
             Acme Inc.,Jane,1 Main St,555-0100,555-0101,\"$1,000\",call back\n",
        );
        let rows = load_companies(path.to_str().unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name, "Acme Inc.");
        assert_eq!(rows[0].address, "1 Main St");
        assert_eq!(rows[0].phone_primary, "555-0100");
        assert_eq!(rows[0].phone_secondary, "555-0101");
        assert_eq!(rows[0].total_project_value, "$1,000");
    }

    #[test]
    fn test_short_rows_default_to_empty_fields() {
        let path = temp_csv(
            "short",
            "Company Name,Address,Phone 1,Phone 2,Total Project Value\nAcme,1 Main St\n",
        );
        let rows = load_companies(path.to_str().unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].phone_primary, "");
        assert_eq!(rows[0].total_project_value, "");
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let path = temp_csv("badheader", "Name,Phone\nacme,555-0100\n");
        let err = load_customers(path.to_str().unwrap()).unwrap_err();
        match err {
            IngestError::MissingColumn { column, .. } => assert_eq!(column, "Address"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_customers_trims_values() {
        let path = temp_csv("customers", "Name,Phone,Address\n acme , 555 0100 ,1 Main St\n");
        let rows = load_customers(path.to_str().unwrap()).unwrap();
        assert_eq!(rows[0].name, "acme");
        assert_eq!(rows[0].phone, "555 0100");
    }
}
