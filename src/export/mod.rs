pub mod csv_export;

pub use csv_export::{export_summary_csv, export_to_csv};
