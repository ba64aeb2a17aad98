pub mod csv_import;

pub use csv_import::{load_companies, load_customers};
