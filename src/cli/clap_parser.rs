use clap::Parser;

use crate::config::{AppConfig, ExportConfig, InputConfig, MatchingConfig};
use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(
    name = "company_matcher",
    version,
    about = "Match an external company list against the internal customer list",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// External company list CSV (env: COMPANY_LIST)
    #[arg(value_name = "COMPANY_CSV", env = "COMPANY_LIST")]
    pub company_list: String,
    /// Internal customer list CSV (env: CUSTOMER_LIST)
    #[arg(value_name = "CUSTOMER_CSV", env = "CUSTOMER_LIST")]
    pub customer_list: String,
    /// Output path for the reconciled table (env: OUT_PATH)
    #[arg(
        value_name = "OUT_PATH",
        env = "OUT_PATH",
        default_value = "combined_data.csv"
    )]
    pub out_path: String,
    /// Also write a Key/Value run summary CSV to this path
    #[arg(long = "summary", value_name = "PATH")]
    pub summary: Option<String>,
    /// Pin the output shuffle to a fixed seed for reproducible runs (env: MATCHER_SEED)
    #[arg(long = "seed", value_name = "SEED", env = "MATCHER_SEED")]
    pub seed: Option<u64>,
    /// Keep the reconciled rows in deterministic order instead of shuffling
    #[arg(long = "no-shuffle")]
    pub no_shuffle: bool,
}

impl Cli {
    pub fn to_app_config(&self) -> Result<AppConfig, ConfigError> {
        let cfg = AppConfig {
            inputs: InputConfig {
                company_path: self.company_list.clone(),
                customer_path: self.customer_list.clone(),
            },
            matching: MatchingConfig {
                shuffle: !self.no_shuffle,
                shuffle_seed: self.seed,
            },
            export: ExportConfig {
                out_path: self.out_path.clone(),
                summary_path: self.summary.clone(),
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn parse_cli_to_app_config() -> Result<AppConfig, ConfigError> {
    let cli = Cli::parse();
    cli.to_app_config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_maps_into_app_config() {
        let cli = Cli::parse_from([
            "company_matcher",
            "company_list.csv",
            "customer_list.csv",
            "out.csv",
            "--seed",
            "42",
            "--no-shuffle",
        ]);
        let cfg = cli.to_app_config().unwrap();
        assert_eq!(cfg.inputs.company_path, "company_list.csv");
        assert_eq!(cfg.export.out_path, "out.csv");
        assert_eq!(cfg.matching.shuffle_seed, Some(42));
        assert!(!cfg.matching.shuffle);
    }

    #[test]
    fn test_identical_inputs_rejected_at_parse() {
        let cli = Cli::parse_from(["company_matcher", "list.csv", "list.csv"]);
        assert!(cli.to_app_config().is_err());
    }
}
