use std::process;

use log::{error, info};

use company_matcher::cli::parse_cli_to_app_config;
use company_matcher::logging::init_tracing_from_env;
use company_matcher::orchestrator;
use company_matcher::util::envfile::{load_dotenv_if_present, write_env_template};

fn main() {
    init_tracing_from_env();
    let _ = load_dotenv_if_present();

    // `company_matcher env-template [path]` writes a starter .env and exits
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("env-template") {
        let path = args.next().unwrap_or_else(|| ".env.template".into());
        match write_env_template(&path) {
            Ok(()) => {
                info!("Wrote {path}");
                return;
            }
            Err(e) => {
                error!("{:#}", e);
                process::exit(1);
            }
        }
    }

    let cfg = match parse_cli_to_app_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    match orchestrator::run(&cfg) {
        Ok(summary) => {
            info!(
                "Done: {} matches (name={} phone={} address={}) in {:.2}s",
                summary.total_matches(),
                summary.matches_by_name,
                summary.matches_by_phone,
                summary.matches_by_address,
                summary.duration_secs()
            );
        }
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}
