//! CLI module: argument parsing and configuration assembly.

mod clap_parser;

pub use clap_parser::{parse_cli_to_app_config, Cli};
