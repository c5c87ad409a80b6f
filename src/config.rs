use std::path::PathBuf;

use dotenv::dotenv;

use crate::cli::command::Cli;

/// Runtime settings resolved from the command line, the environment and an
/// optional `.env` file.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub verbosity: u8,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_path: cli.file.clone(),
            verbosity: cli.verbose,
        }
    }
}

/// Exposes `.env` entries as environment variables. A missing file is fine.
pub fn load_env() {
    dotenv().ok();
}
