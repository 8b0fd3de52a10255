use std::process;

use loader::LoadError;
use ourairports::AirportsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Airports(#[from] AirportsError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("airport {0} not found")]
    NotFound(String),
}

impl CliError {
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        if let CliError::Airports(AirportsError::Load(LoadError::DataDirNotFound(_))) = self {
            eprintln!();
            eprintln!("Run `ourairports fetch` to download the airport data first.");
        }
        process::exit(1)
    }
}
