use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrownianError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("Invalid step distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Unrecognized table: {0}")]
    InvalidTable(String),
}
