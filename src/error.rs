use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgarError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Ticker '{0}' not found in the SEC company ticker table")]
    TickerNotFound(String),

    #[error("Invalid CIK: '{0}' is not a numeric identifier")]
    InvalidCik(String),

    #[error(
        "Unknown statement kind: '{0}' (expected balance_sheet, cash_flow_statement or income_statement)"
    )]
    UnknownStatement(String),

    #[error("No {statement} facts found for accession number {accession_number}")]
    StatementNotFound {
        statement: String,
        accession_number: String,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, EdgarError>;
