//! Ticker to CIK resolution.
//!
//! Every EDGAR request is keyed by a company's Central Index Key (CIK), not
//! its ticker symbol. The SEC publishes a single lookup document covering all
//! filers (`company_tickers.json`); this module fetches it and resolves a
//! ticker against it. The table is refetched on every call; callers that
//! resolve many tickers should fetch it once with `company_tickers` and do
//! their own lookups, or cache the resolved CIKs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Edgar;
use super::error::{EdgarError, Result};
use super::traits::TickerOperations;

/// A Central Index Key, the SEC's registry identifier for a filer.
///
/// CIKs are numeric, but the EDGAR URL conventions use a fixed-width
/// zero-padded form (`0001318605` for Tesla). `Display` produces that
/// canonical 10-digit form; parsing accepts either padded or unpadded digit
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cik(u64);

impl Cik {
    pub const fn new(cik: u64) -> Self {
        Cik(cik)
    }

    /// The raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010}", self.0)
    }
}

impl FromStr for Cik {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EdgarError::InvalidCik(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Cik)
            .map_err(|_| EdgarError::InvalidCik(s.to_string()))
    }
}

impl From<u64> for Cik {
    fn from(cik: u64) -> Self {
        Cik(cik)
    }
}

/// One entry in the SEC's ticker lookup table.
///
/// Maps a stock ticker symbol to the filer's CIK and official title. A company
/// can appear multiple times when it lists several share classes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompanyTicker {
    #[serde(rename = "cik_str")]
    pub cik: u64,
    pub ticker: String,
    pub title: String,
}

/// The SEC lists tickers with dots for share classes ("BRK.B") while the
/// lookup table stores them with dashes ("BRK-B").
fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase().replace('.', "-")
}

#[async_trait]
impl TickerOperations for Edgar {
    /// Retrieves the full ticker lookup table from EDGAR.
    ///
    /// The document is a JSON object whose values are the entries; key order
    /// carries no meaning.
    ///
    /// # Errors
    ///
    /// * `EdgarError::HttpStatus` / `EdgarError::RequestError` - fetch failure
    /// * `EdgarError::JsonError` - the table could not be parsed
    async fn company_tickers(&self) -> Result<Vec<CompanyTicker>> {
        let url = format!("{}/company_tickers.json", self.edgar_files_url);
        let response = self.get(&url).await?;
        let map: HashMap<String, CompanyTicker> = serde_json::from_str(&response)?;
        Ok(map.into_values().collect())
    }

    /// Resolves a ticker symbol to its CIK.
    ///
    /// The match is a case-insensitive exact comparison after normalizing
    /// share-class dots to dashes. No fuzzy or partial matching is performed.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::TickerNotFound` when the table was fetched
    /// successfully but contains no entry for the ticker. Fetch failures
    /// propagate unchanged, so an unknown ticker is always distinguishable
    /// from a network problem.
    async fn cik_for_ticker(&self, ticker: &str) -> Result<Cik> {
        let normalized = normalize_ticker(ticker);
        let tickers = self.company_tickers().await?;

        tickers
            .iter()
            .find(|t| t.ticker == normalized)
            .map(|t| Cik::new(t.cik))
            .ok_or_else(|| EdgarError::TickerNotFound(ticker.to_string()))
    }
}
