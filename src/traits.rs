//! Trait definitions organizing EDGAR operations by domain.
//!
//! The `Edgar` client implements three small traits: ticker resolution,
//! filing history, and statement extraction. Users typically call methods on
//! the `Edgar` struct directly; the traits exist to keep the API surface
//! discoverable and to allow alternative implementations in tests.

use async_trait::async_trait;

use super::error::Result;
use super::filings::{FilingRecord, Submission};
use super::options::FilingOptions;
use super::statements::{CompanyFacts, StatementKind, StatementTable};
use super::tickers::{Cik, CompanyTicker};

/// Operations for resolving company identity.
///
/// EDGAR keys everything by CIK, while users usually start from a ticker
/// symbol. These operations fetch the SEC's ticker lookup table and resolve
/// symbols against it.
#[async_trait]
pub trait TickerOperations {
    /// Retrieves the full ticker lookup table.
    async fn company_tickers(&self) -> Result<Vec<CompanyTicker>>;
    /// Resolves a ticker symbol to its Central Index Key.
    async fn cik_for_ticker(&self, ticker: &str) -> Result<Cik>;
}

/// Operations for listing a filer's submission history.
#[async_trait]
pub trait FilingOperations {
    /// Retrieves the submission history document for a filer.
    async fn submissions(&self, cik: Cik) -> Result<Submission>;
    /// Retrieves filings for a filer, optionally filtered by form type,
    /// offset and limit.
    async fn filings(&self, cik: Cik, opts: Option<FilingOptions>) -> Result<Vec<FilingRecord>>;
    /// Lists dash-stripped accession numbers for filings whose form label
    /// exactly equals `form_type`, in the document's order.
    async fn accession_numbers(&self, cik: Cik, form_type: &str) -> Result<Vec<String>>;
}

/// Operations for extracting financial statements from XBRL facts.
#[async_trait]
pub trait StatementOperations {
    /// Retrieves the complete XBRL company facts document for a filer.
    async fn company_facts(&self, cik: Cik) -> Result<CompanyFacts>;
    /// Fetches and reshapes one financial statement from one filing into a
    /// row/column table.
    async fn statement(
        &self,
        cik: Cik,
        accession_number: &str,
        kind: StatementKind,
    ) -> Result<StatementTable>;
}
