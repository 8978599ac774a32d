//! # edgar-statements - SEC EDGAR filings and financial statements
//!
//! A client for the SEC's EDGAR (Electronic Data Gathering, Analysis, and
//! Retrieval) system focused on three things: resolving stock tickers to CIKs,
//! listing a company's filings by form type, and extracting a financial
//! statement (balance sheet, cash flow statement, income statement) from a
//! specific filing as a row/column table.
//!
//! ## Features
//!
//! - **Identified HTTP client** - Sends the descriptive `User-Agent` header
//!   the SEC requires on all automated traffic
//! - **Ticker resolution** - Resolve a ticker symbol against the SEC's full
//!   company ticker table
//! - **Filing history** - List filings and accession numbers per form type
//!   from a filer's submission document
//! - **Statement extraction** - Reshape XBRL company facts into tables with
//!   line-item rows and reporting-period columns
//!
//! ## Requirements
//!
//! This is an async library and requires an async runtime. We recommend
//! [tokio](https://tokio.rs), the most widely used async runtime in the Rust
//! ecosystem.
//!
//! ## Basic Usage
//!
//! ```ignore
//! use edgar_statements::{Edgar, FilingOperations, StatementKind, StatementOperations, TickerOperations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The SEC requires a real name and contact email on every request
//!     let edgar = Edgar::new("Jane Doe", "jane@example.com")?;
//!
//!     let cik = edgar.cik_for_ticker("TSLA").await?;
//!
//!     let accessions = edgar.accession_numbers(cik, "10-K").await?;
//!
//!     let table = edgar
//!         .statement(cik, &accessions[0], StatementKind::BalanceSheet)
//!         .await?;
//!
//!     for row in &table.rows {
//!         println!("{}: {:?}", row.concept, row.values);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The library holds no shared mutable state; `Edgar` is `Clone` and safe to
//! use from concurrent tasks. No retry or rate limiting is performed
//! internally - callers needing either under the SEC's fair-access rules
//! should wrap the operations themselves.

mod config;
mod core;
mod error;
mod filings;
mod options;
mod statements;
mod tickers;
mod traits;

pub use config::{EdgarConfig, EdgarUrls};
pub use core::Edgar;
pub use error::{EdgarError, Result};
pub use options::FilingOptions;

// Re-export core types and traits for a clean API
pub use filings::{FilingRecord, FilingsData, RecentFilings, Submission};
pub use statements::{
    CompanyFacts, DataPoint, Fact, StatementKind, StatementRow, StatementTable, TaxonomyGroups,
};
pub use tickers::{Cik, CompanyTicker};

pub use traits::{FilingOperations, StatementOperations, TickerOperations};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
