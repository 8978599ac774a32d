//! End-to-end tests against the live SEC EDGAR API.
//!
//! Ignored by default so CI stays hermetic; run with
//! `cargo test --test live_edgar -- --ignored`.

mod common;

use common::edgar;
use edgar_statements::{
    Cik, EdgarError, FilingOperations, StatementKind, StatementOperations, TickerOperations,
};

#[tokio::test]
#[ignore = "hits live sec.gov"]
async fn resolve_ticker_live() {
    let edgar = edgar();
    let cik = edgar.cik_for_ticker("TSLA").await.unwrap();
    assert_eq!(cik.to_string(), "0001318605");
}

#[tokio::test]
#[ignore = "hits live sec.gov"]
async fn unknown_ticker_live() {
    let edgar = edgar();
    let result = edgar.cik_for_ticker("THISISNOTATICKER").await;
    assert!(matches!(result, Err(EdgarError::TickerNotFound(_))));
}

#[tokio::test]
#[ignore = "hits live sec.gov"]
async fn list_annual_reports_live() {
    let edgar = edgar();
    let cik = edgar.cik_for_ticker("AAPL").await.unwrap();
    let accessions = edgar.accession_numbers(cik, "10-K").await.unwrap();

    assert!(!accessions.is_empty());
    assert!(accessions.iter().all(|a| !a.contains('-')));
}

#[tokio::test]
#[ignore = "hits live sec.gov"]
async fn extract_balance_sheet_live() {
    let edgar = edgar();
    let cik = Cik::new(1318605);
    let accessions = edgar.accession_numbers(cik, "10-K").await.unwrap();

    let table = edgar
        .statement(cik, &accessions[0], StatementKind::BalanceSheet)
        .await
        .unwrap();

    assert!(!table.rows.is_empty());
    assert!(!table.periods.is_empty());
    assert!(table.row("Assets").is_some());
}

#[tokio::test]
#[ignore = "hits live sec.gov"]
async fn unknown_cik_live() {
    let edgar = edgar();
    let result = edgar.submissions(Cik::new(9_999_999_999)).await;
    assert!(matches!(result, Err(EdgarError::HttpStatus { .. })));
}
