//! Filing history for a single filer.
//!
//! EDGAR exposes a filer's submission history as one JSON document per CIK
//! (`data.sec.gov/submissions/CIK##########.json`). The recent filings inside
//! it are stored as parallel arrays: one array of accession numbers, one of
//! form labels, one of dates, all index-aligned. This module deserializes
//! that shape and reassembles it into per-filing records.

use async_trait::async_trait;
use serde::Deserialize;

use super::Edgar;
use super::error::Result;
use super::options::FilingOptions;
use super::tickers::Cik;
use super::traits::FilingOperations;

/// Submission history document for one filer.
///
/// Only the entity fields this crate surfaces are modeled; EDGAR includes many
/// more (addresses, SIC codes, former names) that vary in completeness across
/// filers.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub cik: String,
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub exchanges: Vec<String>,
    pub filings: FilingsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilingsData {
    pub recent: RecentFilings,
}

/// The index-aligned parallel arrays EDGAR uses for recent filings.
///
/// `accession_number`, `form` and `filing_date` are always present; the rest
/// depend on the filer, so absent arrays deserialize as `None` rather than
/// failing the whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentFilings {
    #[serde(rename = "accessionNumber")]
    pub accession_number: Vec<String>,
    pub form: Vec<String>,
    #[serde(rename = "filingDate")]
    pub filing_date: Vec<String>,
    #[serde(rename = "reportDate")]
    pub report_date: Option<Vec<String>>,
    #[serde(rename = "primaryDocument")]
    pub primary_document: Option<Vec<String>>,
}

/// One filing from a filer's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRecord {
    /// Accession number in the SEC's dashed form, e.g. "0001564590-20-047486"
    pub accession_number: String,
    /// Form label, e.g. "10-K"
    pub form: String,
    /// Date the filing was submitted, "YYYY-MM-DD"
    pub filing_date: String,
    /// Period-of-report date; empty for some form types
    pub report_date: Option<String>,
    /// File name of the primary document inside the filing
    pub primary_document: Option<String>,
}

impl RecentFilings {
    fn get_vec_item_at(&self, vec_opt: &Option<Vec<String>>, idx: usize) -> Option<String> {
        vec_opt
            .as_ref()
            .and_then(|v| v.get(idx))
            .filter(|s| !s.is_empty())
            .cloned()
    }

    /// Assembles the record at `idx`, or `None` when the mandatory arrays are
    /// shorter than `idx` (EDGAR occasionally truncates optional arrays, but
    /// the mandatory three are aligned).
    pub fn record(&self, idx: usize) -> Option<FilingRecord> {
        Some(FilingRecord {
            accession_number: self.accession_number.get(idx)?.clone(),
            form: self.form.get(idx)?.clone(),
            filing_date: self.filing_date.get(idx)?.clone(),
            report_date: self.get_vec_item_at(&self.report_date, idx),
            primary_document: self.get_vec_item_at(&self.primary_document, idx),
        })
    }

    /// All records, in the document's (reverse-chronological) order.
    pub fn records(&self) -> Vec<FilingRecord> {
        (0..self.accession_number.len())
            .filter_map(|idx| self.record(idx))
            .collect()
    }
}

/// Strips the dashes from an accession number, the form EDGAR archive URLs
/// use: "0001564590-20-047486" -> "000156459020047486".
pub(crate) fn strip_accession_dashes(accession_number: &str) -> String {
    accession_number.replace('-', "")
}

impl Edgar {
    fn submissions_url(&self, cik: Cik) -> String {
        format!("{}/submissions/CIK{}.json", self.edgar_data_url, cik)
    }

    /// URL of one document inside a filing's archive directory.
    ///
    /// Archive paths use the unpadded CIK and the dash-stripped accession
    /// number. Combine with [`FilingRecord::primary_document`] to locate a
    /// filing's main document.
    pub fn filing_document_url(
        &self,
        cik: Cik,
        accession_number: &str,
        filename: &str,
    ) -> String {
        format!(
            "{}/data/{}/{}/{}",
            self.edgar_archives_url,
            cik.value(),
            strip_accession_dashes(accession_number),
            filename
        )
    }
}

#[async_trait]
impl FilingOperations for Edgar {
    /// Retrieves the submission history document for a filer.
    ///
    /// # Errors
    ///
    /// Unknown CIKs are reported by EDGAR with an error status, which
    /// surfaces as `EdgarError::HttpStatus`. Malformed documents surface as
    /// `EdgarError::JsonError`.
    async fn submissions(&self, cik: Cik) -> Result<Submission> {
        let url = self.submissions_url(cik);
        let response = self.get(&url).await?;
        Ok(serde_json::from_str::<Submission>(&response)?)
    }

    /// Retrieves filings for a filer, optionally filtered.
    ///
    /// Filtering is exact form-label equality; "10-K" does not match
    /// "10-K/A". Order is the document's own, which EDGAR keeps
    /// reverse-chronological.
    async fn filings(&self, cik: Cik, opts: Option<FilingOptions>) -> Result<Vec<FilingRecord>> {
        let submission = self.submissions(cik).await?;
        let mut records = submission.filings.recent.records();

        if let Some(opts) = opts {
            if let Some(ref form_types) = opts.form_types {
                records.retain(|r| form_types.iter().any(|ft| ft == r.form.trim()));
            }
            if let Some(offset) = opts.offset {
                records = records.into_iter().skip(offset).collect();
            }
            if let Some(limit) = opts.limit {
                records.truncate(limit);
            }
        }

        Ok(records)
    }

    /// Lists dash-stripped accession numbers for filings of one form type.
    ///
    /// An empty vector is the normal result for a filer that has filings but
    /// none of the requested type; only fetch and parse failures are errors.
    async fn accession_numbers(&self, cik: Cik, form_type: &str) -> Result<Vec<String>> {
        let records = self
            .filings(cik, Some(FilingOptions::new().with_form_type(form_type)))
            .await?;

        Ok(records
            .iter()
            .map(|r| strip_accession_dashes(&r.accession_number))
            .collect())
    }
}
