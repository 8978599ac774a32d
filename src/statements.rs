//! Financial statement extraction from XBRL company facts.
//!
//! EDGAR publishes every filer's structured financial data as one "company
//! facts" document (`data.sec.gov/api/xbrl/companyfacts/CIK##########.json`),
//! keyed by standardized US-GAAP concept tags. This module maps a requested
//! statement kind to a hand-curated group of those tags, filters the document
//! down to the data points reported under one accession number, and reshapes
//! the result into a table: rows are line-item concepts, columns are reporting
//! period end dates.
//!
//! The concept groups are a static lookup table, not derived from the
//! document. Different companies report different subsets of each group, so
//! the shape of the resulting table varies per filing by design.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Edgar;
use super::error::{EdgarError, Result};
use super::filings::strip_accession_dashes;
use super::tickers::Cik;
use super::traits::StatementOperations;

/// US-GAAP concepts that belong on the balance sheet.
const BALANCE_SHEET_CONCEPTS: &[&str] = &[
    "CashAndCashEquivalentsAtCarryingValue",
    "ShortTermInvestments",
    "AccountsReceivableNetCurrent",
    "InventoryNet",
    "AssetsCurrent",
    "PropertyPlantAndEquipmentNet",
    "Goodwill",
    "IntangibleAssetsNetExcludingGoodwill",
    "Assets",
    "AccountsPayableCurrent",
    "AccruedLiabilitiesCurrent",
    "LiabilitiesCurrent",
    "LongTermDebtNoncurrent",
    "Liabilities",
    "CommonStockValue",
    "AdditionalPaidInCapital",
    "RetainedEarningsAccumulatedDeficit",
    "StockholdersEquity",
    "LiabilitiesAndStockholdersEquity",
];

/// US-GAAP concepts that belong on the income statement.
const INCOME_STATEMENT_CONCEPTS: &[&str] = &[
    "Revenues",
    "RevenueFromContractWithCustomerExcludingAssessedTax",
    "CostOfRevenue",
    "GrossProfit",
    "ResearchAndDevelopmentExpense",
    "SellingGeneralAndAdministrativeExpense",
    "OperatingExpenses",
    "OperatingIncomeLoss",
    "InterestExpense",
    "IncomeTaxExpenseBenefit",
    "NetIncomeLoss",
    "EarningsPerShareBasic",
    "EarningsPerShareDiluted",
];

/// US-GAAP concepts that belong on the cash flow statement.
const CASH_FLOW_CONCEPTS: &[&str] = &[
    "NetCashProvidedByUsedInOperatingActivities",
    "DepreciationDepletionAndAmortization",
    "ShareBasedCompensation",
    "NetCashProvidedByUsedInInvestingActivities",
    "PaymentsToAcquirePropertyPlantAndEquipment",
    "NetCashProvidedByUsedInFinancingActivities",
    "ProceedsFromIssuanceOfLongTermDebt",
    "RepaymentsOfLongTermDebt",
    "CashCashEquivalentsRestrictedCashAndRestrictedCashEquivalentsPeriodIncreaseDecreaseIncludingExchangeRateEffect",
];

/// The three financial statements this crate can extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    BalanceSheet,
    CashFlowStatement,
    IncomeStatement,
}

impl StatementKind {
    /// The curated US-GAAP concept group for this statement.
    ///
    /// Order here is presentation order: rows in the extracted table follow
    /// this sequence, not the document's key order.
    pub fn concepts(&self) -> &'static [&'static str] {
        match self {
            StatementKind::BalanceSheet => BALANCE_SHEET_CONCEPTS,
            StatementKind::CashFlowStatement => CASH_FLOW_CONCEPTS,
            StatementKind::IncomeStatement => INCOME_STATEMENT_CONCEPTS,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatementKind::BalanceSheet => "balance_sheet",
            StatementKind::CashFlowStatement => "cash_flow_statement",
            StatementKind::IncomeStatement => "income_statement",
        };
        f.write_str(label)
    }
}

impl FromStr for StatementKind {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "balance_sheet" => Ok(StatementKind::BalanceSheet),
            "cash_flow_statement" => Ok(StatementKind::CashFlowStatement),
            "income_statement" => Ok(StatementKind::IncomeStatement),
            other => Err(EdgarError::UnknownStatement(other.to_string())),
        }
    }
}

/// Complete set of XBRL facts reported by a company across all filings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyFacts {
    pub cik: u64,
    #[serde(rename = "entityName")]
    pub entity_name: String,
    #[serde(rename = "facts")]
    pub taxonomies: TaxonomyGroups,
}

/// Facts grouped by taxonomy standard.
///
/// US-GAAP carries the financial statement data; DEI carries document and
/// entity metadata. Either group can be absent for sparse filers, so both
/// default to empty rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyGroups {
    #[serde(rename = "us-gaap", default)]
    pub us_gaap: HashMap<String, Fact>,
    #[serde(default)]
    pub dei: HashMap<String, Fact>,
}

/// A single XBRL concept with its data points grouped by unit of measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub units: HashMap<String, Vec<DataPoint>>,
}

/// One reported value for a concept in one period.
///
/// Balance sheet concepts are instantaneous (`start` is `None`); income and
/// cash flow concepts span a period. `val` stays a raw JSON value because the
/// provider mixes numbers and strings across concepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub end: String,
    pub val: serde_json::Value,
    pub accn: String,
    #[serde(default)]
    pub fy: Option<i32>,
    #[serde(default)]
    pub fp: Option<String>,
    pub form: String,
    pub filed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

/// One line item of an extracted statement.
///
/// `values` is index-aligned with the parent table's `periods`; a `None` cell
/// means the concept was not reported for that period.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    /// US-GAAP concept tag, e.g. "Assets"
    pub concept: String,
    /// Human-readable label from the facts document, when present
    pub label: Option<String>,
    pub values: Vec<Option<f64>>,
}

/// A financial statement reshaped into rows and period columns.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTable {
    pub kind: StatementKind,
    /// Period end dates, ascending. One column per date.
    pub periods: Vec<NaiveDate>,
    /// Line items, in the curated concept order.
    pub rows: Vec<StatementRow>,
}

impl StatementTable {
    /// Reshapes a company facts document into a statement table.
    ///
    /// Pure function over already-fetched data; `statement` on the client is
    /// a fetch followed by this. Accession numbers are compared with dashes
    /// stripped, so either form is accepted.
    ///
    /// Concepts from the curated group that the document reports under the
    /// given accession become rows; the union of their period end dates, in
    /// ascending order, becomes the columns. A concept missing a period gets
    /// a `None` cell rather than being dropped. The whole pipeline is
    /// deterministic, so identical inputs produce identical tables.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::StatementNotFound` when no concept in the group
    /// has any data point under the accession number.
    pub fn from_facts(
        kind: StatementKind,
        facts: &CompanyFacts,
        accession_number: &str,
    ) -> Result<StatementTable> {
        let target = strip_accession_dashes(accession_number);

        let mut period_set: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut concept_cells: Vec<(&str, Option<String>, BTreeMap<NaiveDate, &DataPoint>)> =
            Vec::new();

        for concept in kind.concepts() {
            let Some(fact) = facts.taxonomies.us_gaap.get(*concept) else {
                continue;
            };
            let Some(points) = preferred_unit(&fact.units) else {
                continue;
            };

            let mut cells: BTreeMap<NaiveDate, &DataPoint> = BTreeMap::new();
            for point in points {
                if strip_accession_dashes(&point.accn) != target {
                    continue;
                }
                let Ok(end) = NaiveDate::parse_from_str(&point.end, "%Y-%m-%d") else {
                    tracing::warn!(
                        "Skipping {} data point with unparsable end date '{}'",
                        concept,
                        point.end
                    );
                    continue;
                };
                cells
                    .entry(end)
                    .and_modify(|existing| {
                        if covers_longer_duration(point, *existing) {
                            *existing = point;
                        }
                    })
                    .or_insert(point);
            }

            if cells.is_empty() {
                continue;
            }
            period_set.extend(cells.keys().copied());
            concept_cells.push((*concept, fact.label.clone(), cells));
        }

        if concept_cells.is_empty() {
            return Err(EdgarError::StatementNotFound {
                statement: kind.to_string(),
                accession_number: accession_number.to_string(),
            });
        }

        let periods: Vec<NaiveDate> = period_set.into_iter().collect();
        let rows = concept_cells
            .into_iter()
            .map(|(concept, label, cells)| StatementRow {
                concept: concept.to_string(),
                label,
                values: periods
                    .iter()
                    .map(|period| cells.get(period).and_then(|point| point.val.as_f64()))
                    .collect(),
            })
            .collect();

        Ok(StatementTable {
            kind,
            periods,
            rows,
        })
    }

    /// Looks up one row by its concept tag.
    pub fn row(&self, concept: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.concept == concept)
    }

    /// Looks up one cell by concept tag and period end date.
    pub fn value(&self, concept: &str, period: NaiveDate) -> Option<f64> {
        let col = self.periods.iter().position(|p| *p == period)?;
        self.row(concept)?.values.get(col).copied().flatten()
    }
}

/// Picks which unit's data points represent a concept.
///
/// Monetary concepts report in "USD" and that series is preferred; otherwise
/// the lexicographically smallest unit key is used so the choice is stable
/// across calls (per-share concepts report in "USD/shares", share counts in
/// "shares").
fn preferred_unit(units: &HashMap<String, Vec<DataPoint>>) -> Option<&Vec<DataPoint>> {
    if let Some(points) = units.get("USD") {
        return Some(points);
    }
    units
        .iter()
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, points)| points)
}

/// A filing can report several duration points ending on the same date under
/// one accession (fourth quarter vs. full fiscal year). The longest duration
/// wins so annual filings yield annual figures.
fn covers_longer_duration(candidate: &DataPoint, existing: &DataPoint) -> bool {
    match (candidate.start.as_deref(), existing.start.as_deref()) {
        (Some(c), Some(e)) => c < e,
        _ => false,
    }
}

impl Edgar {
    fn company_facts_url(&self, cik: Cik) -> String {
        format!("{}/api/xbrl/companyfacts/CIK{}.json", self.edgar_data_url, cik)
    }
}

#[async_trait]
impl StatementOperations for Edgar {
    /// Retrieves the complete XBRL facts document for a filer.
    ///
    /// # Errors
    ///
    /// Unknown CIKs surface as `EdgarError::HttpStatus`; malformed documents
    /// as `EdgarError::JsonError`.
    async fn company_facts(&self, cik: Cik) -> Result<CompanyFacts> {
        let url = self.company_facts_url(cik);
        let response = self.get(&url).await?;
        Ok(serde_json::from_str(&response)?)
    }

    /// Fetches and extracts one financial statement from one filing.
    ///
    /// Fetches the filer's facts document and reshapes the data points
    /// reported under `accession_number` into a [`StatementTable`] via
    /// [`StatementTable::from_facts`].
    async fn statement(
        &self,
        cik: Cik,
        accession_number: &str,
        kind: StatementKind,
    ) -> Result<StatementTable> {
        let facts = self.company_facts(cik).await?;
        StatementTable::from_facts(kind, &facts, accession_number)
    }
}
