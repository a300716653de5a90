use super::summary::{PortfolioAccumulator, PortfolioSummary};
use crate::scoring::{credit_score, default_probability, CreditMix, CreditTier, CustomerRecord};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::info;

const DELAYED_PAYMENTS: &str = "Num_of_Delayed_Payment";
const DELAY_DAYS: &str = "Delay_from_due_date";
const MIN_PAYMENT: &str = "Payment_of_Min_Amount";
const UTILIZATION: &str = "Credit_Utilization_Ratio";
const HISTORY_YEARS: &str = "Credit_History_Age_Years";
const CREDIT_MIX: &str = "Credit_Mix";
const INQUIRIES: &str = "Num_Credit_Inquiries";
const CUSTOMER_ID: &str = "Customer_ID";
const NAME: &str = "Name";

/// Failures while reading or scoring a customer file.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("line {line}: column '{column}' holds unusable value '{value}'")]
    BadCell {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One scored row of the preview table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCustomer {
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub score: u16,
    pub tier: CreditTier,
    pub default_probability: f64,
}

/// Result of a batch run: row count, aggregate portfolio view, and a
/// bounded preview of the scored rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub rows: usize,
    pub summary: PortfolioSummary,
    pub preview: Vec<ScoredCustomer>,
}

/// Header-addressed pick of the interchange columns out of an arbitrary
/// customer table.
struct ColumnMap {
    delayed: usize,
    delay_days: usize,
    min_payment: usize,
    utilization: usize,
    history_years: usize,
    credit_mix: usize,
    inquiries: usize,
    customer_id: Option<usize>,
    name: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, BatchError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header.trim() == column)
                .ok_or(BatchError::MissingColumn(column))
        };
        let find_optional =
            |column: &str| headers.iter().position(|header| header.trim() == column);

        Ok(Self {
            delayed: find(DELAYED_PAYMENTS)?,
            delay_days: find(DELAY_DAYS)?,
            min_payment: find(MIN_PAYMENT)?,
            utilization: find(UTILIZATION)?,
            history_years: find(HISTORY_YEARS)?,
            credit_mix: find(CREDIT_MIX)?,
            inquiries: find(INQUIRIES)?,
            customer_id: find_optional(CUSTOMER_ID),
            name: find_optional(NAME),
        })
    }

    fn record(&self, row: &csv::StringRecord, line: u64) -> Result<CustomerRecord, BatchError> {
        let cell = |index: usize| row.get(index).unwrap_or("").trim();
        let parse_u32 = |index: usize, column: &'static str| {
            let value = cell(index);
            value.parse::<f64>()
                .ok()
                .filter(|parsed| *parsed >= 0.0)
                .map(|parsed| parsed.round() as u32)
                .ok_or_else(|| BatchError::BadCell {
                    line,
                    column,
                    value: value.to_string(),
                })
        };
        let parse_f64 = |index: usize, column: &'static str| {
            let value = cell(index);
            value.parse::<f64>().map_err(|_| BatchError::BadCell {
                line,
                column,
                value: value.to_string(),
            })
        };

        let min_payment = match cell(self.min_payment) {
            "0" | "false" | "No" | "NM" => false,
            "1" | "true" | "Yes" => true,
            other => {
                return Err(BatchError::BadCell {
                    line,
                    column: MIN_PAYMENT,
                    value: other.to_string(),
                })
            }
        };

        Ok(CustomerRecord {
            customer_id: self
                .customer_id
                .and_then(|index| row.get(index))
                .map(|value| value.trim().to_string()),
            name: self
                .name
                .and_then(|index| row.get(index))
                .map(|value| value.trim().to_string()),
            delayed_payments: parse_u32(self.delayed, DELAYED_PAYMENTS)?,
            delay_days: parse_u32(self.delay_days, DELAY_DAYS)?,
            min_payment_only: min_payment,
            utilization: parse_f64(self.utilization, UTILIZATION)?,
            history_years: parse_f64(self.history_years, HISTORY_YEARS)?,
            credit_mix: CreditMix::from_label(cell(self.credit_mix)),
            inquiries: parse_u32(self.inquiries, INQUIRIES)?,
        })
    }
}

/// Scores every row of `input` and writes the same table to `output` with
/// `Credit_Score`, `Credit_Tier`, and `Default_Probability` appended. All
/// input columns, including ones this engine never reads, pass through
/// unchanged. `preview_limit` bounds the rows echoed in the outcome.
pub fn score_csv<R: Read, W: Write>(
    input: R,
    output: W,
    preview_limit: usize,
) -> Result<BatchOutcome, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut csv_writer = csv::Writer::from_writer(output);
    let mut augmented_headers = headers.clone();
    augmented_headers.push_field("Credit_Score");
    augmented_headers.push_field("Credit_Tier");
    augmented_headers.push_field("Default_Probability");
    csv_writer.write_record(&augmented_headers)?;

    let mut summary = PortfolioAccumulator::default();
    let mut preview = Vec::new();
    let mut rows = 0usize;

    for entry in csv_reader.records() {
        let row = entry?;
        let line = row.position().map(|position| position.line()).unwrap_or(0);
        let record = columns.record(&row, line)?;

        let score = credit_score(&record);
        let tier = CreditTier::for_score(score);
        let probability = default_probability(&record, score);

        let mut augmented = row.clone();
        augmented.push_field(&score.to_string());
        augmented.push_field(tier.label());
        augmented.push_field(&format!("{probability:.4}"));
        csv_writer.write_record(&augmented)?;

        summary.observe(score, tier, probability);
        if preview.len() < preview_limit {
            preview.push(ScoredCustomer {
                customer_id: record.customer_id.clone(),
                name: record.name.clone(),
                score,
                tier,
                default_probability: probability,
            });
        }
        rows += 1;
    }

    csv_writer.flush()?;
    info!(rows, "scored customer batch");

    Ok(BatchOutcome {
        rows,
        summary: summary.finish(),
        preview,
    })
}
