//! Batch scoring over tabular customer files: each row is scored
//! independently and echoed back with `Credit_Score`, `Credit_Tier`, and
//! `Default_Probability` columns appended.

mod reader;
mod summary;

pub use reader::{score_csv, BatchError, BatchOutcome, ScoredCustomer};
pub use summary::{PortfolioSummary, TierCount};
