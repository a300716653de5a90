pub mod domain;
mod risk;
mod score;
mod suggestions;

pub use domain::{
    CreditMix, CreditTier, CustomerRecord, LoanCategory, Suggestion, SuggestionCategory,
    SuggestionPriority,
};
pub use risk::default_probability;
pub use score::{credit_score, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreFactor};
pub use suggestions::improvement_plan;

use serde::Serialize;

/// Full assessment for one record: score with audit trail, tier,
/// default probability, and the improvement plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditAssessment {
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub score: u16,
    pub tier: CreditTier,
    pub default_probability: f64,
    pub components: Vec<ScoreComponent>,
    pub suggestions: Vec<Suggestion>,
}

/// Runs the whole pipeline for one record: raw attributes → score → tier →
/// default probability and improvement plan. Stateless and side-effect-free.
pub fn assess(record: &CustomerRecord) -> CreditAssessment {
    let breakdown = score_breakdown(record);
    let tier = CreditTier::for_score(breakdown.score);
    let default_probability = default_probability(record, breakdown.score);
    let suggestions = improvement_plan(record);

    CreditAssessment {
        customer_id: record.customer_id.clone(),
        name: record.name.clone(),
        score: breakdown.score,
        tier,
        default_probability,
        components: breakdown.components,
        suggestions,
    }
}
