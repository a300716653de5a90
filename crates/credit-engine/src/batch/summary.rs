use crate::scoring::CreditTier;
use serde::Serialize;
use std::collections::HashMap;

/// Running totals while a batch is scored. Converted into a
/// [`PortfolioSummary`] once the last row is in.
#[derive(Debug, Default)]
pub(crate) struct PortfolioAccumulator {
    customers: usize,
    score_sum: f64,
    probability_sum: f64,
    tiers: HashMap<CreditTier, usize>,
}

impl PortfolioAccumulator {
    pub(crate) fn observe(&mut self, score: u16, tier: CreditTier, probability: f64) {
        self.customers += 1;
        self.score_sum += f64::from(score);
        self.probability_sum += probability;
        *self.tiers.entry(tier).or_insert(0) += 1;
    }

    pub(crate) fn finish(self) -> PortfolioSummary {
        let divisor = self.customers.max(1) as f64;
        let tier_counts = CreditTier::ordered()
            .into_iter()
            .map(|tier| TierCount {
                tier,
                label: tier.label(),
                count: self.tiers.get(&tier).copied().unwrap_or(0),
            })
            .collect();

        PortfolioSummary {
            customers: self.customers,
            average_score: self.score_sum / divisor,
            average_default_probability: self.probability_sum / divisor,
            tier_counts,
        }
    }
}

/// Aggregate view over a scored batch: customer count, mean score and
/// default risk, and the per-tier headcount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub customers: usize,
    pub average_score: f64,
    pub average_default_probability: f64,
    /// One entry per tier in ladder order, zero counts included.
    pub tier_counts: Vec<TierCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCount {
    pub tier: CreditTier,
    pub label: &'static str,
    pub count: usize,
}
