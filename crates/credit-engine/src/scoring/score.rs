use super::domain::{CreditMix, CustomerRecord};
use serde::Serialize;

pub const SCORE_FLOOR: u16 = 300;
pub const SCORE_CEILING: u16 = 850;

/// Weighted factor of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreFactor {
    PaymentHistory,
    CreditUtilization,
    CreditAge,
    CreditMix,
    NewInquiries,
}

impl ScoreFactor {
    pub fn weight(self) -> f64 {
        match self {
            Self::PaymentHistory => 0.35,
            Self::CreditUtilization => 0.30,
            Self::CreditAge => 0.15,
            Self::CreditMix => 0.10,
            Self::NewInquiries => 0.10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PaymentHistory => "Payment History",
            Self::CreditUtilization => "Credit Utilization",
            Self::CreditAge => "Credit Age",
            Self::CreditMix => "Credit Mix",
            Self::NewInquiries => "New Inquiries",
        }
    }

    pub fn ordered() -> [ScoreFactor; 5] {
        [
            Self::PaymentHistory,
            Self::CreditUtilization,
            Self::CreditAge,
            Self::CreditMix,
            Self::NewInquiries,
        ]
    }
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    /// Sub-score after flooring, before the weight is applied.
    pub subscore: f64,
    pub weight: f64,
    pub weighted: f64,
}

/// Composite score with its per-factor contributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub score: u16,
}

/// Computes the composite score: base 300 plus five independently floored
/// sub-scores, each scaled by its factor weight, clamped to [300, 850].
pub fn score_breakdown(record: &CustomerRecord) -> ScoreBreakdown {
    let mut components = Vec::with_capacity(5);
    let mut total = f64::from(SCORE_FLOOR);

    for factor in ScoreFactor::ordered() {
        let subscore = match factor {
            ScoreFactor::PaymentHistory => payment_history_subscore(record),
            ScoreFactor::CreditUtilization => utilization_subscore(record.utilization),
            ScoreFactor::CreditAge => credit_age_subscore(record.history_years),
            ScoreFactor::CreditMix => credit_mix_subscore(record.credit_mix),
            ScoreFactor::NewInquiries => inquiry_subscore(record.inquiries),
        };
        let weighted = subscore * factor.weight();
        total += weighted;
        components.push(ScoreComponent {
            factor,
            subscore,
            weight: factor.weight(),
            weighted,
        });
    }

    let score = total
        .round()
        .clamp(f64::from(SCORE_FLOOR), f64::from(SCORE_CEILING)) as u16;

    ScoreBreakdown { components, score }
}

/// Composite score without the audit trail.
pub fn credit_score(record: &CustomerRecord) -> u16 {
    score_breakdown(record).score
}

fn payment_history_subscore(record: &CustomerRecord) -> f64 {
    let mut subscore = 297.0;
    subscore -= f64::from(record.delayed_payments) * 50.0;
    if record.delay_days > 30 {
        subscore -= f64::from(record.delay_days.min(100));
    }
    if record.min_payment_only {
        subscore -= 50.0;
    }
    subscore.max(0.0)
}

fn utilization_subscore(utilization: f64) -> f64 {
    let mut subscore = 255.0;
    if utilization > 30.0 {
        subscore -= (utilization - 30.0) * 5.0;
    }
    subscore.max(0.0)
}

/// The upstream rubric defines 50 below two years, 100 up to five, and 127
/// from ten years on; the [5, 10) band is bridged linearly between its
/// neighbours.
fn credit_age_subscore(years: f64) -> f64 {
    if years < 2.0 {
        50.0
    } else if years < 5.0 {
        100.0
    } else if years < 10.0 {
        100.0 + (years - 5.0) / 5.0 * 27.0
    } else {
        127.0
    }
}

fn credit_mix_subscore(mix: CreditMix) -> f64 {
    match mix {
        CreditMix::Good => 85.0,
        CreditMix::Other => 50.0,
    }
}

fn inquiry_subscore(inquiries: u32) -> f64 {
    let mut subscore = 85.0;
    if inquiries > 10 {
        subscore -= f64::from(inquiries - 10) * 3.0;
    }
    subscore.max(0.0)
}
