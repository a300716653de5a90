use super::domain::CustomerRecord;
use super::score::SCORE_CEILING;

const PROBABILITY_FLOOR: f64 = 0.01;
const PROBABILITY_CEILING: f64 = 0.95;

/// Estimates the default probability for a scored record as a linear blend
/// of score distance, delinquency count, and utilization overshoot.
/// Returned value is rounded to four decimals and lies in [0.01, 0.95].
pub fn default_probability(record: &CustomerRecord, score: u16) -> f64 {
    let score_factor = f64::from(SCORE_CEILING - score.min(SCORE_CEILING)) / 550.0;
    let payment_factor = (f64::from(record.delayed_payments) * 0.05).min(0.3);
    let utilization_factor = ((record.utilization - 30.0) / 100.0).max(0.0);

    let raw = score_factor * 0.5 + payment_factor * 0.3 + utilization_factor * 0.2;
    let rounded = (raw * 10_000.0).round() / 10_000.0;
    rounded.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::CreditMix;

    fn record(delayed: u32, utilization: f64) -> CustomerRecord {
        CustomerRecord {
            customer_id: None,
            name: None,
            delayed_payments: delayed,
            delay_days: 0,
            min_payment_only: false,
            utilization,
            history_years: 5.0,
            credit_mix: CreditMix::Good,
            inquiries: 0,
        }
    }

    #[test]
    fn perfect_score_hits_probability_floor() {
        assert_eq!(default_probability(&record(0, 0.0), 850), 0.01);
    }

    #[test]
    fn blend_matches_hand_computed_value() {
        // score 517: 0.5*(333/550) + 0 + 0 = 0.302727..., rounds to 0.3027.
        assert_eq!(default_probability(&record(0, 20.0), 517), 0.3027);
    }

    #[test]
    fn payment_factor_saturates_at_six_delays() {
        let six = default_probability(&record(6, 0.0), 600);
        let sixty = default_probability(&record(60, 0.0), 600);
        assert_eq!(six, sixty);
    }

    #[test]
    fn probability_stays_within_bounds_under_extremes() {
        let worst = default_probability(&record(100, 1_000.0), 300);
        assert_eq!(worst, 0.95);

        for score in (300..=850u16).step_by(25) {
            let p = default_probability(&record(3, 45.0), score);
            assert!((0.01..=0.95).contains(&p), "out of bounds at score {score}");
        }
    }
}
