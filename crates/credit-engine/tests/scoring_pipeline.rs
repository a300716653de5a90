use credit_engine::pricing::{amortized_payment, interest_rate, LoanQuote};
use credit_engine::scoring::{
    assess, credit_score, default_probability, CreditMix, CreditTier, CustomerRecord, LoanCategory,
    SuggestionCategory, SuggestionPriority,
};

fn record(
    delayed: u32,
    delay_days: u32,
    min_pay: bool,
    utilization: f64,
    years: f64,
    mix: CreditMix,
    inquiries: u32,
) -> CustomerRecord {
    CustomerRecord {
        customer_id: Some("CUS-0001".to_string()),
        name: Some("Sample Customer".to_string()),
        delayed_payments: delayed,
        delay_days,
        min_payment_only: min_pay,
        utilization,
        history_years: years,
        credit_mix: mix,
        inquiries,
    }
}

#[test]
fn score_stays_in_band_across_input_grid() {
    for delayed in [0u32, 1, 5, 20, 200] {
        for utilization in [0.0, 29.9, 30.0, 55.0, 400.0] {
            for years in [0.0, 1.9, 2.0, 4.9, 7.5, 10.0, 35.0] {
                let r = record(delayed, delayed * 10, delayed % 2 == 1, utilization, years,
                    CreditMix::Other, delayed);
                let score = credit_score(&r);
                assert!((300..=850).contains(&score), "score {score} out of band");
            }
        }
    }
}

#[test]
fn reference_customer_scores_fair_517() {
    let r = record(0, 0, false, 20.0, 12.0, CreditMix::Good, 2);
    let assessment = assess(&r);
    assert_eq!(assessment.score, 517);
    assert_eq!(assessment.tier, CreditTier::Fair);
    assert_eq!(assessment.tier.label(), "Fair");
}

#[test]
fn probability_and_rate_bounds_hold_together() {
    let r = record(9, 90, true, 88.0, 0.5, CreditMix::Other, 30);
    let assessment = assess(&r);
    assert!((0.01..=0.95).contains(&assessment.default_probability));

    let rate = interest_rate(assessment.tier, LoanCategory::Personal, 250_000.0, 200_000.0)
        .expect("valid financials");
    assert!((3.0..=25.0).contains(&rate));
}

#[test]
fn default_probability_decreases_with_score() {
    let risky = record(5, 0, false, 60.0, 3.0, CreditMix::Other, 0);
    let low = default_probability(&risky, 400);
    let high = default_probability(&risky, 800);
    assert!(high < low);
}

#[test]
fn six_delayed_payments_fire_single_high_suggestion() {
    let r = record(6, 0, false, 20.0, 8.0, CreditMix::Good, 2);
    let assessment = assess(&r);
    let payment: Vec<_> = assessment
        .suggestions
        .iter()
        .filter(|s| s.category == SuggestionCategory::PaymentHistory)
        .collect();
    assert_eq!(payment.len(), 1);
    assert_eq!(payment[0].priority, SuggestionPriority::High);
    assert_eq!(payment[0].impact, "15-30%");
}

#[test]
fn amortization_covers_principal_with_interest() {
    let payment = amortized_payment(500_000.0, 7.5, 60).expect("valid loan");
    assert_eq!(payment, 10_018.97);
    assert!(payment * 60.0 > 500_000.0);
}

#[test]
fn quote_pipeline_from_score_to_schedule() {
    let quote = LoanQuote::build(763, LoanCategory::Auto, 900_000.0, 100_000.0, 350_000.0, 48)
        .expect("valid quote");
    assert_eq!(quote.tier, CreditTier::Excellent);
    assert_eq!(quote.annual_rate, 6.5);
    assert!(quote.monthly_payment > 350_000.0 / 48.0);
    assert!((quote.total_payment - quote.monthly_payment * 48.0).abs() < 0.01);
}
