//! Risk-based loan pricing and amortization. Pure calculators over a score
//! tier, loan category, and borrower financials.

use crate::scoring::{CreditTier, LoanCategory};
use serde::Serialize;

pub const RATE_FLOOR: f64 = 3.0;
pub const RATE_CEILING: f64 = 25.0;

/// Validation failures for pricing and amortization inputs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("loan principal must be positive")]
    NonPositivePrincipal,
    #[error("annual rate must not be negative")]
    NegativeRate,
    #[error("loan term must be at least one month")]
    ZeroTerm,
    #[error("annual income must not be negative")]
    NegativeIncome,
    #[error("outstanding debt must not be negative")]
    NegativeDebt,
}

/// Annual interest rate in percent for a tier and loan category, adjusted
/// for debt-to-income and clamped to [3.0, 25.0], two decimals.
pub fn interest_rate(
    tier: CreditTier,
    category: LoanCategory,
    annual_income: f64,
    outstanding_debt: f64,
) -> Result<f64, QuoteError> {
    if annual_income < 0.0 {
        return Err(QuoteError::NegativeIncome);
    }
    if outstanding_debt < 0.0 {
        return Err(QuoteError::NegativeDebt);
    }

    let rate = category.base_rate()
        + tier.rate_adjustment()
        + dti_adjustment(annual_income, outstanding_debt);
    Ok(round2(rate.clamp(RATE_FLOOR, RATE_CEILING)))
}

/// Debt-to-income surcharge: +3 past 50%, +2 past 40%, +1 past 30%.
/// No surcharge without a positive income figure.
fn dti_adjustment(annual_income: f64, outstanding_debt: f64) -> f64 {
    if annual_income <= 0.0 {
        return 0.0;
    }
    let dti = outstanding_debt / annual_income;
    if dti > 0.5 {
        3.0
    } else if dti > 0.4 {
        2.0
    } else if dti > 0.3 {
        1.0
    } else {
        0.0
    }
}

/// Fixed monthly payment that fully repays `principal` at `annual_rate`
/// percent over `months`. Zero rate degrades to a linear payoff.
pub fn amortized_payment(principal: f64, annual_rate: f64, months: u32) -> Result<f64, QuoteError> {
    if principal <= 0.0 {
        return Err(QuoteError::NonPositivePrincipal);
    }
    if annual_rate < 0.0 {
        return Err(QuoteError::NegativeRate);
    }
    if months == 0 {
        return Err(QuoteError::ZeroTerm);
    }

    if annual_rate == 0.0 {
        return Ok(round2(principal / f64::from(months)));
    }

    let monthly_rate = annual_rate / 1200.0;
    let growth = (1.0 + monthly_rate).powi(months as i32);
    Ok(round2(principal * monthly_rate * growth / (growth - 1.0)))
}

/// Priced loan offer: the rate for the borrower's tier plus the amortized
/// payment schedule totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanQuote {
    pub score: u16,
    pub tier: CreditTier,
    pub category: LoanCategory,
    pub annual_rate: f64,
    pub principal: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanQuote {
    pub fn build(
        score: u16,
        category: LoanCategory,
        annual_income: f64,
        outstanding_debt: f64,
        principal: f64,
        term_months: u32,
    ) -> Result<Self, QuoteError> {
        let tier = CreditTier::for_score(score);
        let annual_rate = interest_rate(tier, category, annual_income, outstanding_debt)?;
        let monthly_payment = amortized_payment(principal, annual_rate, term_months)?;
        let total_payment = round2(monthly_payment * f64::from(term_months));
        let total_interest = round2(total_payment - principal);

        Ok(Self {
            score,
            tier,
            category,
            annual_rate,
            principal,
            term_months,
            monthly_payment,
            total_payment,
            total_interest,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rates_follow_category_table() {
        // Good tier and low DTI leave the base rate untouched.
        let rate = interest_rate(CreditTier::Good, LoanCategory::Housing, 500_000.0, 0.0)
            .expect("valid inputs");
        assert_eq!(rate, 7.5);
    }

    #[test]
    fn tier_and_dti_adjustments_stack() {
        // Personal 10.5 + Poor 5.0 + DTI>0.5 surcharge 3.0 = 18.5.
        let rate = interest_rate(CreditTier::Poor, LoanCategory::Personal, 100_000.0, 60_000.0)
            .expect("valid inputs");
        assert_eq!(rate, 18.5);
    }

    #[test]
    fn dti_bands_use_strict_thresholds() {
        let rate_at = |debt: f64| {
            interest_rate(CreditTier::Good, LoanCategory::Other, 100_000.0, debt)
                .expect("valid inputs")
        };
        assert_eq!(rate_at(30_000.0), 11.0);
        assert_eq!(rate_at(30_001.0), 12.0);
        assert_eq!(rate_at(40_001.0), 13.0);
        assert_eq!(rate_at(50_001.0), 14.0);
    }

    #[test]
    fn zero_income_skips_dti_surcharge() {
        let rate = interest_rate(CreditTier::Fair, LoanCategory::Auto, 0.0, 90_000.0)
            .expect("valid inputs");
        assert_eq!(rate, 10.5);
    }

    #[test]
    fn excellent_student_rate_respects_floor() {
        // 6.5 - 1.5 = 5.0, well above the floor; the clamp still holds the
        // output within [3, 25] across the whole tier/category grid.
        for tier in CreditTier::ordered() {
            for category in [
                LoanCategory::Personal,
                LoanCategory::Housing,
                LoanCategory::Auto,
                LoanCategory::Student,
                LoanCategory::Other,
            ] {
                let rate = interest_rate(tier, category, 100_000.0, 60_000.0)
                    .expect("valid inputs");
                assert!((RATE_FLOOR..=RATE_CEILING).contains(&rate));
            }
        }
    }

    #[test]
    fn negative_financials_are_rejected() {
        assert_eq!(
            interest_rate(CreditTier::Good, LoanCategory::Auto, -1.0, 0.0),
            Err(QuoteError::NegativeIncome)
        );
        assert_eq!(
            interest_rate(CreditTier::Good, LoanCategory::Auto, 1.0, -1.0),
            Err(QuoteError::NegativeDebt)
        );
    }

    #[test]
    fn annuity_formula_matches_reference_value() {
        let payment = amortized_payment(500_000.0, 7.5, 60).expect("valid loan");
        assert_eq!(payment, 10_018.97);
    }

    #[test]
    fn zero_rate_is_linear_payoff() {
        let payment = amortized_payment(120_000.0, 0.0, 24).expect("valid loan");
        assert_eq!(payment, 5_000.0);
        // Exact payoff at zero rate, to rounding.
        assert!((payment * 24.0 - 120_000.0).abs() < 0.01);
    }

    #[test]
    fn interest_is_never_negative() {
        for months in [6u32, 12, 60, 240, 360] {
            let payment = amortized_payment(250_000.0, 4.25, months).expect("valid loan");
            assert!(payment * f64::from(months) >= 250_000.0);
        }
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert_eq!(
            amortized_payment(0.0, 5.0, 12),
            Err(QuoteError::NonPositivePrincipal)
        );
        assert_eq!(
            amortized_payment(1_000.0, -0.1, 12),
            Err(QuoteError::NegativeRate)
        );
        assert_eq!(amortized_payment(1_000.0, 5.0, 0), Err(QuoteError::ZeroTerm));
    }

    #[test]
    fn quote_totals_are_consistent() {
        let quote = LoanQuote::build(700, LoanCategory::Housing, 500_000.0, 100_000.0, 500_000.0, 60)
            .expect("valid quote");
        assert_eq!(quote.tier, CreditTier::VeryGood);
        // Housing 7.5 + Very Good -0.75, DTI 0.2 adds nothing.
        assert_eq!(quote.annual_rate, 6.75);
        assert!((quote.total_payment - quote.monthly_payment * 60.0).abs() < 0.01);
        assert!((quote.total_interest - (quote.total_payment - 500_000.0)).abs() < 0.01);
        assert!(quote.total_interest > 0.0);
    }
}
