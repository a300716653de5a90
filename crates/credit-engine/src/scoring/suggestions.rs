use super::domain::{CustomerRecord, Suggestion, SuggestionCategory, SuggestionPriority};

/// Builds the prioritized improvement plan for a record. Rules run in a
/// fixed order (payment history, utilization, credit age, minimum-payment
/// behavior) and each category contributes at most one entry, with the
/// high-severity branch superseding the medium one. An empty plan means no
/// action is needed.
pub fn improvement_plan(record: &CustomerRecord) -> Vec<Suggestion> {
    let mut plan = Vec::new();

    if record.delayed_payments > 5 {
        plan.push(Suggestion {
            priority: SuggestionPriority::High,
            category: SuggestionCategory::PaymentHistory,
            message: format!(
                "You have {} delayed payments. Set up automatic payments immediately.",
                record.delayed_payments
            ),
            impact: "15-30%",
        });
    } else if record.delayed_payments > 0 {
        plan.push(Suggestion {
            priority: SuggestionPriority::Medium,
            category: SuggestionCategory::PaymentHistory,
            message: "Set up automatic payments or payment reminders to avoid missing dues."
                .to_string(),
            impact: "10-20%",
        });
    }

    if record.utilization > 40.0 {
        plan.push(Suggestion {
            priority: SuggestionPriority::High,
            category: SuggestionCategory::CreditUtilization,
            message: format!(
                "Your utilization is {:.1}%. Reduce it below 30% by paying down balances.",
                record.utilization
            ),
            impact: "20-30%",
        });
    } else if record.utilization > 30.0 {
        plan.push(Suggestion {
            priority: SuggestionPriority::Medium,
            category: SuggestionCategory::CreditUtilization,
            message: format!(
                "Your utilization is {:.1}%. Try to keep it below 30%.",
                record.utilization
            ),
            impact: "10-20%",
        });
    }

    if record.history_years < 2.0 {
        plan.push(Suggestion {
            priority: SuggestionPriority::Medium,
            category: SuggestionCategory::CreditHistory,
            message: "Keep your oldest accounts open to build a longer credit history."
                .to_string(),
            impact: "5-15%",
        });
    }

    if record.min_payment_only {
        plan.push(Suggestion {
            priority: SuggestionPriority::High,
            category: SuggestionCategory::PaymentBehavior,
            message: "Pay more than the minimum amount to reduce debt faster.".to_string(),
            impact: "10-20%",
        });
    }

    plan
}
