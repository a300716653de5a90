use clap::Args;
use credit_engine::batch::{score_csv, BatchOutcome};
use credit_engine::error::AppError;
use credit_engine::pricing::LoanQuote;
use credit_engine::scoring::{assess, CreditAssessment, CreditMix, CustomerRecord, LoanCategory};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Customer identifier (passthrough, not scored)
    #[arg(long)]
    customer_id: Option<String>,
    /// Customer display name (passthrough, not scored)
    #[arg(long)]
    name: Option<String>,
    /// Number of delayed payments on record
    #[arg(long, default_value_t = 0)]
    delayed_payments: u32,
    /// Days past the due date on the worst delinquency
    #[arg(long, default_value_t = 0)]
    delay_days: u32,
    /// Customer habitually pays only the minimum amount
    #[arg(long)]
    min_payment_only: bool,
    /// Credit utilization ratio in percent
    #[arg(long)]
    utilization: f64,
    /// Age of the credit history in years
    #[arg(long)]
    history_years: f64,
    /// Bureau credit-mix label ("Good" or anything else)
    #[arg(long, default_value = "Standard")]
    credit_mix: String,
    /// Recent credit inquiries
    #[arg(long, default_value_t = 0)]
    inquiries: u32,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Customer CSV to score
    #[arg(long)]
    input: PathBuf,
    /// Where to write the augmented CSV
    #[arg(long, default_value = "credit_scores.csv")]
    output: PathBuf,
    /// Number of scored rows to echo to the terminal
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Credit score in [300, 850]
    #[arg(long)]
    score: u16,
    /// Loan category (personal, housing, auto, student, other)
    #[arg(long, default_value = "other")]
    category: String,
    /// Annual income
    #[arg(long, default_value_t = 0.0)]
    annual_income: f64,
    /// Outstanding debt
    #[arg(long, default_value_t = 0.0)]
    outstanding_debt: f64,
    /// Loan principal
    #[arg(long)]
    principal: f64,
    /// Term in months
    #[arg(long)]
    term_months: u32,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let record = CustomerRecord {
        customer_id: args.customer_id,
        name: args.name,
        delayed_payments: args.delayed_payments,
        delay_days: args.delay_days,
        min_payment_only: args.min_payment_only,
        utilization: args.utilization,
        history_years: args.history_years,
        credit_mix: CreditMix::from_label(&args.credit_mix),
        inquiries: args.inquiries,
    };

    render_assessment(&assess(&record));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let input = BufReader::new(File::open(&args.input)?);
    let output = File::create(&args.output)?;
    let outcome = score_csv(input, output, args.preview)?;

    render_batch(&outcome, &args.output);
    Ok(())
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let quote = LoanQuote::build(
        args.score,
        LoanCategory::from_label(&args.category),
        args.annual_income,
        args.outstanding_debt,
        args.principal,
        args.term_months,
    )?;

    render_quote(&quote);
    Ok(())
}

fn render_assessment(assessment: &CreditAssessment) {
    if let Some(name) = &assessment.name {
        println!("Customer: {name}");
    }
    if let Some(id) = &assessment.customer_id {
        println!("Customer ID: {id}");
    }
    println!(
        "Credit score: {}/850 ({} {})",
        assessment.score,
        assessment.tier.indicator(),
        assessment.tier.label()
    );
    println!(
        "Default probability: {:.2}%",
        assessment.default_probability * 100.0
    );

    println!("\nScore breakdown");
    for component in &assessment.components {
        println!(
            "- {}: {:.2} x {:.2} = {:.2}",
            component.factor.label(),
            component.subscore,
            component.weight,
            component.weighted
        );
    }

    if assessment.suggestions.is_empty() {
        println!("\nImprovement suggestions: none needed");
    } else {
        println!("\nImprovement suggestions");
        for (index, suggestion) in assessment.suggestions.iter().enumerate() {
            println!(
                "{}. [{}] {}: {} (potential impact +{})",
                index + 1,
                suggestion.priority.label(),
                suggestion.category.label(),
                suggestion.message,
                suggestion.impact
            );
        }
    }
}

fn render_batch(outcome: &BatchOutcome, output: &PathBuf) {
    println!("Scored {} customers -> {}", outcome.rows, output.display());

    let summary = &outcome.summary;
    println!("\nPortfolio summary");
    println!("- Average score: {:.0}/850", summary.average_score);
    println!(
        "- Average default risk: {:.2}%",
        summary.average_default_probability * 100.0
    );
    for entry in &summary.tier_counts {
        println!("- {}: {}", entry.label, entry.count);
    }

    if outcome.preview.is_empty() {
        println!("\nPreview: no rows");
    } else {
        println!("\nPreview (first {})", outcome.preview.len());
        for customer in &outcome.preview {
            println!(
                "- {} | {} | score {} | {} | default {:.4}",
                customer.customer_id.as_deref().unwrap_or("-"),
                customer.name.as_deref().unwrap_or("-"),
                customer.score,
                customer.tier.label(),
                customer.default_probability
            );
        }
    }
}

fn render_quote(quote: &LoanQuote) {
    let years = quote.term_months / 12;
    let months = quote.term_months % 12;

    println!(
        "Tier: {} {} (score {})",
        quote.tier.indicator(),
        quote.tier.label(),
        quote.score
    );
    println!("Category: {}", quote.category.label());
    println!("Interest rate: {:.2}%", quote.annual_rate);
    println!("Monthly payment: {:.2}", quote.monthly_payment);
    println!("Total interest: {:.2}", quote.total_interest);
    println!("Total amount: {:.2}", quote.total_payment);
    println!("Tenure: {years}y {months}m");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn run_batch_writes_augmented_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input_path = dir.path().join("customers.csv");
        let output_path = dir.path().join("scored.csv");

        let mut input = File::create(&input_path).expect("input file");
        writeln!(
            input,
            "Customer_ID,Name,Num_of_Delayed_Payment,Delay_from_due_date,\
Payment_of_Min_Amount,Credit_Utilization_Ratio,Credit_History_Age_Years,Credit_Mix,\
Num_Credit_Inquiries"
        )
        .expect("header written");
        writeln!(input, "CUS-1,Avery,0,0,0,20,12,Good,2").expect("row written");
        drop(input);

        run_batch(BatchArgs {
            input: input_path,
            output: output_path.clone(),
            preview: 5,
        })
        .expect("batch runs");

        let written = std::fs::read_to_string(output_path).expect("output readable");
        assert!(written.contains("Credit_Score,Credit_Tier,Default_Probability"));
        assert!(written.contains("517,Fair,0.3027"));
    }

    #[test]
    fn run_batch_surfaces_missing_file() {
        let err = run_batch(BatchArgs {
            input: PathBuf::from("/nonexistent/customers.csv"),
            output: PathBuf::from("/tmp/unused.csv"),
            preview: 5,
        })
        .expect_err("missing input rejected");
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn run_score_accepts_minimal_flags() {
        run_score(ScoreArgs {
            customer_id: None,
            name: None,
            delayed_payments: 6,
            delay_days: 0,
            min_payment_only: false,
            utilization: 45.0,
            history_years: 1.0,
            credit_mix: "Standard".to_string(),
            inquiries: 0,
        })
        .expect("score command runs");
    }

    #[test]
    fn run_quote_rejects_zero_term() {
        let err = run_quote(QuoteArgs {
            score: 700,
            category: "personal".to_string(),
            annual_income: 100_000.0,
            outstanding_debt: 0.0,
            principal: 10_000.0,
            term_months: 0,
        })
        .expect_err("zero term rejected");
        assert!(matches!(err, AppError::Quote(_)));
    }
}
