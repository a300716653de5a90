use crate::commands::{run_batch, run_quote, run_score, BatchArgs, QuoteArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Scoring Service",
    about = "Score customers, price loans, and serve the credit risk API from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single customer and print the assessment
    Score(ScoreArgs),
    /// Score a CSV of customers and write the augmented table
    Batch(BatchArgs),
    /// Price a loan and print the amortized payment schedule totals
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Batch(args) => run_batch(args),
        Command::Quote(args) => run_quote(args),
    }
}
