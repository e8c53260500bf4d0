use crate::commands::{
    run_demo, run_export, run_rebalance, run_score, ExportArgs, RebalanceArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use offer_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "OfferScore",
    about = "Score job offers, rebalance preference weights and export evaluation reports",
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
    /// Score an offer stored as JSON and print the breakdown
    Score(ScoreArgs),
    /// Move one weight slider and print the rebalanced weights
    Rebalance(RebalanceArgs),
    /// Write an evaluation report as JSON, TXT or CSV
    Export(ExportArgs),
    /// Score a built-in sample offer to show the model at work
    Demo,
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
        Command::Rebalance(args) => run_rebalance(args),
        Command::Export(args) => run_export(args),
        Command::Demo => run_demo(),
    }
}
