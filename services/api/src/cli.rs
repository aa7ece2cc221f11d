use crate::report::{run_coverage, run_recommend, run_regions, CoverageArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use payout_advisor::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Payout Advisor",
    about = "Recommend a payments integration and check where it can send money",
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
    /// Answer the questionnaire from flags and print the assessment
    Recommend(RecommendArgs),
    /// Classify destinations for one integration family and source country
    Coverage(CoverageArgs),
    /// List the region aliases and the countries they expand to
    Regions(TablesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) tables: TablesArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TablesArgs {
    /// CSV reference snapshot to use instead of APP_REFERENCE_TABLES or the bundled tables
    #[arg(long)]
    pub(crate) reference_tables: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Coverage(args) => run_coverage(args),
        Command::Regions(args) => run_regions(args),
    }
}
