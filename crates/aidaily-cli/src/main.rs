mod digest;

use aidaily_core::{MinFunding, RecordFilter, RoundFilter};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "aidaily-cli")]
#[command(about = "AI funding news digest from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Filter flags shared by the record-listing commands.
#[derive(Debug, Clone, Copy, Args)]
struct FilterArgs {
    /// Minimum largest amount: none, 1M, 10M, 50M or 100M
    #[arg(long, default_value = "none")]
    min_funding: MinFunding,

    /// Round type: all, seed, series-a, series-b or series-c
    #[arg(long, default_value = "all")]
    round: RoundFilter,
}

impl From<FilterArgs> for RecordFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            min_funding: args.min_funding,
            round: args.round,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the investment table
    Table {
        #[command(flatten)]
        filters: FilterArgs,

        /// Emit rows as JSON instead of a markdown table
        #[arg(long)]
        json: bool,
    },
    /// Print the markdown newsletter
    Newsletter {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the top funded deals in feed order
    Top {
        #[command(flatten)]
        filters: FilterArgs,

        /// Number of deals to show (defaults to AIDAILY_TOP_DEALS)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the summary counters
    Summary,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = aidaily_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Table { filters, json }) => {
            digest::run_table(&config, &filters.into(), json).await?;
        }
        Some(Commands::Newsletter { filters }) => {
            digest::run_newsletter(&config, &filters.into()).await?;
        }
        Some(Commands::Top { filters, limit }) => {
            let limit = limit.unwrap_or(config.top_deals);
            digest::run_top(&config, &filters.into(), limit).await?;
        }
        Some(Commands::Summary) => digest::run_summary(&config).await?,
        None => println!("aidaily-cli: use --help to list commands"),
    }

    Ok(())
}
