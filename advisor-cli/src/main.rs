//! Advisor CLI
//!
//! Command-line interface for the Exchange Advisor API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use advisor_client::AdvisorClient;
use advisor_types::Currency;

#[derive(Parser)]
#[command(name = "advisor")]
#[command(author, version, about = "Exchange Advisor API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Advisor API
    #[arg(long, env = "ADVISOR_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask whether now is a good time to exchange a currency pair
    Exchange {
        /// Currency to exchange from (USD, EUR, GBP, INR)
        from: String,
        /// Currency to exchange to
        to: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = AdvisorClient::new(&cli.api_url);

    match cli.command {
        Commands::Exchange { from, to } => {
            let from: Currency = from.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let to: Currency = to.parse().map_err(|e: String| anyhow::anyhow!(e))?;

            let advice = client.exchange(from, to).await?;
            println!("{}", serde_json::to_string_pretty(&advice)?);
        }
        Commands::Health => {
            let healthy = client.health().await?;
            println!("healthy: {healthy}");
        }
    }

    Ok(())
}
