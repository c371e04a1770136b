use anyhow::Result;
use clap::{Parser, Subcommand};

/// yeschef - weekly meal planning with simulated grocery prices
#[derive(Parser)]
#[command(name = "yeschef")]
#[command(about = "Weekly meal planning with simulated grocery prices", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Estimate the cost of grocery items
    Prices {
        #[arg(required = true)]
        items: Vec<String>,

        /// City or region, e.g. "Chicago, IL"
        #[arg(long)]
        location: Option<String>,

        /// Price every item at this store chain instead
        #[arg(long)]
        store: Option<String>,
    },
    /// Compare one item across store chains
    Compare {
        item: String,

        #[arg(long)]
        location: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = yeschef::config::Config::load(cli.config.clone())?;
    let serving = matches!(cli.command, Commands::Serve { .. });
    config.validate(serving).map_err(|e| anyhow::anyhow!(e))?;

    yeschef::observability::init_observability(
        "yeschef",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => yeschef::cli::serve(config, host, port).await,
        Commands::Prices {
            items,
            location,
            store,
        } => yeschef::cli::prices(config, items, location, store).await,
        Commands::Compare { item, location } => {
            yeschef::cli::compare(config, item, location).await
        }
    }
}
