mod chart;
mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drift")]
#[command(about = "Drift CLI - Browser wellbeing dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configuration file interactively
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
    /// Log in to the wellbeing server and store the bearer token
    Login {
        /// Username, prompted for when omitted
        #[arg(long)]
        username: Option<String>,
    },
    /// Remove the stored bearer token
    Logout,
    /// Fetch usage data and render the activity chart
    Dashboard {
        /// Reporting window: today or week
        #[arg(long)]
        range: Option<String>,
        /// Chart style: bar or pie
        #[arg(long)]
        chart: Option<String>,
        /// Print the chart data as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },
    /// Show login and configuration state
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Show or set the interface language
    Lang {
        /// Language code (en, fr)
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init(force),
        Commands::Login { username } => commands::login(username).await,
        Commands::Logout => commands::logout(),
        Commands::Dashboard { range, chart, json } => {
            commands::dashboard(range, chart, json).await
        }
        Commands::Status { json } => commands::status(json),
        Commands::Lang { language } => commands::lang(language),
    }
}
