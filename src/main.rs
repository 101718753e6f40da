use std::{
    io,
    path::{Path, PathBuf},
};

use activity::{report, Client, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

static USAGE: &str = "Usage: github-activity <username>";

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show a GitHub user's recent public activity"
)]
struct Cli {
    /// TOML file with a [github] table overriding base_url or user_agent
    #[arg(long)]
    config: Option<PathBuf>,

    username: Option<String>,

    // anything after the username is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(username) = cli.username else {
        println!("{}", USAGE);
        return;
    };

    let client = match init_client(cli.config.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            println!("Error: {:#}", e);
            return;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = report(&client, &username, &mut stdout).await {
        error!(task = "write output", err = e.to_string());
    }
}

fn init_client(config: Option<&Path>) -> anyhow::Result<Client> {
    let Some(path) = config else {
        return Ok(Client::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT)?);
    };

    let config = util::load_config(path)?;

    Ok(Client::from_config(&config)?)
}
