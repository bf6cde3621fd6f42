mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use site_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let db_override = cli.db;
    let load_config = || -> Result<Config> {
        let mut config = Config::load_from(&config_path)?;
        if let Some(db) = &db_override {
            config.database.path = Some(db.clone());
        }
        Ok(config)
    };

    match cli.command {
        cli::Commands::Init => commands::init::handle(&config_path),
        cli::Commands::Serve {
            host,
            port,
            admin_token,
        } => commands::serve::handle(load_config()?, host, port, admin_token).await,
        cli::Commands::Show => commands::content::show(&load_config()?).await,
        cli::Commands::Update { file } => commands::content::update(&load_config()?, &file).await,
        cli::Commands::Remote(remote_cmd) => commands::remote::handle(remote_cmd).await,
    }
}
