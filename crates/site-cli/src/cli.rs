use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leons-site")]
#[command(about = "Content server for the Leon's Landscape Supplies website", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path, overrides the config file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Bearer token required for content updates
        #[arg(long, env = "LEONS_SITE_ADMIN_TOKEN", hide_env_values = true)]
        admin_token: Option<String>,
    },

    /// Write the default config file
    Init,

    /// Print the current site content as JSON
    Show,

    /// Apply a partial update from a JSON file
    Update {
        /// JSON file with the fields to change ("-" reads stdin)
        file: String,
    },

    /// Talk to a running server
    #[command(subcommand)]
    Remote(RemoteCommands),
}

#[derive(Subcommand)]
pub enum RemoteCommands {
    /// Fetch the site content from a server
    Show {
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        url: String,
    },

    /// Send a partial update to a server
    Update {
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        url: String,

        #[arg(long, env = "LEONS_SITE_ADMIN_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// JSON file with the fields to change ("-" reads stdin)
        file: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["leons-site", "serve", "--port", "8080"]);
        match cli.command {
            Commands::Serve { host, port, .. } => {
                assert_eq!(port, Some(8080));
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_global_db() {
        let cli = Cli::parse_from(["leons-site", "show", "--db", "/tmp/site.db"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/site.db")));
        assert!(matches!(cli.command, Commands::Show));
    }

    #[test]
    fn test_parse_remote_update() {
        let cli = Cli::parse_from([
            "leons-site",
            "remote",
            "update",
            "--url",
            "http://example.com",
            "--token",
            "abc",
            "patch.json",
        ]);
        match cli.command {
            Commands::Remote(RemoteCommands::Update { url, token, file }) => {
                assert_eq!(url, "http://example.com");
                assert_eq!(token.as_deref(), Some("abc"));
                assert_eq!(file, "patch.json");
            }
            _ => panic!("expected remote update"),
        }
    }
}
