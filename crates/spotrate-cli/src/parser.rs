//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the spotrate location rating service.
#[derive(Parser)]
#[command(name = "spotrate")]
#[command(about = "Rate and browse spots, and serve the spotrate web app")]
#[command(version)]
pub struct Cli {
    /// Override the data directory (database and uploads) for this invocation
    #[arg(long = "data-dir", env = "SPOTRATE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["spotrate", "--verbose", "--data-dir", "/tmp/spots", "list"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/spots")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["spotrate", "stats", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Stats)));
    }

    #[test]
    fn test_web_defaults() {
        let cli = Cli::parse_from(["spotrate", "web"]);
        match cli.command {
            Some(Commands::Web {
                port,
                api_only,
                static_dir,
                allowed_origin,
            }) => {
                assert_eq!(port, 5000);
                assert!(!api_only);
                assert!(static_dir.is_none());
                assert!(allowed_origin.is_empty());
            }
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn test_web_flags() {
        let cli = Cli::parse_from([
            "spotrate",
            "web",
            "--port",
            "8080",
            "--static-dir",
            "./web",
            "--allowed-origin",
            "http://a.example",
            "--allowed-origin",
            "http://b.example",
        ]);
        match cli.command {
            Some(Commands::Web {
                port,
                static_dir,
                allowed_origin,
                ..
            }) => {
                assert_eq!(port, 8080);
                assert_eq!(static_dir, Some(PathBuf::from("./web")));
                assert_eq!(allowed_origin.len(), 2);
            }
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn test_remove_requires_id() {
        assert!(Cli::try_parse_from(["spotrate", "remove"]).is_err());
        let cli = Cli::parse_from(["spotrate", "remove", "abc", "--force"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Remove { ref id, force: true }) if id == "abc"
        ));
    }
}
