//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Smoke-test a bets CRUD HTTP API: create, list, get, update, delete, list.
#[derive(Parser, Debug)]
#[command(name = "betsmoke")]
#[command(version)]
pub struct Cli {
    /// Number of bets to create before listing
    #[arg(value_name = "COUNT")]
    pub count: u32,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bets collection URL (overrides config and BETSMOKE_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Seed for request payload randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Only print failures and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn count_is_required_and_numeric() {
        assert!(Cli::try_parse_from(["betsmoke"]).is_err());
        assert!(Cli::try_parse_from(["betsmoke", "two"]).is_err());
        assert!(Cli::try_parse_from(["betsmoke", "-1"]).is_err());

        let cli = Cli::try_parse_from(["betsmoke", "3"]).unwrap();
        assert_eq!(cli.count, 3);
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "betsmoke",
            "--base-url",
            "http://127.0.0.1:8080/bets",
            "--seed",
            "5",
            "--json",
            "-vv",
            "0",
        ])
        .unwrap();

        assert_eq!(cli.count, 0);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:8080/bets"));
        assert_eq!(cli.seed, Some(5));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
