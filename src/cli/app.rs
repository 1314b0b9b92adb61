//! The `kubo` binary: run tokens against a declared command tree

use crate::config::{build_tree, parse_config_auto, parse_config_file};
use crate::runner::{App, Streams};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Command line of the `kubo` binary
#[derive(Parser, Debug)]
#[command(
    name = "kubo",
    version,
    about = "Run command line tokens against a command tree declared in kubo.yml"
)]
pub struct Cli {
    /// Path to the kubo.yml declaration file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print more log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Tokens passed to the declared commands
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

/// Log level for a `-v` count; `RUST_LOG` still takes precedence
fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbose));
    builder.parse_env("RUST_LOG");
    // Ignored if a logger is already installed
    let _ = builder.try_init();
}

/// Load the declarations, build the tree and run the tokens with the process streams
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);
    log::debug!("CLI args parsed: {:?}", cli);

    let config = match &cli.file {
        Some(path) => parse_config_file(path)?,
        None => parse_config_auto()?.0,
    };

    let tree = build_tree(&config)?;
    let mut app = App::from_tree(tree, Streams::default());
    app.run(cli.tokens)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_trailing() {
        let cli = Cli::try_parse_from(["kubo", "-f", "cli.yml", "greet", "-v", "--loud", "bob"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("cli.yml")));
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.tokens, vec!["greet", "-v", "--loud", "bob"]);
    }

    #[test]
    fn test_double_dash_passes_own_flags_through() {
        let cli = Cli::try_parse_from(["kubo", "-vv", "--", "-f", "x"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, None);
        assert_eq!(cli.tokens, vec!["-f", "x"]);
    }

    #[test]
    fn test_no_tokens() {
        let cli = Cli::try_parse_from(["kubo"]).unwrap();
        assert!(cli.tokens.is_empty());
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(5), LevelFilter::Debug);
    }
}
