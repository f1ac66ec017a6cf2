//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for watchparty
#[derive(Parser, Debug)]
#[command(name = "watchparty")]
#[command(author, version, about = "Weekly movie night: propose, draw, vote")]
#[command(long_about = r#"
Watchparty runs the weekly movie selection of a group.

Each participant proposes up to two films. A draw picks two participants at
random and one film from each, then opens a timed vote. The winner leaves its
owner's list and goes to the blacklist so it is not picked again.

The interactive prompt emulates the chat commands (/addmovie, /listmovie,
/deletemovie, /extractmovie, /setup) together with helpers to vote and to
switch the simulated user.

Configuration files are loaded from (in priority order):
1. WATCHPARTY_* environment variables
2. --config <path>        Explicit config file
3. ./watchparty.toml      Project-level config
4. ~/.config/watchparty/config.toml   Global config

Example:
  watchparty --as alice --channel movie-night
  watchparty --config ./club.toml -vv
"#)]
pub struct Cli {
    /// Participant issuing commands at startup
    #[arg(long = "as", value_name = "NAME", default_value = "host")]
    pub participant: String,

    /// Channel commands are issued from at startup
    #[arg(long, value_name = "CHANNEL", default_value = "movie-night")]
    pub channel: String,

    /// Start with administrator permission (needed for /setup)
    #[arg(long)]
    pub admin: bool,

    /// Seed for the draw (reproducible draws)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["watchparty"]);
        assert_eq!(cli.participant, "host");
        assert_eq!(cli.channel, "movie-night");
        assert!(!cli.admin);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "watchparty",
            "--as",
            "alice",
            "--admin",
            "--seed",
            "42",
            "-vv",
            "--config",
            "club.toml",
        ]);
        assert_eq!(cli.participant, "alice");
        assert!(cli.admin);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("club.toml")));
    }
}
