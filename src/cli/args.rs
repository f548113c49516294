// Kept free of crate-internal imports so build.rs can include this file
// directly when rendering the man page.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hedera-walk")]
#[command(
    about = "Walk through accounts, transfers, and smart contracts on a Hedera-style testnet",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Walkthrough commands, run in order: create-account (ca),
    /// deploy-contract (dsc), call-contract (csc), modify-contract-state
    /// (mcs), sleep (sl). Unknown commands are reported and skipped.
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Operator account id, e.g. 0.0.2
    #[arg(long, env = "MY_ACCOUNT_ID", value_name = "SHARD.REALM.NUM")]
    pub account_id: Option<String>,

    /// Operator private key, DER-prefixed or raw hex
    #[arg(long, env = "MY_PRIVATE_KEY", hide_env_values = true, value_name = "HEX")]
    pub private_key: Option<String>,

    /// Operator public key, DER-prefixed or raw hex
    #[arg(long, env = "MY_PUBLIC_KEY", value_name = "HEX")]
    pub public_key: Option<String>,

    /// Path to a TOML config file (default: ./.hedera-walk.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

/// How chatty the tracing subscriber should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flags_map_to_levels() {
        let cli = Cli::parse_from(["hedera-walk", "ca"]);
        assert_eq!(cli.verbosity(), Verbosity::Normal);

        let cli = Cli::parse_from(["hedera-walk", "-v", "ca"]);
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
        assert_eq!(cli.verbosity().to_log_level(), "debug");

        let cli = Cli::parse_from(["hedera-walk", "-vvv", "ca"]);
        assert_eq!(cli.verbosity(), Verbosity::Trace);
    }

    #[test]
    fn tokens_are_collected_in_order() {
        let cli = Cli::parse_from(["hedera-walk", "ca", "dsc", "csc"]);
        assert_eq!(cli.commands, vec!["ca", "dsc", "csc"]);
    }
}
