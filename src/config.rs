//! Walkthrough configuration.
//!
//! Two layers, both read exactly once at startup: operator credentials come
//! from the environment (or the matching CLI flags), workflow tunables from
//! an optional TOML file. Everything is folded into one immutable
//! [`Settings`] value that is passed explicitly to whatever needs it.

use crate::cli::args::Cli;
use crate::ledger::{AccountId, Hbar, PrivateKey, PublicKey};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".hedera-walk.toml";

/// Gas attached to contract creation, calls, and executions.
pub const DEFAULT_GAS: u64 = 100_000;

/// Pause taken by the `sleep` command.
pub const DEFAULT_SLEEP_MS: u64 = 1000;

/// Tinybars granted to (and then transferred to) a newly created account.
pub const DEFAULT_INITIAL_BALANCE_TINYBARS: i64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkflowConfig {
    /// Gas limit for contract transactions
    #[serde(default)]
    pub gas: Option<u64>,
    /// Milliseconds the `sleep` command pauses for
    #[serde(default)]
    pub sleep_ms: Option<u64>,
    /// Starting balance for newly created accounts, in tinybars
    #[serde(default)]
    pub initial_balance_tinybars: Option<i64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the default config file from the working directory, falling back
    /// to defaults when it is absent or unreadable.
    pub fn load_or_default() -> Self {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Config::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }
}

/// The paying account every transaction runs under.
#[derive(Debug, Clone)]
pub struct Operator {
    pub account_id: AccountId,
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

/// Immutable, fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub operator: Operator,
    pub gas: u64,
    pub sleep: Duration,
    pub initial_balance: Hbar,
}

impl Settings {
    /// Fold CLI arguments (credentials) and file config (tunables) into one
    /// settings value. Credential errors name the variable to set.
    pub fn resolve(cli: &Cli, config: &Config) -> crate::Result<Self> {
        let account_id = cli
            .account_id
            .as_deref()
            .context("operator account id not set; export MY_ACCOUNT_ID or pass --account-id")?;
        let account_id: AccountId = account_id
            .parse()
            .with_context(|| format!("invalid operator account id '{account_id}'"))?;

        let private_key: PrivateKey = cli
            .private_key
            .as_deref()
            .context("operator private key not set; export MY_PRIVATE_KEY or pass --private-key")?
            .parse()
            .context("invalid operator private key")?;

        let public_key: PublicKey = cli
            .public_key
            .as_deref()
            .context("operator public key not set; export MY_PUBLIC_KEY or pass --public-key")?
            .parse()
            .context("invalid operator public key")?;

        let workflow = &config.workflow;
        Ok(Settings {
            operator: Operator {
                account_id,
                private_key,
                public_key,
            },
            gas: workflow.gas.unwrap_or(DEFAULT_GAS),
            sleep: Duration::from_millis(workflow.sleep_ms.unwrap_or(DEFAULT_SLEEP_MS)),
            initial_balance: Hbar::from_tinybars(
                workflow
                    .initial_balance_tinybars
                    .unwrap_or(DEFAULT_INITIAL_BALANCE_TINYBARS),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_operator() -> Cli {
        let private_key = PrivateKey::generate_ed25519();
        Cli {
            commands: vec![],
            account_id: Some("0.0.2".to_owned()),
            private_key: Some(private_key.to_string()),
            public_key: Some(private_key.public_key().to_string()),
            config: None,
            verbose: 0,
        }
    }

    #[test]
    fn settings_apply_defaults_without_a_config_file() {
        let settings = Settings::resolve(&cli_with_operator(), &Config::default()).unwrap();
        assert_eq!(settings.gas, DEFAULT_GAS);
        assert_eq!(settings.sleep, Duration::from_millis(DEFAULT_SLEEP_MS));
        assert_eq!(
            settings.initial_balance,
            Hbar::from_tinybars(DEFAULT_INITIAL_BALANCE_TINYBARS)
        );
        assert_eq!(settings.operator.account_id, AccountId::new(0, 0, 2));
    }

    #[test]
    fn workflow_config_overrides_defaults() {
        let config: Config = toml::from_str(
            r#"
            [workflow]
            gas = 50000
            sleep_ms = 10
            initial_balance_tinybars = 500
            "#,
        )
        .unwrap();
        let settings = Settings::resolve(&cli_with_operator(), &config).unwrap();
        assert_eq!(settings.gas, 50_000);
        assert_eq!(settings.sleep, Duration::from_millis(10));
        assert_eq!(settings.initial_balance, Hbar::from_tinybars(500));
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: Config = toml::from_str("[workflow]\nsleep_ms = 5\n").unwrap();
        let settings = Settings::resolve(&cli_with_operator(), &config).unwrap();
        assert_eq!(settings.sleep, Duration::from_millis(5));
        assert_eq!(settings.gas, DEFAULT_GAS);
    }

    #[test]
    fn missing_credentials_name_the_variable() {
        let mut cli = cli_with_operator();
        cli.account_id = None;
        let err = Settings::resolve(&cli, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("MY_ACCOUNT_ID"));

        let mut cli = cli_with_operator();
        cli.private_key = None;
        let err = Settings::resolve(&cli, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("MY_PRIVATE_KEY"));
    }

    #[test]
    fn malformed_credentials_are_rejected() {
        let mut cli = cli_with_operator();
        cli.account_id = Some("zero.zero.two".to_owned());
        assert!(Settings::resolve(&cli, &Config::default()).is_err());

        let mut cli = cli_with_operator();
        cli.private_key = Some("beef".to_owned());
        assert!(Settings::resolve(&cli, &Config::default()).is_err());
    }
}
