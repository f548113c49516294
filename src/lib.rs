//! A guided getting-started walkthrough for a Hedera-style ledger.
//!
//! The binary walks through the classic first-contact sequence against a
//! deterministic in-process testnet: create an account and fund it, deploy
//! the bundled `HelloHedera` contract, query and mutate its message. Every
//! ledger interaction goes through the [`ledger::LedgerClient`] seam, so the
//! walkthrough logic never touches network, signing, or consensus concerns.

pub mod artifact;
pub mod cli;
pub mod config;
pub mod ledger;
pub mod logging;
pub mod resolver;
pub mod simulator;
pub mod ui;

pub use ledger::LedgerClient;
pub use simulator::SimulatedTestnet;

/// Result type alias for the walkthrough
pub type Result<T> = anyhow::Result<T>;
