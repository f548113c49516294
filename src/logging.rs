//! Structured logging helpers for the walkthrough.
//!
//! Thin wrappers over the `tracing` macros so call sites stay terse and the
//! field names stay consistent across the application.

/// Log extraction of bytecode from the bundled artifact.
pub fn log_loading_artifact(resource: &str) {
    tracing::info!(resource, "Loading contract artifact");
}

/// Log successful bytecode resolution.
pub fn log_bytecode_resolved(bytes: usize) {
    tracing::info!(bytes, "Contract bytecode resolved");
}

/// Log creation of a new account.
pub fn log_account_created(account_id: &str, initial_balance: &str) {
    tracing::info!(account = account_id, initial_balance, "Account created");
}

/// Log an hbar transfer between two accounts.
pub fn log_transfer(from: &str, to: &str, amount: &str) {
    tracing::info!(from, to, amount, "Hbar transferred");
}

/// Log a balance query result.
pub fn log_balance(account_id: &str, balance: &str) {
    tracing::debug!(account = account_id, balance, "Balance queried");
}

/// Log creation of a bytecode file on the ledger.
pub fn log_file_created(file_id: &str, bytes: usize) {
    tracing::info!(file = file_id, bytes, "Bytecode file created");
}

/// Log instantiation of a contract.
pub fn log_contract_deployed(contract_id: &str) {
    tracing::info!(contract = contract_id, "Contract deployed");
}

/// Log a contract function call or execution.
pub fn log_contract_call(function: &str) {
    tracing::debug!(function, "Calling contract function");
}

/// Log the pause between walkthrough steps.
pub fn log_sleep(millis: u64) {
    tracing::debug!(millis, "Sleeping between steps");
}

/// Log a token that did not match the command vocabulary.
pub fn log_unknown_command(token: &str) {
    tracing::warn!(token, "Unknown walkthrough command");
}
