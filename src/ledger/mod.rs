//! The ledger-client seam.
//!
//! Everything the walkthrough asks of the network goes through the
//! [`LedgerClient`] trait: account creation, balance queries, hbar
//! transfers, file storage, and the contract lifecycle. Implementations own
//! signing, fees, and receipt polling; callers only see typed values and
//! classified failures, and every call blocks until the outcome is known.

pub mod keys;
pub mod params;
pub mod types;

pub use keys::{KeyError, PrivateKey, PublicKey};
pub use params::{ContractFunctionParameters, ContractFunctionResult, ParamValue};
pub use types::{
    AccountBalance, AccountId, ContractId, FileId, Hbar, Status, TransactionId,
    TransactionReceipt,
};

use thiserror::Error;

/// A ledger call that did not succeed, classified by the stage that failed.
///
/// All three classes are fatal and non-retryable for this tool: the caller
/// chain propagates them to the top-level handler, which reports and
/// terminates the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The network rejected the transaction before submission.
    #[error("transaction failed precheck with status {status}")]
    Precheck { status: Status },

    /// The transaction reached consensus but its receipt reports a failure.
    #[error("transaction {transaction_id} failed with receipt status {status}")]
    Receipt {
        status: Status,
        transaction_id: TransactionId,
    },

    /// No outcome arrived within the collaborator's deadline.
    #[error("timed out after {seconds}s waiting for the network")]
    Timeout { seconds: u64 },
}

/// Blocking operations against a ledger network.
///
/// Mirrors the shape of the ledger SDK's call surface: transactions return a
/// consensus receipt, queries return their value directly.
pub trait LedgerClient {
    /// Create a new account owned by `key`, funding it with
    /// `initial_balance` out of the operator's account.
    fn create_account(
        &mut self,
        key: &PublicKey,
        initial_balance: Hbar,
    ) -> Result<TransactionReceipt, LedgerError>;

    /// Query an account's current hbar balance.
    fn account_balance(&self, account_id: AccountId) -> Result<AccountBalance, LedgerError>;

    /// Query what the network would charge for a balance query.
    fn account_balance_cost(&self, account_id: AccountId) -> Result<Hbar, LedgerError>;

    /// Atomically apply a set of hbar adjustments. The amounts must net to
    /// zero across all listed accounts.
    fn transfer_hbar(
        &mut self,
        transfers: &[(AccountId, Hbar)],
    ) -> Result<TransactionReceipt, LedgerError>;

    /// Store a file on the ledger; the receipt carries the new file id.
    fn create_file(&mut self, contents: &[u8]) -> Result<TransactionReceipt, LedgerError>;

    /// Instantiate a contract from previously stored bytecode; the receipt
    /// carries the new contract id.
    fn create_contract(
        &mut self,
        bytecode_file_id: FileId,
        gas: u64,
        constructor_parameters: &ContractFunctionParameters,
    ) -> Result<TransactionReceipt, LedgerError>;

    /// Execute a state-mutating contract function.
    fn execute_contract(
        &mut self,
        contract_id: ContractId,
        gas: u64,
        function: &str,
        parameters: &ContractFunctionParameters,
    ) -> Result<TransactionReceipt, LedgerError>;

    /// Call a read-only contract function, paying `query_payment` for the
    /// query.
    fn call_contract(
        &self,
        contract_id: ContractId,
        gas: u64,
        function: &str,
        query_payment: Hbar,
    ) -> Result<ContractFunctionResult, LedgerError>;
}
