//! A deterministic in-process testnet.
//!
//! Implements [`LedgerClient`] with plain bookkeeping: sequential entity
//! ids, balance arithmetic, and the `HelloHedera` contract semantics
//! (the constructor stores a message, `get_message` reads it back,
//! `set_message` replaces it). No networking, no signing, no consensus —
//! state changes are validated first and applied only when the whole
//! transaction would succeed, so a failed call never moves a balance.
//!
//! Inspection helpers (`account_public_key`, `file_contents`,
//! `contract_message`) expose the resulting state for tests and tooling.

use crate::ledger::{
    AccountBalance, AccountId, ContractFunctionParameters, ContractFunctionResult, ContractId,
    FileId, Hbar, LedgerClient, LedgerError, ParamValue, PrivateKey, PublicKey, Status,
    TransactionId, TransactionReceipt,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Balance granted to the operator account, standing in for the testnet
/// faucet.
pub const OPERATOR_STARTING_BALANCE: Hbar = Hbar::new(10_000);

/// Entity numbering starts well above the reserved system range.
const FIRST_ENTITY_NUM: u64 = 1001;

#[derive(Debug, Clone)]
struct AccountRecord {
    key: PublicKey,
    balance: Hbar,
}

#[derive(Debug, Clone)]
struct ContractRecord {
    bytecode_file_id: FileId,
    message: String,
}

/// An isolated simulated network instance.
pub struct SimulatedTestnet {
    operator: Option<AccountId>,
    accounts: BTreeMap<AccountId, AccountRecord>,
    files: BTreeMap<FileId, Vec<u8>>,
    contracts: BTreeMap<ContractId, ContractRecord>,
    next_entity_num: u64,
    next_valid_start: u64,
}

impl SimulatedTestnet {
    /// Fresh, empty network in the testnet shard/realm.
    pub fn for_testnet() -> Self {
        Self {
            operator: None,
            accounts: BTreeMap::new(),
            files: BTreeMap::new(),
            contracts: BTreeMap::new(),
            next_entity_num: FIRST_ENTITY_NUM,
            next_valid_start: 1,
        }
    }

    /// Register the paying account for all subsequent transactions. The
    /// account materializes with the faucet balance, the way a portal-issued
    /// testnet account arrives pre-funded.
    pub fn set_operator(&mut self, account_id: AccountId, private_key: PrivateKey) {
        self.accounts.insert(
            account_id,
            AccountRecord {
                key: private_key.public_key(),
                balance: OPERATOR_STARTING_BALANCE,
            },
        );
        self.operator = Some(account_id);
    }

    pub fn operator(&self) -> Option<AccountId> {
        self.operator
    }

    /// Public key an account was created with, if the account exists.
    pub fn account_public_key(&self, account_id: AccountId) -> Option<&PublicKey> {
        self.accounts.get(&account_id).map(|a| &a.key)
    }

    /// Raw contents of a stored file, if it exists.
    pub fn file_contents(&self, file_id: FileId) -> Option<&[u8]> {
        self.files.get(&file_id).map(Vec::as_slice)
    }

    /// Current message held by a deployed contract, if it exists.
    pub fn contract_message(&self, contract_id: ContractId) -> Option<&str> {
        self.contracts.get(&contract_id).map(|c| c.message.as_str())
    }

    /// File a deployed contract was instantiated from, if it exists.
    pub fn contract_bytecode_file(&self, contract_id: ContractId) -> Option<FileId> {
        self.contracts.get(&contract_id).map(|c| c.bytecode_file_id)
    }

    fn payer(&self) -> Result<AccountId, LedgerError> {
        self.operator.ok_or(LedgerError::Precheck {
            status: Status::PayerAccountNotFound,
        })
    }

    fn next_entity_num(&mut self) -> u64 {
        let num = self.next_entity_num;
        self.next_entity_num += 1;
        num
    }

    fn next_transaction_id(&mut self) -> Result<TransactionId, LedgerError> {
        let payer = self.payer()?;
        let valid_start = self.next_valid_start;
        self.next_valid_start += 1;
        Ok(TransactionId { payer, valid_start })
    }

    fn balance_of(&self, account_id: AccountId) -> Result<Hbar, LedgerError> {
        self.accounts
            .get(&account_id)
            .map(|a| a.balance)
            .ok_or(LedgerError::Precheck {
                status: Status::InvalidAccountId,
            })
    }

    fn check_gas(gas: u64) -> Result<(), LedgerError> {
        if gas == 0 {
            return Err(LedgerError::Precheck {
                status: Status::InsufficientGas,
            });
        }
        Ok(())
    }

    fn contract(&self, contract_id: ContractId) -> Result<&ContractRecord, LedgerError> {
        self.contracts
            .get(&contract_id)
            .ok_or(LedgerError::Precheck {
                status: Status::InvalidContractId,
            })
    }
}

impl LedgerClient for SimulatedTestnet {
    fn create_account(
        &mut self,
        key: &PublicKey,
        initial_balance: Hbar,
    ) -> Result<TransactionReceipt, LedgerError> {
        if initial_balance.is_negative() {
            return Err(LedgerError::Precheck {
                status: Status::InvalidInitialBalance,
            });
        }
        let payer = self.payer()?;
        let payer_balance = self.balance_of(payer)?;
        let remaining = payer_balance.checked_add(-initial_balance).ok_or(
            LedgerError::Precheck {
                status: Status::InsufficientPayerBalance,
            },
        )?;
        if remaining.is_negative() {
            return Err(LedgerError::Precheck {
                status: Status::InsufficientPayerBalance,
            });
        }

        let transaction_id = self.next_transaction_id()?;
        let account_id = AccountId::new(0, 0, self.next_entity_num());
        self.accounts
            .get_mut(&payer)
            .expect("payer checked above")
            .balance = remaining;
        self.accounts.insert(
            account_id,
            AccountRecord {
                key: key.clone(),
                balance: initial_balance,
            },
        );
        debug!(%account_id, %initial_balance, "account created");

        Ok(TransactionReceipt {
            account_id: Some(account_id),
            ..TransactionReceipt::success(transaction_id)
        })
    }

    fn account_balance(&self, account_id: AccountId) -> Result<AccountBalance, LedgerError> {
        Ok(AccountBalance {
            account_id,
            hbars: self.balance_of(account_id)?,
        })
    }

    fn account_balance_cost(&self, account_id: AccountId) -> Result<Hbar, LedgerError> {
        // Balance queries are free on the real network too.
        self.balance_of(account_id)?;
        Ok(Hbar::ZERO)
    }

    fn transfer_hbar(
        &mut self,
        transfers: &[(AccountId, Hbar)],
    ) -> Result<TransactionReceipt, LedgerError> {
        let mut net = Hbar::ZERO;
        for (account_id, amount) in transfers {
            net = net
                .checked_add(*amount)
                .ok_or(LedgerError::Precheck {
                    status: Status::InvalidAccountAmounts,
                })?;
            let balance = self.balance_of(*account_id)?;
            if amount.is_negative()
                && balance
                    .checked_add(*amount)
                    .map_or(true, Hbar::is_negative)
            {
                return Err(LedgerError::Precheck {
                    status: Status::InsufficientPayerBalance,
                });
            }
        }
        if transfers.is_empty() || net != Hbar::ZERO {
            return Err(LedgerError::Precheck {
                status: Status::InvalidAccountAmounts,
            });
        }

        let transaction_id = self.next_transaction_id()?;
        for (account_id, amount) in transfers {
            let record = self
                .accounts
                .get_mut(account_id)
                .expect("account checked above");
            record.balance = record
                .balance
                .checked_add(*amount)
                .expect("balance checked above");
        }
        debug!(entries = transfers.len(), "hbar transfer applied");

        Ok(TransactionReceipt::success(transaction_id))
    }

    fn create_file(&mut self, contents: &[u8]) -> Result<TransactionReceipt, LedgerError> {
        let transaction_id = self.next_transaction_id()?;
        let file_id = FileId::new(0, 0, self.next_entity_num());
        self.files.insert(file_id, contents.to_vec());
        debug!(%file_id, bytes = contents.len(), "file created");

        Ok(TransactionReceipt {
            file_id: Some(file_id),
            ..TransactionReceipt::success(transaction_id)
        })
    }

    fn create_contract(
        &mut self,
        bytecode_file_id: FileId,
        gas: u64,
        constructor_parameters: &ContractFunctionParameters,
    ) -> Result<TransactionReceipt, LedgerError> {
        Self::check_gas(gas)?;
        let contents = self
            .files
            .get(&bytecode_file_id)
            .ok_or(LedgerError::Precheck {
                status: Status::InvalidFileId,
            })?
            .clone();

        let transaction_id = self.next_transaction_id()?;

        // The stored file must hold the bytecode as hex text.
        let decodable = std::str::from_utf8(&contents)
            .ok()
            .and_then(|text| hex::decode(text.trim()).ok());
        if decodable.is_none() {
            return Err(LedgerError::Receipt {
                status: Status::ErrorDecodingBytestring,
                transaction_id,
            });
        }

        // HelloHedera's constructor takes the initial message.
        let Some(message) = constructor_parameters.get_str(0) else {
            return Err(LedgerError::Receipt {
                status: Status::ContractRevertExecuted,
                transaction_id,
            });
        };

        let contract_id = ContractId::new(0, 0, self.next_entity_num());
        self.contracts.insert(
            contract_id,
            ContractRecord {
                bytecode_file_id,
                message: message.to_owned(),
            },
        );
        debug!(%contract_id, %bytecode_file_id, "contract instantiated");

        Ok(TransactionReceipt {
            contract_id: Some(contract_id),
            ..TransactionReceipt::success(transaction_id)
        })
    }

    fn execute_contract(
        &mut self,
        contract_id: ContractId,
        gas: u64,
        function: &str,
        parameters: &ContractFunctionParameters,
    ) -> Result<TransactionReceipt, LedgerError> {
        Self::check_gas(gas)?;
        self.contract(contract_id)?;
        let transaction_id = self.next_transaction_id()?;

        match (function, parameters.get_str(0)) {
            ("set_message", Some(message)) => {
                let record = self
                    .contracts
                    .get_mut(&contract_id)
                    .expect("contract checked above");
                record.message = message.to_owned();
                debug!(%contract_id, function, "contract state updated");
                Ok(TransactionReceipt::success(transaction_id))
            }
            _ => Err(LedgerError::Receipt {
                status: Status::ContractRevertExecuted,
                transaction_id,
            }),
        }
    }

    fn call_contract(
        &self,
        contract_id: ContractId,
        gas: u64,
        function: &str,
        _query_payment: Hbar,
    ) -> Result<ContractFunctionResult, LedgerError> {
        Self::check_gas(gas)?;
        let record = self.contract(contract_id)?;

        match function {
            "get_message" => Ok(ContractFunctionResult::new(vec![ParamValue::Str(
                record.message.clone(),
            )])),
            _ => Err(LedgerError::Precheck {
                status: Status::ContractRevertExecuted,
            }),
        }
    }
}
