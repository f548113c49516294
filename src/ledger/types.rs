//! Core ledger value types: entity ids, currency amounts, receipts.
//!
//! Entity ids follow the `shard.realm.num` convention (`0.0.1001`). All three
//! id flavors share one parsing and display shape but stay distinct types so
//! a file id can never be passed where a contract id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of tinybars in one whole hbar.
pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid entity id '{0}': expected shard.realm.num")]
pub struct ParseEntityIdError(pub String);

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name {
            pub shard: u64,
            pub realm: u64,
            pub num: u64,
        }

        impl $name {
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self { shard, realm, num }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
            }
        }

        impl FromStr for $name {
            type Err = ParseEntityIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut parts = s.splitn(3, '.');
                let mut next = || {
                    parts
                        .next()
                        .and_then(|p| p.parse::<u64>().ok())
                        .ok_or_else(|| ParseEntityIdError(s.to_owned()))
                };
                Ok(Self::new(next()?, next()?, next()?))
            }
        }
    };
}

entity_id! {
    /// A crypto account on the ledger.
    AccountId
}
entity_id! {
    /// A stored file, e.g. uploaded contract bytecode.
    FileId
}
entity_id! {
    /// A deployed smart contract instance.
    ContractId
}

/// An hbar amount, stored as tinybars to keep arithmetic exact.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Hbar(i64);

impl Hbar {
    pub const ZERO: Hbar = Hbar(0);

    /// Whole hbars, the unit fees and query payments are quoted in.
    pub const fn new(hbars: i64) -> Self {
        Hbar(hbars * TINYBARS_PER_HBAR)
    }

    pub const fn from_tinybars(tinybars: i64) -> Self {
        Hbar(tinybars)
    }

    pub const fn to_tinybars(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Hbar) -> Option<Hbar> {
        self.0.checked_add(other.0).map(Hbar)
    }
}

impl std::ops::Neg for Hbar {
    type Output = Hbar;

    fn neg(self) -> Hbar {
        Hbar(-self.0)
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 != 0 && self.0 % TINYBARS_PER_HBAR == 0 {
            write!(f, "{} ℏ", self.0 / TINYBARS_PER_HBAR)
        } else {
            write!(f, "{} tℏ", self.0)
        }
    }
}

/// Outcome codes reported by the ledger, both at precheck and on receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Success,
    InsufficientPayerBalance,
    InvalidAccountAmounts,
    InvalidInitialBalance,
    InsufficientGas,
    InvalidAccountId,
    InvalidFileId,
    InvalidContractId,
    ContractRevertExecuted,
    ErrorDecodingBytestring,
    PayerAccountNotFound,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
            Status::InvalidAccountAmounts => "INVALID_ACCOUNT_AMOUNTS",
            Status::InvalidInitialBalance => "INVALID_INITIAL_BALANCE",
            Status::InsufficientGas => "INSUFFICIENT_GAS",
            Status::InvalidAccountId => "INVALID_ACCOUNT_ID",
            Status::InvalidFileId => "INVALID_FILE_ID",
            Status::InvalidContractId => "INVALID_CONTRACT_ID",
            Status::ContractRevertExecuted => "CONTRACT_REVERT_EXECUTED",
            Status::ErrorDecodingBytestring => "ERROR_DECODING_BYTESTRING",
            Status::PayerAccountNotFound => "PAYER_ACCOUNT_NOT_FOUND",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a submitted transaction: paying account plus a valid-start
/// instant. The simulated network uses a monotonic counter for the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId {
    pub payer: AccountId,
    pub valid_start: u64,
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}.0", self.payer, self.valid_start)
    }
}

/// Consensus-confirmed outcome of a transaction. Entity id fields are filled
/// in only by the transaction kinds that create the matching entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub status: Status,
    pub transaction_id: TransactionId,
    pub account_id: Option<AccountId>,
    pub file_id: Option<FileId>,
    pub contract_id: Option<ContractId>,
}

impl TransactionReceipt {
    pub fn success(transaction_id: TransactionId) -> Self {
        Self {
            status: Status::Success,
            transaction_id,
            account_id: None,
            file_id: None,
            contract_id: None,
        }
    }
}

/// Snapshot of an account's hbar holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_id: AccountId,
    pub hbars: Hbar,
}
