//! Contract call parameter and return-value plumbing.
//!
//! Only the small slice of the ABI surface the walkthrough exercises is
//! modeled; values keep their Rust types and the collaborator decides how to
//! encode them.

use serde::{Deserialize, Serialize};

/// A single contract function argument or return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    Str(String),
    Uint64(u64),
    Bool(bool),
    Bytes(Vec<u8>),
}

/// Ordered parameters for a contract constructor or function call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFunctionParameters {
    values: Vec<ParamValue>,
}

impl ContractFunctionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_string(mut self, value: impl Into<String>) -> Self {
        self.values.push(ParamValue::Str(value.into()));
        self
    }

    pub fn add_uint64(mut self, value: u64) -> Self {
        self.values.push(ParamValue::Uint64(value));
        self
    }

    pub fn add_bool(mut self, value: bool) -> Self {
        self.values.push(ParamValue::Bool(value));
        self
    }

    pub fn add_bytes(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.values.push(ParamValue::Bytes(value.into()));
        self
    }

    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    pub fn get_str(&self, index: usize) -> Option<&str> {
        match self.values.get(index) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

/// Values returned by a contract call query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFunctionResult {
    values: Vec<ParamValue>,
}

impl ContractFunctionResult {
    pub fn new(values: Vec<ParamValue>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    pub fn get_str(&self, index: usize) -> Option<&str> {
        match self.values.get(index) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}
