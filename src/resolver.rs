//! Dotted-path lookup inside nested JSON documents.
//!
//! Build artifacts produced by `solc --combined-json` nest the interesting
//! values several objects deep, keyed by strings that themselves contain
//! dots and colons (`src/main/solidity/HelloHedera.sol:HelloHedera`), so the
//! path is taken as an explicit segment list rather than a delimited string.
//!
//! Every segment before the last must land on a nested object; the last must
//! land on a scalar leaf (string, number, or boolean). Anything else is a
//! hard resolution failure naming the offending segment.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while descending a key path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The caller supplied a path with no segments. Always a programming
    /// error on the caller's side, never a property of the document.
    #[error("empty key path")]
    EmptyPath,

    #[error("key '{segment}' not found")]
    MissingKey { segment: String },

    #[error("expected '{segment}' to be {expected}, found {found}")]
    TypeMismatch {
        segment: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Follow `path` through nested objects in `document` and return the scalar
/// leaf at the end. The document is never mutated; the returned reference
/// borrows from it.
pub fn resolve<'a, S: AsRef<str>>(
    document: &'a Value,
    path: &[S],
) -> Result<&'a Value, ResolveError> {
    let (last, parents) = path.split_last().ok_or(ResolveError::EmptyPath)?;

    let mut current = expect_object(document, "$")?;
    for segment in parents {
        let segment = segment.as_ref();
        let child = current.get(segment).ok_or_else(|| ResolveError::MissingKey {
            segment: segment.to_owned(),
        })?;
        current = expect_object(child, segment)?;
    }

    let last = last.as_ref();
    let leaf = current.get(last).ok_or_else(|| ResolveError::MissingKey {
        segment: last.to_owned(),
    })?;
    match leaf {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(leaf),
        other => Err(ResolveError::TypeMismatch {
            segment: last.to_owned(),
            expected: "a scalar",
            found: kind_of(other),
        }),
    }
}

fn expect_object<'a>(
    value: &'a Value,
    segment: &str,
) -> Result<&'a serde_json::Map<String, Value>, ResolveError> {
    value.as_object().ok_or_else(|| ResolveError::TypeMismatch {
        segment: segment.to_owned(),
        expected: "an object",
        found: kind_of(value),
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
