//! Idempotent compute-and-store
//!
//! The one operation this service exists for: validate the input sequence,
//! canonicalize it into a lookup key, and either return the stored result or
//! compute, persist, and return a fresh one. At most one record is ever
//! written per key.

use crate::key::canonicalize;
use crate::storage::SumStore;
use crate::{Error, Result};

/// Outcome of a compute-and-store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computation {
    /// 32-bit wraparound sum of the input sequence
    pub result: i32,
    /// Whether the result was already stored before this call
    pub from_cache: bool,
}

/// Sum a sequence with 32-bit signed wraparound semantics.
///
/// Overflow wraps silently rather than signaling an error:
/// `2147483647 + 1 == -2147483648`.
pub fn wrapping_sum(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0i32, |acc, &n| acc.wrapping_add(n))
}

/// Compute the sum of a sequence, memoized by its canonical key.
///
/// A missing (`None`) or empty sequence fails with [`Error::InvalidInput`]
/// before any store access. Otherwise the store is consulted first; only a
/// miss computes and writes.
///
/// When two callers race on the same unseen key, the loser's insert hits the
/// store's uniqueness constraint. The sum for a given key is deterministic,
/// so the loser re-reads the winner's row and reports a cache hit.
pub fn compute_sum<S: SumStore>(store: &S, numbers: Option<&[i32]>) -> Result<Computation> {
    let numbers = match numbers {
        Some(n) if !n.is_empty() => n,
        _ => {
            return Err(Error::InvalidInput(
                "input number list cannot be empty".to_string(),
            ));
        }
    };

    let key = canonicalize(numbers);

    if let Some(existing) = store.find_by_key(&key)? {
        tracing::debug!(key = %key, "serving memoized result");
        return Ok(Computation {
            result: existing.result,
            from_cache: true,
        });
    }

    let result = wrapping_sum(numbers);

    match store.insert(&key, result) {
        Ok(record) => {
            tracing::debug!(key = %key, result = record.result, "stored new result");
            Ok(Computation {
                result: record.result,
                from_cache: false,
            })
        }
        Err(e) if e.is_unique_violation() => {
            // A concurrent writer stored this key between our lookup and
            // insert; its result is interchangeable with ours.
            let existing = store.find_by_key(&key)?.ok_or(e)?;
            Ok(Computation {
                result: existing.result,
                from_cache: true,
            })
        }
        Err(e) => Err(e),
    }
}
