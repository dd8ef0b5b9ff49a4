//! Canonical key - Stable string identity for an input sequence
//!
//! Format: the sequence's elements in signed base-10 form, comma-joined.
//!
//! Examples:
//! - `[1, 2, 3]` -> `"1,2,3"`
//! - `[-1, 0, 7]` -> `"-1,0,7"`
//!
//! The key preserves element order, so `[1,2]` and `[2,1]` are distinct
//! identities even though their sums agree. It is the primary key for
//! memoized records and must be deterministic across process restarts.

/// Render an integer sequence as its canonical lookup key.
///
/// Pure: identical sequences always produce identical keys. The empty
/// sequence canonicalizes to the empty string (callers reject empty input
/// before it reaches storage).
pub fn canonicalize(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
