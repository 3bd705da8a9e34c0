//! Contract-violation errors.
//!
//! Every variant signals a caller bug (offsets or lines resolved against a
//! stale or wrong snapshot), so callers fail fast; nothing here is clamped,
//! retried, or recovered from.

use crate::Span;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("range {start}..{end} out of bounds for snapshot of {len} chars")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("line {number} out of bounds for snapshot with {count} lines")]
    LineOutOfRange { number: usize, count: usize },

    #[error("resolved against snapshot version {resolved} but buffer is at {current}")]
    StaleSnapshot { resolved: u64, current: u64 },

    #[error("edit batch ranges {first:?} and {second:?} overlap")]
    OverlappingEdits { first: Span, second: Span },
}
