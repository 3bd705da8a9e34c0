//! Buffer mutation engines for the modal editing core.
//!
//! Three engines, each performing exactly one atomic edit against a
//! [`core_snapshot::SnapshotBuffer`] (one new snapshot version per public
//! operation, never a sequence of independent edits): line insertion, span
//! deletion with register capture, and indentation shifting. Lines and
//! spans must be resolved against the live snapshot immediately before
//! calling; stale or out-of-range handles are rejected, never clamped.

pub mod indent;
pub mod line_insert;
pub mod span_delete;

pub use indent::{TabPolicy, shift_left, shift_left_with_policy, shift_right};
pub use line_insert::{add_line_above, add_line_below};
pub use span_delete::{delete_span, yank_span};

// The classification enums travel with the engine API for command-level
// callers.
pub use core_state::{MotionKind, OperationKind};
