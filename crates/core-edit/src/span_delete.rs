//! Span deletion with register capture, and its non-destructive sibling.
//!
//! The range removed from the buffer honors the motion classification: an
//! Inclusive motion extends the span's end by one character when that
//! character exists, an Exclusive motion takes the span verbatim. The text
//! written to the register is the span's own, extracted from the pre-edit
//! snapshot so the register never reflects post-edit state.

use core_snapshot::{EditBatch, Snapshot, SnapshotBuffer, SnapshotError, Span};
use core_state::{EditSession, MotionKind, OperationKind};
use tracing::trace;

/// Remove the motion-adjusted range addressed by `span` and capture the
/// span's text into the named register, tagged with `operation`.
///
/// One atomic delete edit; the register write overwrites any prior content
/// of that slot. A zero-length Exclusive span is valid, captures the empty
/// string, and leaves the snapshot version untouched. Out-of-range offsets
/// are a caller contract violation: the error propagates and neither the
/// buffer nor the register changes.
pub fn delete_span(
    buffer: &mut SnapshotBuffer,
    session: &mut EditSession,
    span: Span,
    motion: MotionKind,
    operation: OperationKind,
    register: char,
) -> Result<Snapshot, SnapshotError> {
    let snapshot = buffer.snapshot();
    // Capture before the edit; registers hold pre-edit text.
    let captured = snapshot.slice(span)?;
    let removal = removal_range(&snapshot, span, motion);
    let mut batch = EditBatch::new(&snapshot);
    if !removal.is_empty() {
        batch.delete(removal);
    }
    let next = buffer.apply(batch)?;
    session
        .registers_facade()
        .write_delete(register, captured, operation);
    trace!(
        target: "edit.span_delete",
        op = "delete",
        start = span.start,
        end = span.end,
        motion = ?motion,
        operation = ?operation,
        register = %register,
        removed = removal.len(),
        version = next.version(),
        "deleted span"
    );
    Ok(next)
}

/// Capture the span's text into the named register without editing the
/// buffer.
pub fn yank_span(
    snapshot: &Snapshot,
    session: &mut EditSession,
    span: Span,
    operation: OperationKind,
    register: char,
) -> Result<(), SnapshotError> {
    let captured = snapshot.slice(span)?;
    session
        .registers_facade()
        .write_yank(register, captured, operation);
    trace!(
        target: "edit.span_delete",
        op = "yank",
        start = span.start,
        end = span.end,
        operation = ?operation,
        register = %register,
        "yanked span"
    );
    Ok(())
}

/// The literal range removed from the buffer for this motion kind.
fn removal_range(snapshot: &Snapshot, span: Span, motion: MotionKind) -> Span {
    match motion {
        MotionKind::Exclusive => span,
        MotionKind::Inclusive if span.end < snapshot.len_chars() => {
            Span::new(span.start, span.end + 1)
        }
        MotionKind::Inclusive => span,
    }
}
