//! Atomic multi-edit batches.

use crate::{Snapshot, Span};

/// One (range, replacement) pair inside a batch. An insertion is a
/// replacement over an empty span; a deletion replaces with the empty
/// string.
#[derive(Debug, Clone)]
pub struct Edit {
    span: Span,
    replacement: String,
}

impl Edit {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// A set of edits applied as one buffer mutation.
///
/// Bound to the snapshot version it was built against;
/// [`SnapshotBuffer::apply`](crate::SnapshotBuffer::apply) rejects batches
/// resolved against a superseded version, since their offsets would silently
/// address the wrong text.
#[derive(Debug, Clone)]
pub struct EditBatch {
    base_version: u64,
    edits: Vec<Edit>,
}

impl EditBatch {
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            base_version: snapshot.version(),
            edits: Vec::new(),
        }
    }

    /// Replace the text addressed by `span` with `text`.
    pub fn replace(&mut self, span: Span, text: impl Into<String>) -> &mut Self {
        self.edits.push(Edit {
            span,
            replacement: text.into(),
        });
        self
    }

    /// Insert `text` at `offset`.
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) -> &mut Self {
        self.replace(Span::point(offset), text)
    }

    /// Remove the text addressed by `span`.
    pub fn delete(&mut self, span: Span) -> &mut Self {
        self.replace(span, "")
    }

    pub fn base_version(&self) -> u64 {
        self.base_version
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub(crate) fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}
