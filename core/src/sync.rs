//! The todo list synchronizer.
//!
//! # Design
//! `TodoSynchronizer` owns the only copy of the local list and the pending
//! draft. Every mutating operation takes `&mut self`: exclusive access is the
//! ordering discipline, so a load and a submit can never interleave on one
//! synchronizer. The list is always the last server snapshot, in server
//! order, followed by pending items awaiting confirmation.
//!
//! Failures are reported twice on purpose: returned to the caller as a
//! [`SyncError`] and recorded exactly once on the diagnostics sink, so hosts
//! that drop the error still leave a trace.

use std::collections::HashMap;

use uuid::Uuid;

use crate::diagnostics::DiagnosticsSink;
use crate::error::SyncError;
use crate::service::TodoService;
use crate::types::{CreateTodo, DraftField, RemoteTodo, TodoDraft, TodoItem};

/// Outcome of a [`TodoSynchronizer::submit`] call that did not fail remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The draft was incomplete; nothing was appended or sent.
    Skipped,
    /// The item was appended, created remotely, and confirmed under this
    /// correlation id.
    Confirmed { correlation: Uuid },
}

/// Local view of a remote todo collection.
///
/// Created empty; call [`load`](Self::load) to populate it. The remote
/// service and the diagnostics sink are injected at construction, so the
/// synchronizer runs unchanged against the bundled HTTP binding or an
/// in-memory substitute.
pub struct TodoSynchronizer<S, D> {
    service: S,
    diagnostics: D,
    items: Vec<TodoItem>,
    draft: TodoDraft,
}

impl<S: TodoService, D: DiagnosticsSink> TodoSynchronizer<S, D> {
    pub fn new(service: S, diagnostics: D) -> Self {
        Self {
            service,
            diagnostics,
            items: Vec::new(),
            draft: TodoDraft::default(),
        }
    }

    /// The current list: last server snapshot plus pending items.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The in-progress draft.
    pub fn draft(&self) -> &TodoDraft {
        &self.draft
    }

    /// Replace one draft field, leaving the other untouched.
    ///
    /// No validation happens here; an incomplete draft is rejected by
    /// [`submit`](Self::submit) instead. Pure local mutation, no network
    /// effect.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Name => self.draft.name = value.into(),
            DraftField::Description => self.draft.description = value.into(),
        }
    }

    /// Fetch the full remote collection and reconcile the local list with it.
    ///
    /// On failure the list is left unchanged, one diagnostic is recorded, and
    /// the error is returned. No retry is attempted. Idempotent with respect
    /// to server state: repeated calls with no intervening writes converge to
    /// the same list.
    pub fn load(&mut self) -> Result<(), SyncError> {
        let remote = match self.service.list_todos() {
            Ok(remote) => remote,
            Err(e) => {
                let e = SyncError::RemoteRead(e);
                self.diagnostics.record(&e.to_string());
                return Err(e);
            }
        };
        self.items = reconcile(std::mem::take(&mut self.items), remote);
        Ok(())
    }

    /// Validate the draft, append it optimistically, and create it remotely.
    ///
    /// An incomplete draft (either field empty) is a silent guard: the call
    /// returns [`Submission::Skipped`] with no other effect. Otherwise the
    /// draft is appended to the end of the list as a pending item, the draft
    /// is reset, and one create request is issued. On success the
    /// server-assigned id is merged into the pending item. On failure the
    /// optimistic item remains (no rollback), one diagnostic is recorded, and
    /// the error is returned. At-most-one-attempt write, no retry.
    pub fn submit(&mut self) -> Result<Submission, SyncError> {
        if !self.draft.is_complete() {
            return Ok(Submission::Skipped);
        }

        let draft = std::mem::take(&mut self.draft);
        let input = CreateTodo {
            name: draft.name,
            description: draft.description,
        };
        let item = TodoItem::pending(input.name.clone(), input.description.clone());
        let correlation = item.correlation;
        self.items.push(item);

        match self.service.create_todo(&input) {
            Ok(created) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.correlation == correlation) {
                    item.id = Some(created.id);
                }
                Ok(Submission::Confirmed { correlation })
            }
            Err(e) => {
                let e = SyncError::RemoteWrite(e);
                self.diagnostics.record(&e.to_string());
                Err(e)
            }
        }
    }
}

/// Merge a server snapshot into the previous local list.
///
/// The snapshot defines the new sequence and its order. A server item whose
/// id is already known keeps that item's correlation. An unknown server item
/// first tries to claim a pending item with equal content, so a create whose
/// confirmation was lost is merged rather than duplicated. Pending items
/// that match nothing stay appended at the tail, in their original order.
fn reconcile(previous: Vec<TodoItem>, remote: Vec<RemoteTodo>) -> Vec<TodoItem> {
    let mut known = HashMap::new();
    let mut pending = Vec::new();
    for item in previous {
        match &item.id {
            Some(id) => {
                known.insert(id.clone(), item.correlation);
            }
            None => pending.push(item),
        }
    }

    let mut merged = Vec::with_capacity(remote.len() + pending.len());
    for todo in remote {
        let claimed = known.get(&todo.id).copied().or_else(|| {
            pending
                .iter()
                .position(|p| p.name == todo.name && p.description == todo.description)
                .map(|at| pending.remove(at).correlation)
        });
        merged.push(TodoItem {
            correlation: claimed.unwrap_or_else(Uuid::new_v4),
            id: Some(todo.id),
            name: todo.name,
            description: todo.description,
        });
    }
    merged.extend(pending);
    merged
}
