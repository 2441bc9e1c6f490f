//! Domain types and wire DTOs for the todo synchronizer.
//!
//! # Design
//! Wire DTOs (`RemoteTodo`, `CreateTodo`) mirror the remote service's schema
//! but are defined independently of the mock-server crate. Integration tests
//! catch any schema drift between the two. Local list elements (`TodoItem`)
//! carry a client-assigned correlation id on top of the optional server id,
//! so one logical item keeps its identity from optimistic append through
//! server confirmation and later reloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item as returned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteTodo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Request payload for creating a new todo. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
    pub description: String,
}

/// An element of the local todo list.
///
/// `id` is present only once the server has confirmed the item, either
/// through the create response or through a reload. `correlation` is assigned
/// client-side and survives reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub correlation: Uuid,
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

impl TodoItem {
    /// A locally created item awaiting server confirmation.
    pub fn pending(name: String, description: String) -> Self {
        Self {
            correlation: Uuid::new_v4(),
            id: None,
            name,
            description,
        }
    }
}

/// Selector for the draft field mutated by `set_draft_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
}

/// In-progress, unsaved form state for the next item.
///
/// Both fields default to empty. A draft is submittable only once both are
/// non-empty; until then `submit` is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub name: String,
    pub description: String,
}

impl TodoDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}
