//! Client-side synchronizer for a remote todo collection.
//!
//! # Overview
//! [`TodoSynchronizer`] owns a local, ordered view of a remote todo list and
//! a draft for the next item. `load` reconciles the view with the server's
//! collection; `submit` appends optimistically, then creates the item
//! remotely and merges the server-assigned id back in. The remote service
//! and the diagnostics destination are injected dependencies, so the
//! synchronizer runs unchanged against the bundled HTTP binding or
//! in-memory substitutes.
//!
//! # Design
//! - The core performs no I/O: `TodoClient` builds `HttpRequest` values and
//!   parses `HttpResponse` values, and `HttpTodoService` hands them to a
//!   host-supplied executor (host-does-IO pattern).
//! - Every mutating operation takes `&mut self`; exclusive access is the
//!   ordering discipline between loads and submits.
//! - Items carry a client-assigned correlation id, so reloads merge by
//!   server id or by content instead of duplicating optimistic entries.
//! - Remote failures are returned to the caller and recorded once on the
//!   diagnostics sink; the list is never rolled back.
//! - Wire DTOs are defined independently of the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod service;
pub mod sync;
pub mod types;

pub use client::TodoClient;
pub use diagnostics::{DiagnosticsSink, MemorySink, TracingSink};
pub use error::{ApiError, ServiceError, SyncError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{HttpTodoService, TodoService};
pub use sync::{Submission, TodoSynchronizer};
pub use types::{CreateTodo, DraftField, RemoteTodo, TodoDraft, TodoItem};
