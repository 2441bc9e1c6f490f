//! The remote-service seam the synchronizer is built against.
//!
//! # Design
//! `TodoService` is an explicitly constructed, passed-in dependency: the
//! synchronizer only ever talks to the trait, so tests substitute an
//! in-memory implementation and no process-wide client configuration exists.
//! `HttpTodoService` is the provided binding. It composes `TodoClient` with a
//! host-supplied executor closure, so the core still performs no I/O of its
//! own.

use crate::client::TodoClient;
use crate::error::ServiceError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, RemoteTodo};

/// The two operations the remote todo service exposes.
pub trait TodoService {
    /// Fetch the full current collection, in server order.
    fn list_todos(&mut self) -> Result<Vec<RemoteTodo>, ServiceError>;

    /// Create one item and return it with its server-assigned id.
    fn create_todo(&mut self, input: &CreateTodo) -> Result<RemoteTodo, ServiceError>;
}

impl<T: TodoService + ?Sized> TodoService for &mut T {
    fn list_todos(&mut self) -> Result<Vec<RemoteTodo>, ServiceError> {
        (**self).list_todos()
    }

    fn create_todo(&mut self, input: &CreateTodo) -> Result<RemoteTodo, ServiceError> {
        (**self).create_todo(input)
    }
}

/// [`TodoService`] binding over plain HTTP.
///
/// The executor receives each built [`HttpRequest`] and returns the raw
/// [`HttpResponse`], or a message describing why no response was produced.
/// Transport, TLS, and auth headers are the executor's concern.
pub struct HttpTodoService<E> {
    client: TodoClient,
    execute: E,
}

impl<E> HttpTodoService<E>
where
    E: FnMut(HttpRequest) -> Result<HttpResponse, String>,
{
    pub fn new(base_url: &str, execute: E) -> Self {
        Self {
            client: TodoClient::new(base_url),
            execute,
        }
    }
}

impl<E> TodoService for HttpTodoService<E>
where
    E: FnMut(HttpRequest) -> Result<HttpResponse, String>,
{
    fn list_todos(&mut self) -> Result<Vec<RemoteTodo>, ServiceError> {
        let request = self.client.build_list_todos();
        let response = (self.execute)(request).map_err(ServiceError::Transport)?;
        Ok(self.client.parse_list_todos(response)?)
    }

    fn create_todo(&mut self, input: &CreateTodo) -> Result<RemoteTodo, ServiceError> {
        let request = self.client.build_create_todo(input)?;
        let response = (self.execute)(request).map_err(ServiceError::Transport)?;
        Ok(self.client.parse_create_todo(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_todos_round_trips_through_executor() {
        let mut service = HttpTodoService::new("http://localhost:3000", |req: HttpRequest| {
            assert_eq!(req.path, "http://localhost:3000/todos");
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: r#"[{"id":"1","name":"A","description":"d1"}]"#.to_string(),
            })
        });
        let todos = service.list_todos().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "1");
    }

    #[test]
    fn create_todo_posts_and_parses_created_item() {
        let mut service = HttpTodoService::new("http://localhost:3000", |req: HttpRequest| {
            let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(body["name"], "X");
            Ok(HttpResponse {
                status: 201,
                headers: Vec::new(),
                body: r#"{"id":"42","name":"X","description":"Y"}"#.to_string(),
            })
        });
        let input = CreateTodo {
            name: "X".to_string(),
            description: "Y".to_string(),
        };
        let created = service.create_todo(&input).unwrap();
        assert_eq!(created.id, "42");
    }

    #[test]
    fn transport_failure_maps_to_transport_error() {
        let mut service =
            HttpTodoService::new("http://localhost:3000", |_| Err("connection refused".to_string()));
        let err = service.list_todos().unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[test]
    fn unexpected_status_maps_to_api_error() {
        let mut service = HttpTodoService::new("http://localhost:3000", |_| {
            Ok(HttpResponse {
                status: 503,
                headers: Vec::new(),
                body: "unavailable".to_string(),
            })
        });
        let err = service.list_todos().unwrap_err();
        assert!(matches!(err, ServiceError::Api(_)));
    }
}
