use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub name: String,
    pub description: String,
}

// A Vec, not a map: list order is insertion order, which is the order
// clients display.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4(),
        name: input.name,
        description: input.description,
    };
    db.write().await.push(todo.clone());
    info!(id = %todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Uuid::nil(),
            name: "Test".to_string(),
            description: "details".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Test");
        assert_eq!(json["description"], "details");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: Uuid::new_v4(),
            name: "Roundtrip".to_string(),
            description: "there and back".to_string(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, todo.id);
        assert_eq!(back.name, todo.name);
        assert_eq!(back.description, todo.description);
    }

    #[test]
    fn create_todo_rejects_missing_name() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_rejects_missing_description() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"name":"n"}"#);
        assert!(result.is_err());
    }
}
