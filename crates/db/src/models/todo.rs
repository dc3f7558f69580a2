//! Todo entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::DbId;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
}

/// DTO for creating a new todo.
#[derive(Debug)]
pub struct CreateTodo {
    pub user_id: DbId,
    pub title: String,
    pub description: String,
}

/// The owning user's public fields, joined onto a todo.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TodoOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Todo title and description with the owner's projection nested under `user`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TodoWithOwner {
    pub title: String,
    pub description: String,
    #[sqlx(flatten)]
    pub user: TodoOwner,
}
