//! Todo operations.

use sqlx::PgPool;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, Todo, TodoWithOwner};
use todo_db::repositories::TodoRepo;

use crate::error::AppResult;

/// Every todo owned by `user_id`. An unknown user yields an empty list.
pub async fn fetch_todos_by_user(pool: &PgPool, user_id: DbId) -> AppResult<Vec<Todo>> {
    let todos = TodoRepo::list_by_user(pool, user_id).await?;
    tracing::info!(user_id, count = todos.len(), "Fetched todos");
    Ok(todos)
}

/// Title and description of each of the user's todos, with the owner's
/// first name, last name and email nested alongside.
pub async fn fetch_todos_with_user(
    pool: &PgPool,
    user_id: DbId,
) -> AppResult<Vec<TodoWithOwner>> {
    let rows = TodoRepo::list_with_owner_by_user(pool, user_id).await?;
    tracing::info!(user_id, count = rows.len(), "Fetched todos with owner");
    Ok(rows)
}

pub async fn insert_todo(
    pool: &PgPool,
    user_id: DbId,
    title: &str,
    description: &str,
) -> AppResult<Todo> {
    let input = CreateTodo {
        user_id,
        title: title.to_string(),
        description: description.to_string(),
    };
    let todo = TodoRepo::create(pool, &input).await?;
    tracing::info!(todo_id = todo.id, user_id, "Created todo");
    Ok(todo)
}
