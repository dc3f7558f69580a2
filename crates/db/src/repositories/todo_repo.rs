//! Repository for the `todos` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, TodoWithOwner};

const COLUMNS: &str = "id, user_id, title, description";

/// Columns for the todo/owner join. Owner fields keep their bare names so
/// they land in the flattened [`TodoOwner`](crate::models::todo::TodoOwner).
const OWNER_JOIN_COLUMNS: &str = "t.title, t.description, u.first_name, u.last_name, u.email";

/// Provides insert and per-user listing for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// Fails with a foreign-key violation when `user_id` does not exist and a
    /// check violation when `title` is empty.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (user_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List a user's todos in insertion order. Empty if the user has none.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's todos joined with the owner's names and email.
    pub async fn list_with_owner_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TodoWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_JOIN_COLUMNS} \
             FROM todos t \
             JOIN users u ON t.user_id = u.id \
             WHERE t.user_id = $1 \
             ORDER BY t.id"
        );
        sqlx::query_as::<_, TodoWithOwner>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
