//! Repository for the `users` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::user::{CreateUser, CreatedUser, UpdateUserName, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password, first_name, last_name";

/// Provides insert, lookup and rename operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning only the id and names.
    ///
    /// A duplicate email fails with a unique violation on `uq_users_email`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<CreatedUser, sqlx::Error> {
        sqlx::query_as::<_, CreatedUser>(
            "INSERT INTO users (email, password, first_name, last_name)
             VALUES ($1, $2, $3, $4)
             RETURNING id, first_name, last_name",
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .fetch_one(pool)
        .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the first and last name of the user with the given email.
    ///
    /// Returns `None` if no row with that email exists.
    pub async fn update_name_by_email(
        pool: &PgPool,
        email: &str,
        input: &UpdateUserName,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = $2,
                last_name = $3
             WHERE email = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_optional(pool)
            .await
    }
}
