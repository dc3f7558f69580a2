//! User operations.

use sqlx::PgPool;
use todo_core::error::CoreError;
use todo_core::password::hash_password;
use todo_core::types::DbId;
use todo_db::models::user::{CreateUser, CreatedUser, UpdateUserName, User, UserWithTodos};
use todo_db::repositories::{TodoRepo, UserRepo};

use crate::error::AppResult;

/// Create a user, storing an Argon2id hash of `password`.
///
/// Returns only the generated id and the names. A taken email surfaces as a
/// unique violation from the store.
pub async fn insert_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> AppResult<CreatedUser> {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(password)?,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    };
    let created = UserRepo::create(pool, &input).await?;
    tracing::info!(user_id = created.id, "Created user");
    Ok(created)
}

/// Overwrite the names of the user registered under `email`.
pub async fn update_user_by_email(
    pool: &PgPool,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> AppResult<User> {
    let input = UpdateUserName {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    };
    let user = UserRepo::update_name_by_email(pool, email, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("User", email))?;
    tracing::info!(user_id = user.id, "Updated user");
    Ok(user)
}

/// Load a user by id, then their todos, as two separate reads.
pub async fn show_user(pool: &PgPool, user_id: DbId) -> AppResult<UserWithTodos> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", user_id))?;
    let todos = TodoRepo::list_by_user(pool, user.id).await?;
    tracing::info!(user_id, count = todos.len(), "Fetched user with todos");
    Ok(UserWithTodos { user, todos })
}
