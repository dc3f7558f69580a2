//! User entity model and DTOs.

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::DbId;

use super::todo::Todo;

/// Full user row from the `users` table.
///
/// `password` holds an Argon2id PHC string. It is skipped when serializing
/// and redacted from `Debug` output.
#[derive(Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Projection returned after inserting a user: id and names only.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CreatedUser {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for overwriting a user's names.
#[derive(Debug)]
pub struct UpdateUserName {
    pub first_name: String,
    pub last_name: String,
}

/// A user together with every todo they own.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithTodos {
    #[serde(flatten)]
    pub user: User,
    pub todos: Vec<Todo>,
}
