//! Command-line surface and dispatch.
//!
//! Each subcommand maps to exactly one data-access operation in [`todos`] or
//! [`users`]. The operation runs against the pool it is handed and its result
//! is rendered for stdout; nothing here holds a connection of its own.

use clap::{Args, Parser, Subcommand};
use sqlx::PgPool;
use todo_core::types::DbId;

use crate::error::AppResult;
use crate::output::{render, Format};

pub mod todos;
pub mod users;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    version,
    about = "Run a single read or write against the users/todos store"
)]
pub struct Cli {
    /// Apply pending schema migrations before running the command.
    #[arg(long, global = true)]
    pub migrate: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every todo owned by a user.
    Todos(UserIdArgs),
    /// List a user's todos with the owner's name and email attached.
    TodosWithUser(UserIdArgs),
    /// Create a todo for an existing user.
    AddTodo(AddTodoArgs),
    /// Create a user. Prints only the new id and names.
    AddUser(AddUserArgs),
    /// Overwrite the names of the user with the given email.
    UpdateUser(UpdateUserArgs),
    /// Show a user and all of their todos.
    ShowUser(UserIdArgs),
}

#[derive(Args, Debug)]
pub struct UserIdArgs {
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub user_id: DbId,
}

#[derive(Args, Debug)]
pub struct AddTodoArgs {
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub user_id: DbId,
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct AddUserArgs {
    #[arg(long)]
    pub email: String,
    /// Plaintext password; only its Argon2id hash is stored.
    #[arg(long, env = "TODOCTL_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
}

#[derive(Args, Debug)]
pub struct UpdateUserArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
}

impl Command {
    /// Run the operation and render its result.
    pub async fn run(&self, pool: &PgPool, format: Format) -> AppResult<String> {
        match self {
            Command::Todos(args) => {
                render(&todos::fetch_todos_by_user(pool, args.user_id).await?, format)
            }
            Command::TodosWithUser(args) => render(
                &todos::fetch_todos_with_user(pool, args.user_id).await?,
                format,
            ),
            Command::AddTodo(args) => render(
                &todos::insert_todo(pool, args.user_id, &args.title, &args.description).await?,
                format,
            ),
            Command::AddUser(args) => render(
                &users::insert_user(
                    pool,
                    &args.email,
                    &args.password,
                    &args.first_name,
                    &args.last_name,
                )
                .await?,
                format,
            ),
            Command::UpdateUser(args) => render(
                &users::update_user_by_email(
                    pool,
                    &args.email,
                    &args.first_name,
                    &args.last_name,
                )
                .await?,
                format,
            ),
            Command::ShowUser(args) => {
                render(&users::show_user(pool, args.user_id).await?, format)
            }
        }
    }
}
