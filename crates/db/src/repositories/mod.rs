//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod todo_repo;
pub mod user_repo;

pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
