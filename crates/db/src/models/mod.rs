//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Projection structs for queries that select a subset of columns
//! - Plain create/update DTOs for writes

pub mod todo;
pub mod user;
