//! Shared primitives for the todo workspace: key types, the domain error
//! enum, and password hashing.

pub mod error;
pub mod password;
pub mod types;
