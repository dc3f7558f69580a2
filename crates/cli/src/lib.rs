//! `todoctl` library.
//!
//! Exposes configuration, the error taxonomy, and one async function per
//! data-access operation so integration tests and the binary entrypoint can
//! both reach them.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod store;
