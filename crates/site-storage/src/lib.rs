//! Storage layer for the site content record
//!
//! This crate provides:
//! - SQLite connection setup and schema creation
//! - Atomic get-or-create of the canonical content row
//! - Single-statement partial updates

pub mod db;
pub mod error;
mod schema;

pub use db::Storage;
pub use error::{Result, StorageError};
