//! Domain layer for the movies service.
//!
//! Pure logic only: shared types, the error taxonomy, the rule-table
//! validation engine and the JSON Patch interpreter. Nothing in here
//! touches the network or the database.

pub mod error;
pub mod movie;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
