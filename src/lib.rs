//! Contact intake service.
//!
//! Accepts contact records over HTTP, validates every phone number against
//! the Australian numbering plan, and persists accepted records to a
//! relational `contacts` table.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
