//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Safe response structs where the row itself must not leave the server

pub mod attempt;
pub mod badge;
pub mod module;
pub mod phishing;
pub mod progress;
pub mod question;
pub mod session;
pub mod tip;
pub mod user;
