//! HTTP handler modules, one per resource.

pub mod analytics;
pub mod auth;
pub mod badges;
pub mod modules;
pub mod phishing;
pub mod progress;
pub mod questions;
pub mod quiz_attempts;
pub mod recommendations;
pub mod tips;
pub mod tools;
