//! CyberGuard core domain logic.
//!
//! Pure, database-free logic shared by the storage and API layers: badge
//! rules, the module recommendation selector, analytics math, quiz point
//! awards, password-strength evaluation, phishing-email grading, and the
//! rotating security tip. Everything here is deterministic and unit-tested
//! without I/O.

pub mod analytics;
pub mod badges;
pub mod error;
pub mod password_strength;
pub mod phishing;
pub mod progress;
pub mod recommendation;
pub mod tips;
pub mod types;
