//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod attempt_repo;
pub mod badge_repo;
pub mod module_repo;
pub mod phishing_repo;
pub mod progress_repo;
pub mod question_repo;
pub mod session_repo;
pub mod tip_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use attempt_repo::AttemptRepo;
pub use badge_repo::BadgeRepo;
pub use module_repo::ModuleRepo;
pub use phishing_repo::PhishingRepo;
pub use progress_repo::ProgressRepo;
pub use question_repo::QuestionRepo;
pub use session_repo::SessionRepo;
pub use tip_repo::TipRepo;
pub use user_repo::UserRepo;
