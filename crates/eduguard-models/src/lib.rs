//! # EduGuard Models
//!
//! Domain models and DTOs for the EduGuard admin shell.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed record identifiers
//! - [`students`]: Student records and add/edit form DTOs
//! - [`roster`]: Roster state snapshots published to observers
//! - [`auth`]: Login form state
//! - [`dashboard`]: Dashboard stat cards
//! - [`analytics`]: Weekly usage report
//! - [`settings`]: App settings
//!
//! # Example
//!
//! ```ignore
//! use eduguard_models::{CreateStudentDto, Student};
//!
//! let student = Student::new("John Doe", "Grade 10", "STU001", "john.doe@school.com", "+256700000001");
//! println!("{}", student.subtitle());
//! ```

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod ids;
pub mod roster;
pub mod settings;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use analytics::{DailyUsage, UsageReport};
pub use auth::{LoginRequest, LoginState};
pub use dashboard::{DashboardStats, StatCard};
pub use ids::StudentId;
pub use roster::RosterState;
pub use settings::Settings;
pub use students::{CreateStudentDto, Student, UpdateStudentDto};
