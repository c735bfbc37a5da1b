//! # EduGuard Seeder
//!
//! Roster seed data for development and demos.
//!
//! The roster starts from five fixed sample students (`STU001`..`STU005`) and
//! can be padded with any number of generated students.
//!
//! ## Usage
//!
//! ```ignore
//! use eduguard_seeder::seeder::{seed_roster, SeedConfig};
//!
//! let students = seed_roster(&SeedConfig { sample_roster: true, extra_students: 20 });
//! ```

pub mod seeder;
