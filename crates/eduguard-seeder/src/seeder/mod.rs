//! Roster seeding.

mod models;
mod students;

pub use models::SeedConfig;
pub use students::{generate_students, sample_students};

use eduguard_models::Student;
use std::time::Instant;
use tracing::info;

/// Build the initial roster: samples first (when enabled), then generated
/// students numbered after them.
pub fn seed_roster(config: &SeedConfig) -> Vec<Student> {
    let start_time = Instant::now();

    let mut students = if config.sample_roster {
        sample_students()
    } else {
        Vec::new()
    };
    let next_number = students.len() + 1;
    students.extend(generate_students(config.extra_students, next_number));

    info!(
        sample = config.sample_roster,
        generated = config.extra_students,
        total = students.len(),
        elapsed_us = %start_time.elapsed().as_micros(),
        "Seeded roster"
    );

    students
}
