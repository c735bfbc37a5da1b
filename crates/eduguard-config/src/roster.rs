//! Roster seeding configuration.
//!
//! - `SEED_SAMPLE_ROSTER`: Start with the five sample students (default: true)
//! - `EXTRA_STUDENTS`: Number of generated students appended after the samples (default: 0)

use std::env;

use crate::parse_flag;

#[derive(Clone, Debug)]
pub struct RosterConfig {
    pub seed_sample_roster: bool,
    pub extra_students: usize,
}

impl RosterConfig {
    pub fn from_env() -> Self {
        Self {
            seed_sample_roster: env::var("SEED_SAMPLE_ROSTER")
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(true),
            extra_students: env::var("EXTRA_STUDENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }

    /// An empty roster with nothing generated.
    pub fn empty() -> Self {
        Self {
            seed_sample_roster: false,
            extra_students: 0,
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed_sample_roster: true,
            extra_students: 0,
        }
    }
}
