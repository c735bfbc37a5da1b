//! # EduGuard
//!
//! The admin shell of EduGuard AI, a school device-monitoring app: login,
//! dashboard, student roster management, usage analytics and settings.
//!
//! All data lives in memory. The roster starts from sample students and
//! nothing is persisted; there is no backend and no real authentication.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Terminal front end (prompt seam, rendering, screen loop)
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login form state and credential check
//! │   ├── students/    # Roster store and student management screen
//! │   ├── dashboard/   # Dashboard stats
//! │   ├── analytics/   # Weekly usage report and export
//! │   └── settings/    # Theme and notification toggles
//! ├── logging.rs        # Tracing setup
//! ├── router.rs         # Screens, drawer and back stack
//! └── state.rs          # Application state passed to every screen
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: The terminal screen
//! - `service.rs`: State and business logic
//! - `model.rs`: Re-exported models (where the module has its own)
//!
//! ## State and observers
//!
//! [`RosterStore`](modules::students::RosterStore),
//! [`LoginService`](modules::auth::LoginService) and
//! [`SettingsStore`](modules::settings::SettingsStore) each keep their state
//! in a `tokio::sync::watch` channel. Mutations go through `&mut self`
//! methods; observers call `subscribe()` and receive the full state after
//! every change, or poll with `snapshot()`.
//!
//! ## Demo login
//!
//! Username `admin`, PIN `123456`. The credentials are compiled in and
//! compared in plaintext; a real deployment needs a proper credential
//! service, which this crate does not contain.
//!
//! ## Environment Variables
//!
//! ```bash
//! LOGIN_DELAY_MS=1000        # simulated login latency
//! SEED_SAMPLE_ROSTER=true    # start with STU001..STU005
//! EXTRA_STUDENTS=0           # generated students after the samples
//! LOG_LEVEL=warn             # console level for the app crates
//! LOG_DIR=storage/logs       # rolling log files
//! LOG_TO_FILE=true
//! ```

pub mod cli;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use eduguard_auth;
pub use eduguard_config;
pub use eduguard_core;
pub use eduguard_models;
pub use eduguard_seeder;
