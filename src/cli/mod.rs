//! Terminal front end.
//!
//! - [`prompt`]: The input seam between screens and the terminal
//! - [`render`]: Tables and charts for screen content
//! - [`shell`]: The screen loop driven by the navigator

pub mod prompt;
pub mod render;
pub mod shell;

pub use prompt::{DialoguerPrompt, Flow, Prompt};
pub use shell::run_shell;
