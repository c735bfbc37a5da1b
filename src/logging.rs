//! Tracing setup.
//!
//! Console output goes to stderr so it never mixes with the shell's prompts.
//! When file logging is enabled, errors are also written to a plain daily log
//! and everything at info and above to a JSON daily log.

use anyhow::Context;
use eduguard_config::LoggingConfig;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const APP_TARGETS: [&str; 6] = [
    "eduguard",
    "eduguard_core",
    "eduguard_config",
    "eduguard_models",
    "eduguard_auth",
    "eduguard_seeder",
];

/// Default directives: `level` for our crates, nothing from dependencies
/// below warn.
fn default_directives(level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(APP_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}

pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter);

    let (file_layer, json_layer) = if config.log_to_file {
        std::fs::create_dir_all(&config.log_dir).with_context(|| {
            format!(
                "Failed to create logs directory {}",
                config.log_dir.display()
            )
        })?;

        // Plain file for errors
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "eduguard.log");
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(EnvFilter::new("error"));

        // JSON file for structured logs
        let json_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "eduguard.json");
        let json_layer = fmt::layer()
            .json()
            .with_writer(json_appender)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new(default_directives("info")));

        (Some(file_layer), Some(json_layer))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(
        level = %config.level,
        log_dir = %config.log_dir.display(),
        log_to_file = config.log_to_file,
        "Tracing initialized"
    );
    if let Some(value) = &config.rejected_log_to_file {
        warn!(value = %value, "Unrecognised LOG_TO_FILE value, keeping default");
    }
    Ok(())
}
