//! Structured logging for the Meridian globe tools.
//!
//! Sets up span-based, filterable logging via the `tracing` ecosystem:
//! console output with uptime timestamps and module paths, plus optional
//! JSON file output in debug builds. The log level comes from the
//! configuration system and can be overridden with `RUST_LOG`.

use meridian_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// The filter is resolved in order of precedence: the `RUST_LOG` environment
/// variable, then `config.debug.log_level`, then `"info"`. When
/// `debug_build` is set and `log_dir` is given, a JSON log file is written
/// there as well for post-mortem analysis.
///
/// Call once at startup; a second call panics because the global subscriber
/// is already set.
///
/// # Examples
///
/// ```no_run
/// use meridian_config::Config;
/// use meridian_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, cfg!(debug_assertions), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    // RUST_LOG wins over the configured level.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("meridian.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The `EnvFilter` used when neither `RUST_LOG` nor the config specify one.
#[must_use]
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
