//! Logging setup.
//!
//! Library code only emits through the `log` macros. Binaries and tests that want
//! to see the strategy's `debug!`/`warn!` lines call [`init_logging`], which scopes
//! the filter to this crate unless `DYNAMIC_BET_LOG` says otherwise.

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::io::Write;

/// Environment variable holding an `env_logger` filter directive.
pub const LOG_ENV: &str = "DYNAMIC_BET_LOG";
/// Environment variable controlling colored output (`auto`, `always`, `never`).
pub const LOG_STYLE_ENV: &str = "DYNAMIC_BET_LOG_STYLE";

/// Filter directive limiting output to this crate at `level`.
pub fn crate_filter(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Install a stdout logger for this crate. Returns `false` when a logger was
/// already installed, in which case the existing one stays in place.
pub fn init_logging(level: &str) -> bool {
    let env = Env::default()
        .filter_or(LOG_ENV, crate_filter(level))
        .write_style_or(LOG_STYLE_ENV, "auto");

    let installed = Builder::from_env(env)
        .format(|buf, record| {
            let level = buf.default_styled_level(record.level());
            writeln!(
                buf,
                "{} {:5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                level,
                record.target(),
                record.args()
            )
        })
        .target(Target::Stdout)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("logging initialized with filter {}", crate_filter(level));
    }
    installed
}

/// Capture-friendly logger for unit tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = Builder::new()
        .is_test(true)
        .parse_filters(&crate_filter("debug"))
        .try_init();
}
