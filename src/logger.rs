//! Logging setup.
//!
//! Records are captured by `tui_logger` and rendered by the log pane. Our own
//! crate logs at the requested level while the HTTP stack is held to warnings.

use crate::error::{AppError, AppResult};
use log::LevelFilter;
use tui_logger::{init_logger, set_default_level, set_level_for_target};

/// Targets that only get through with warnings and errors.
///
const NOISY_TARGETS: &[&str] = &["hyper", "reqwest", "mio", "want", "cookie_store", "h2"];

/// Install the logger globally. Fails if a logger is already installed.
///
pub fn init(level: LevelFilter) -> AppResult<()> {
    init_logger(level).map_err(|e| AppError::Logger(e.to_string()))?;
    set_default_level(level);
    for target in NOISY_TARGETS {
        set_level_for_target(target, LevelFilter::Warn);
    }
    Ok(())
}

/// Hand captured records over to the log pane.
///
pub fn collect() {
    tui_logger::move_events();
}
