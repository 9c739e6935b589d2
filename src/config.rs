//! Scoreboard configuration.
//!
//! Loaded once by the page through the `configure` export. Every field has a
//! default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::error::ScoreboardError;

/// Most entries the rendered history list may ever show.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Newest entries shown in the rendered history list.
pub const DEFAULT_HISTORY_LIMIT: usize = MAX_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Cap on rendered history items, 1 to 100. The log itself is never
    /// truncated.
    pub history_limit: usize,
    /// Names for seat 0 and seat 1 at the start of a match.
    pub default_names: [String; 2],
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_names: ["ผู้เล่น A".to_string(), "ผู้เล่น B".to_string()],
        }
    }
}

impl ScoreboardConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ScoreboardError> {
        let config: ScoreboardConfig = serde_json::from_str(json)?;
        match config.history_limit {
            0 => return Err(ScoreboardError::ZeroHistoryLimit),
            n if n > MAX_HISTORY_LIMIT => return Err(ScoreboardError::HistoryLimitTooLarge(n)),
            _ => {}
        }
        Ok(config)
    }
}

thread_local! {
    static CONFIG: RefCell<ScoreboardConfig> = RefCell::new(ScoreboardConfig::default());
}

/// Execute a closure with read access to the active config.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&ScoreboardConfig) -> R,
{
    CONFIG.with(|c| f(&c.borrow()))
}

/// Replace the active config.
pub fn replace_config(config: ScoreboardConfig) {
    CONFIG.with(|c| {
        *c.borrow_mut() = config;
    });
}
