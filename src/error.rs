//! Request-boundary errors.
//!
//! These cover malformed requests, scores pushed out of `i32` range and bad
//! configuration. Each renders as a red fragment for HTMX to swap in.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreboardError {
    #[error("Missing {0} parameter")]
    MissingParam(&'static str),

    #[error("Invalid points value: {0}")]
    InvalidPoints(String),

    #[error("Awarding {0} points would take the score out of range")]
    ScoreOverflow(i32),

    #[error("Invalid target: {0} (expected self or opponent)")]
    InvalidTarget(String),

    #[error("Invalid scoreboard config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("History limit {0} is above the maximum of 100")]
    HistoryLimitTooLarge(usize),
}

impl ScoreboardError {
    /// Render the error as an HTML fragment.
    pub fn to_html(&self) -> String {
        let message = crate::game::history::escape_html(&self.to_string());
        format!(r#"<span class="text-kip-red">{}</span>"#, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_param_names_the_field() {
        let err = ScoreboardError::MissingParam("target");
        assert_eq!(err.to_string(), "Missing target parameter");
    }

    #[test]
    fn html_is_escaped() {
        let err = ScoreboardError::InvalidTarget("<b>".to_string());
        let html = err.to_html();
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.starts_with(r#"<span class="text-kip-red">"#));
    }

    #[test]
    fn config_error_wraps_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ScoreboardError = json_err.into();
        assert!(err.to_string().starts_with("Invalid scoreboard config"));
    }
}
