//! Snooker scoreboard, in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Service Worker
//! bridge to call. Uses `matchit` for URL routing, the same router engine
//! that powers Axum. Every response is an HTML fragment for HTMX, except
//! `/api/match/state` which is JSON.
//!
//! The match lives in WASM memory for the page session only.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod routes;

use crate::config::ScoreboardConfig;
use crate::game::state::{self, MatchState};

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method`: HTTP method ("GET" or "POST")
/// * `path`: URL path (e.g., "/api/match/score")
/// * `query`: Query string, including the leading `?` if any
/// * `body`: Request body (form data). Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/match/board", "board").ok();
    router.insert("/api/match/state", "state").ok();
    router.insert("/api/match/score", "score").ok();
    router.insert("/api/match/turn", "turn").ok();
    router.insert("/api/match/undo", "undo").ok();
    router.insert("/api/match/reset", "reset").ok();
    router.insert("/api/match/names", "names").ok();
    router.insert("/api/match/history", "history").ok();
    router.insert("/api/match/history/clear", "history_clear").ok();
    router.insert("/api/match/history/export", "history_export").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("board", "GET") => routes::scoreboard::handle_board_get(query),
            ("state", "GET") => routes::scoreboard::handle_state_get(query),
            ("history", "GET") => routes::history::handle_history_get(query),
            ("history_export", "GET") => routes::history::handle_export_get(query),

            ("score", "POST") => routes::scoreboard::handle_score_post(body),
            ("turn", "POST") => routes::scoreboard::handle_turn_post(body),
            ("undo", "POST") => routes::scoreboard::handle_undo_post(body),
            ("reset", "POST") => routes::scoreboard::handle_reset_post(body),
            ("names", "POST") => routes::scoreboard::handle_names_post(body),
            ("history_clear", "POST") => routes::history::handle_clear_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

/// Load a JSON `ScoreboardConfig` and start a fresh match with it.
///
/// Returns an empty string on success, or an error fragment.
#[wasm_bindgen]
pub fn configure(json: &str) -> String {
    match ScoreboardConfig::from_json(json) {
        Ok(config) => {
            log::info!(
                "scoreboard configured: history_limit={}, names={:?}",
                config.history_limit,
                config.default_names
            );
            state::replace_state(MatchState::with_config(&config));
            config::replace_config(config);
            String::new()
        }
        Err(e) => {
            log::warn!("configure failed: {}", e);
            e.to_html()
        }
    }
}

fn not_found() -> String {
    r#"<span class="text-kip-red">404: route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-kip-red">405: method not allowed</span>"#.to_string()
}
