//! `/api/match/*` routes: scoring, turn, undo, reset and names.
//!
//! Mutating routes answer with out-of-band fragments for whatever the
//! transition made stale (see `board::render_repaint`).

use crate::config::with_config;
use crate::error::ScoreboardError;
use crate::game::board;
use crate::game::confirm::Answered;
use crate::game::state::{self, MatchState, Repaint, Target};
use crate::routes::util::{get_param, parse_form_body, require_param};

/// Render the fragments for a transition against the current state.
pub(crate) fn repaint(stale: Repaint) -> String {
    let limit = with_config(|c| c.history_limit);
    state::with_state(|s| board::render_repaint(s, limit, stale))
}

fn respond(result: Result<String, ScoreboardError>) -> String {
    result.unwrap_or_else(|e| {
        log::warn!("rejected request: {}", e);
        e.to_html()
    })
}

// ── GET /api/match/board ───────────────────────────────────────────

/// Handle GET /api/match/board
/// Returns the whole scoreboard for the initial page load.
pub fn handle_board_get(_query: &str) -> String {
    let limit = with_config(|c| c.history_limit);
    state::with_state(|s| board::render_page(s, limit))
}

// ── GET /api/match/state ───────────────────────────────────────────

/// Handle GET /api/match/state
/// Returns the match state as JSON.
pub fn handle_state_get(_query: &str) -> String {
    state::export_state_json()
}

// ── POST /api/match/score ──────────────────────────────────────────

/// Parsed body of a score request.
#[derive(Debug, PartialEq, Eq)]
struct ScoreRequest {
    target: Target,
    points: i32,
    label: String,
}

impl ScoreRequest {
    /// A missing label falls back to `+{points}` for the shooter and `ฟาว`
    /// for the opponent, matching what an unlabelled button would show.
    fn parse(body: &str) -> Result<Self, ScoreboardError> {
        let params = parse_form_body(body);
        let target: Target = require_param(&params, "target")?.parse()?;
        let raw_points = require_param(&params, "points")?;
        let points: i32 = raw_points
            .trim()
            .parse()
            .map_err(|_| ScoreboardError::InvalidPoints(raw_points.to_string()))?;
        let label = match get_param(&params, "label").map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => match target {
                Target::Active => format!("+{}", points),
                Target::Opponent => "ฟาว".to_string(),
            },
        };
        Ok(Self {
            target,
            points,
            label,
        })
    }
}

/// Handle POST /api/match/score
/// Body params: target=self|opponent&points={n}&label={text}
pub fn handle_score_post(body: &str) -> String {
    respond(ScoreRequest::parse(body).and_then(|req| {
        let r = state::with_state_mut(|s| s.apply_action(req.target, req.points, &req.label))?;
        Ok(repaint(r))
    }))
}

// ── POST /api/match/turn ───────────────────────────────────────────

/// Handle POST /api/match/turn
pub fn handle_turn_post(_body: &str) -> String {
    let r = state::with_state_mut(MatchState::swap_turn);
    repaint(r)
}

// ── POST /api/match/undo ───────────────────────────────────────────

/// Handle POST /api/match/undo
/// Empty history answers with an empty body.
pub fn handle_undo_post(_body: &str) -> String {
    let r = state::with_state_mut(MatchState::undo_last);
    repaint(r)
}

// ── POST /api/match/reset ──────────────────────────────────────────

/// Handle POST /api/match/reset
/// Body params: confirmed=yes (anything else is a declined dialog)
pub fn handle_reset_post(body: &str) -> String {
    let params = parse_form_body(body);
    let mut answer = Answered::from_param(get_param(&params, "confirmed"));
    let r = state::with_state_mut(|s| s.reset_match(&mut answer));
    repaint(r)
}

// ── POST /api/match/names ──────────────────────────────────────────

/// Handle POST /api/match/names
/// Body params: nameA={text}&nameB={text}; blank values keep the old name.
pub fn handle_names_post(body: &str) -> String {
    let params = parse_form_body(body);
    let name_a = get_param(&params, "nameA");
    let name_b = get_param(&params, "nameB");
    let r = state::with_state_mut(|s| s.rename_players(name_a, name_b));
    repaint(r)
}
