//! `/api/match/history*` routes: the action list, clearing it, and the
//! clipboard export.

use crate::config::with_config;
use crate::game::clipboard;
use crate::game::confirm::Answered;
use crate::game::history;
use crate::game::state;
use crate::routes::scoreboard::repaint;
use crate::routes::util::{get_param, parse_form_body};

// ── GET /api/match/history ─────────────────────────────────────────

/// Handle GET /api/match/history
/// Returns `#historyList`, newest first, capped at the configured limit.
pub fn handle_history_get(_query: &str) -> String {
    let limit = with_config(|c| c.history_limit);
    state::with_state(|s| history::render_history_list(&s.history, limit, false))
}

// ── POST /api/match/history/clear ──────────────────────────────────

/// Handle POST /api/match/history/clear
/// Body params: confirmed=yes. Scores and turn are left as they are.
pub fn handle_clear_post(body: &str) -> String {
    let params = parse_form_body(body);
    let mut answer = Answered::from_param(get_param(&params, "confirmed"));
    let r = state::with_state_mut(|s| s.clear_history(&mut answer));
    repaint(r)
}

// ── GET /api/match/history/export ──────────────────────────────────

/// Handle GET /api/match/history/export
/// Returns a <script> that copies the plain-text log to the clipboard.
pub fn handle_export_get(_query: &str) -> String {
    let text = state::with_state(|s| s.format_history_for_export());
    clipboard::render_copy_script(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{replace_config, ScoreboardConfig};
    use crate::game::state::{MatchState, Target};
    use chrono::{Local, TimeZone};

    fn reset_state() {
        replace_config(ScoreboardConfig::default());
        state::replace_state(MatchState::default());
    }

    #[test]
    fn history_get_respects_configured_limit() {
        reset_state();
        replace_config(ScoreboardConfig {
            history_limit: 3,
            ..ScoreboardConfig::default()
        });
        state::with_state_mut(|s| {
            for _ in 0..10 {
                s.apply_action(Target::Active, 1, "แดง").unwrap();
            }
        });
        let html = handle_history_get("");
        assert_eq!(html.matches("<li ").count(), 3);
        reset_state();
    }

    #[test]
    fn clear_post_declined_keeps_history() {
        reset_state();
        state::with_state_mut(|s| s.apply_action(Target::Active, 1, "แดง").unwrap());
        assert!(handle_clear_post("confirmed=no").is_empty());
        state::with_state(|s| assert_eq!(s.history.len(), 1));
        reset_state();
    }

    #[test]
    fn clear_post_accepted_keeps_scores() {
        reset_state();
        state::with_state_mut(|s| s.apply_action(Target::Opponent, 4, "ฟาว").unwrap());
        let html = handle_clear_post("confirmed=yes");
        assert!(html.contains(
            r#"<ul id="historyList" class="history-list" hx-swap-oob="true"></ul>"#
        ));
        assert!(!html.contains("p1Score"));
        state::with_state(|s| {
            assert!(s.history.is_empty());
            assert_eq!(s.players[1].score, 4);
        });
        reset_state();
    }

    #[test]
    fn export_get_copies_oldest_first() {
        reset_state();
        let ts = Local.with_ymd_and_hms(2025, 1, 15, 14, 5, 0).unwrap();
        state::with_state_mut(|s| {
            s.apply_action_at(Target::Active, 1, "แดง", ts).unwrap();
            s.apply_action_at(Target::Active, 7, "ดำ", ts).unwrap();
        });
        let html = handle_export_get("");
        assert!(html.contains(
            r#"writeText("14:05 | ผู้เล่น A | แดง | +1\n14:05 | ผู้เล่น A | ดำ | +7")"#
        ));
        reset_state();
    }
}
