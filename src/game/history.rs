//! In-game history: the rendered action list and its plain-text export.
//!
//! The list shows the newest entries first and stops at the configured limit
//! (100 by default). The export is the full log, oldest first.

use crate::config::MAX_HISTORY_LIMIT;
use crate::game::state::ActionEntry;

/// Escape text for safe interpolation into HTML content or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `HH:MM`, 24-hour, local time.
pub fn clock_time(entry: &ActionEntry) -> String {
    entry.timestamp.format("%H:%M").to_string()
}

/// Points behind a literal `+`: `+1`, `+0`. A negative value keeps its own
/// sign after the plus, so a deduction reads `+-2`.
pub fn plus_points(points: i32) -> String {
    format!("+{}", points)
}

/// One export line per entry, oldest first, newline-joined.
pub fn export_lines(history: &[ActionEntry]) -> String {
    history
        .iter()
        .map(|h| {
            format!(
                "{} | {} | {} | {}",
                clock_time(h),
                h.recipient_name,
                h.label,
                plus_points(h.points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The newest `limit` entries, newest first. Never more than
/// `MAX_HISTORY_LIMIT`, whatever `limit` says.
pub fn recent(history: &[ActionEntry], limit: usize) -> impl Iterator<Item = &ActionEntry> {
    let start = history.len().saturating_sub(limit.min(MAX_HISTORY_LIMIT));
    history[start..].iter().rev()
}

/// Render the `<li>` items of `#historyList`.
pub fn render_history_items(history: &[ActionEntry], limit: usize) -> String {
    let mut html = String::with_capacity(128 * history.len().min(MAX_HISTORY_LIMIT));
    for h in recent(history, limit) {
        html.push_str(r#"<li class="history-item">"#);
        html.push_str(&format!(
            r#"<span class="time" aria-hidden="true">{}</span>"#,
            clock_time(h)
        ));
        html.push_str(&format!(
            r#"<span class="who">{}</span>"#,
            escape_html(&h.recipient_name)
        ));
        html.push_str(&format!(
            r#"<span class="act">ได้ {}</span>"#,
            escape_html(&h.label)
        ));
        html.push_str(&format!(
            r#"<span class="pts">{}</span>"#,
            plus_points(h.points)
        ));
        html.push_str("</li>");
    }
    html
}

/// Render the whole `#historyList` element. With `oob` set it carries
/// `hx-swap-oob` so it can ride along with another response.
pub fn render_history_list(history: &[ActionEntry], limit: usize, oob: bool) -> String {
    let oob_attr = if oob { r#" hx-swap-oob="true""# } else { "" };
    format!(
        r#"<ul id="historyList" class="history-list"{}>{}</ul>"#,
        oob_attr,
        render_history_items(history, limit)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{MatchState, Target};
    use chrono::{Local, TimeZone};

    fn match_with(count: usize) -> MatchState {
        let mut state = MatchState::default();
        let ts = Local.with_ymd_and_hms(2025, 1, 15, 20, 0, 0).unwrap();
        for i in 0..count {
            state.apply_action_at(Target::Active, 1, &format!("shot-{}", i), ts).unwrap();
        }
        state
    }

    #[test]
    fn escape_html_covers_markup_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("ผู้เล่น A"), "ผู้เล่น A");
    }

    #[test]
    fn plus_points_format() {
        assert_eq!(plus_points(1), "+1");
        assert_eq!(plus_points(0), "+0");
        assert_eq!(plus_points(-2), "+-2");
    }

    #[test]
    fn negative_points_keep_plus_prefix() {
        let mut state = MatchState::default();
        let ts = Local.with_ymd_and_hms(2025, 1, 15, 14, 5, 0).unwrap();
        state.apply_action_at(Target::Active, -2, "แก้", ts).unwrap();
        assert_eq!(export_lines(&state.history), "14:05 | ผู้เล่น A | แก้ | +-2");
        let html = render_history_items(&state.history, 100);
        assert!(html.contains(r#"<span class="pts">+-2</span>"#));
    }

    #[test]
    fn export_single_line() {
        let mut state = MatchState::default();
        let ts = Local.with_ymd_and_hms(2025, 1, 15, 14, 5, 0).unwrap();
        state.apply_action_at(Target::Active, 1, "แดง", ts).unwrap();
        assert_eq!(export_lines(&state.history), "14:05 | ผู้เล่น A | แดง | +1");
    }

    #[test]
    fn export_empty_history_is_empty() {
        assert_eq!(export_lines(&[]), "");
    }

    #[test]
    fn rendered_list_is_newest_first() {
        let state = match_with(3);
        let html = render_history_items(&state.history, 100);
        let p2 = html.find("shot-2").unwrap();
        let p1 = html.find("shot-1").unwrap();
        let p0 = html.find("shot-0").unwrap();
        assert!(p2 < p1 && p1 < p0);
        assert!(html.contains("<span class=\"time\" aria-hidden=\"true\">20:00</span>"));
        assert!(html.contains("ได้ shot-0"));
    }

    #[test]
    fn rendered_list_caps_at_limit() {
        let state = match_with(150);
        let html = render_history_items(&state.history, 100);
        assert_eq!(html.matches("<li ").count(), 100);
        assert!(html.contains(">ได้ shot-149<"));
        assert!(html.contains(">ได้ shot-50<"));
        assert!(!html.contains(">ได้ shot-49<"));
        // full log is untouched
        assert_eq!(state.history.len(), 150);
    }

    #[test]
    fn rendered_list_never_exceeds_hundred() {
        let state = match_with(150);
        let html = render_history_items(&state.history, 500);
        assert_eq!(html.matches("<li ").count(), 100);
        assert!(html.contains(">ได้ shot-149<"));
        assert!(!html.contains(">ได้ shot-49<"));
    }

    #[test]
    fn rendered_list_escapes_user_text() {
        let mut state = MatchState::default();
        state.rename_players(Some("<script>alert(1)</script>"), None);
        state.apply_action(Target::Active, 1, "<img src=x>").unwrap();
        let html = render_history_items(&state.history, 100);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn history_list_oob_attribute() {
        let state = match_with(1);
        let oob = render_history_list(&state.history, 100, true);
        assert!(oob.contains(r#"hx-swap-oob="true""#));
        let inline = render_history_list(&state.history, 100, false);
        assert!(!inline.contains("hx-swap-oob"));
    }
}
