//! Scoreboard rendering: names, scores, turn badges and the button panels.
//!
//! Buttons fire `htmx.ajax` with `swap: 'none'`; the responses are made of
//! out-of-band fragments (`hx-swap-oob`) that replace the stale elements by id.
//! Confirmation dialogs run in the browser before the request is sent.

use crate::game::confirm;
use crate::game::history::{escape_html, render_history_list};
use crate::game::state::{MatchState, Repaint, Seat, Target};

/// A scoring button: label, points, and who gets them.
pub struct ScoreButton {
    pub label: &'static str,
    pub points: i32,
    pub color: &'static str,
}

/// Potted balls, paid to the player at the table.
pub const BALL_BUTTONS: [ScoreButton; 7] = [
    ScoreButton {
        label: "แดง",
        points: 1,
        color: "bg-red-600 text-white",
    },
    ScoreButton {
        label: "เหลือง",
        points: 2,
        color: "bg-yellow-400 text-black",
    },
    ScoreButton {
        label: "เขียว",
        points: 3,
        color: "bg-green-600 text-white",
    },
    ScoreButton {
        label: "น้ำตาล",
        points: 4,
        color: "bg-amber-800 text-white",
    },
    ScoreButton {
        label: "น้ำเงิน",
        points: 5,
        color: "bg-blue-600 text-white",
    },
    ScoreButton {
        label: "ชมพู",
        points: 6,
        color: "bg-pink-400 text-black",
    },
    ScoreButton {
        label: "ดำ",
        points: 7,
        color: "bg-black text-white",
    },
];

/// Foul and snooker correction, paid to the other player.
pub const FOUL_BUTTONS: [ScoreButton; 2] = [
    ScoreButton {
        label: "ฟาว",
        points: 4,
        color: "bg-gray-200 text-black",
    },
    ScoreButton {
        label: "แก้สนุ๊ก",
        points: 2,
        color: "bg-gray-200 text-black",
    },
];

/// A JS string literal, safe inside a double-quoted HTML attribute.
fn js_literal(text: &str) -> String {
    let json = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    escape_html(&json)
}

fn oob_attr(oob: bool) -> &'static str {
    if oob { r#" hx-swap-oob="true""# } else { "" }
}

fn element_id(prefix: &str, seat: Seat) -> String {
    format!("p{}{}", seat.index(), prefix)
}

/// `#p0Name` / `#p1Name`.
pub fn render_names(state: &MatchState, oob: bool) -> String {
    let mut html = String::with_capacity(256);
    for seat in Seat::BOTH {
        html.push_str(&format!(
            r#"<span id="{}" class="player-name"{}>{}</span>"#,
            element_id("Name", seat),
            oob_attr(oob),
            escape_html(&state.player(seat).name)
        ));
    }
    html
}

/// `#p0Score` / `#p1Score`.
pub fn render_scores(state: &MatchState, oob: bool) -> String {
    let mut html = String::with_capacity(256);
    for seat in Seat::BOTH {
        html.push_str(&format!(
            r#"<span id="{}" class="player-score"{}>{}</span>"#,
            element_id("Score", seat),
            oob_attr(oob),
            state.player(seat).score
        ));
    }
    html
}

/// `#p0Badge` / `#p1Badge`. Only the active seat's badge is visible.
pub fn render_turn_badges(state: &MatchState, oob: bool) -> String {
    let mut html = String::with_capacity(256);
    for seat in Seat::BOTH {
        let hidden = if seat == state.active { "" } else { " hidden" };
        html.push_str(&format!(
            r#"<span id="{}" class="turn-badge"{}{}>กำลังแทง</span>"#,
            element_id("Badge", seat),
            oob_attr(oob),
            hidden
        ));
    }
    html
}

/// Out-of-band fragments for everything a transition made stale.
pub fn render_repaint(state: &MatchState, limit: usize, repaint: Repaint) -> String {
    let mut html = String::new();
    if repaint.names() {
        html.push_str(&render_names(state, true));
    }
    if repaint.scores() {
        html.push_str(&render_scores(state, true));
    }
    if repaint.turn() {
        html.push_str(&render_turn_badges(state, true));
    }
    if repaint.history() {
        html.push_str(&render_history_list(&state.history, limit, true));
        html.push_str(&render_history_actions(state, true));
    }
    html
}

fn render_score_button(button: &ScoreButton, target: Target) -> String {
    format!(
        r#"<button class="btn {} font-bold py-2 px-3 rounded" data-points="{}" data-label="{}" onclick="htmx.ajax('POST', '/api/match/score', {{values: {{target: '{}', points: '{}', label: {}}}, swap: 'none'}})">{} +{}</button>"#,
        button.color,
        button.points,
        escape_html(button.label),
        target.as_str(),
        button.points,
        js_literal(button.label),
        button.label,
        button.points
    )
}

/// Ball buttons (active player) and foul buttons (opponent).
pub fn render_controls() -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="grid-balls grid grid-cols-4 gap-2">"#);
    for button in &BALL_BUTTONS {
        html.push_str(&render_score_button(button, Target::Active));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="grid-foul grid grid-cols-2 gap-2 mt-2">"#);
    for button in &FOUL_BUTTONS {
        html.push_str(&render_score_button(button, Target::Opponent));
    }
    html.push_str("</div>");
    html
}

/// Swap turn, undo and new match.
pub fn render_match_actions() -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="match-actions flex gap-2 mt-2">"#);
    html.push_str(
        r#"<button id="swapTurn" class="btn py-2 px-3 rounded" onclick="htmx.ajax('POST', '/api/match/turn', {swap: 'none'})">สลับตา</button>"#,
    );
    html.push_str(
        r#"<button id="undo" class="btn py-2 px-3 rounded" onclick="htmx.ajax('POST', '/api/match/undo', {swap: 'none'})">ย้อนกลับ</button>"#,
    );
    html.push_str(&format!(
        r#"<button id="reset" class="btn py-2 px-3 rounded" onclick="if (confirm({})) htmx.ajax('POST', '/api/match/reset', {{values: {{confirmed: 'yes'}}, swap: 'none'}})">เริ่มเกมใหม่</button>"#,
        js_literal(confirm::RESET_PROMPT)
    ));
    html.push_str("</div>");
    html
}

/// Copy and clear buttons under the history list. The clear button only asks
/// for confirmation when there is something to clear.
pub fn render_history_actions(state: &MatchState, oob: bool) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&format!(
        r#"<div id="historyActions" class="flex gap-2 mt-2"{}>"#,
        oob_attr(oob)
    ));
    html.push_str(
        r#"<button id="copyHistory" class="btn py-1 px-3 rounded" onclick="htmx.ajax('GET', '/api/match/history/export', {target: '#clipboard-sink', swap: 'innerHTML'})">คัดลอกประวัติ</button>"#,
    );
    if state.history.is_empty() {
        html.push_str(
            r#"<button id="clearHistory" class="btn py-1 px-3 rounded opacity-60" disabled>ล้างประวัติ</button>"#,
        );
    } else {
        html.push_str(&format!(
            r#"<button id="clearHistory" class="btn py-1 px-3 rounded" onclick="if (confirm({})) htmx.ajax('POST', '/api/match/history/clear', {{values: {{confirmed: 'yes'}}, swap: 'none'}})">ล้างประวัติ</button>"#,
            js_literal(confirm::CLEAR_HISTORY_PROMPT)
        ));
    }
    html.push_str("</div>");
    html
}

/// Name inputs and the save button. Placeholders are fixed hints so the form
/// never needs repainting after a rename.
pub fn render_name_form() -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="name-form flex gap-2">"#);
    for (id, hint) in [("nameA", "ชื่อผู้เล่น A"), ("nameB", "ชื่อผู้เล่น B")] {
        html.push_str(&format!(
            r#"<input type="text" id="{}" maxlength="40" placeholder="{}" class="border rounded px-2 py-1 text-sm">"#,
            id, hint
        ));
    }
    html.push_str(
        r#"<button id="saveNames" class="btn py-1 px-3 rounded" onclick="htmx.ajax('POST', '/api/match/names', {values: {nameA: document.getElementById('nameA').value, nameB: document.getElementById('nameB').value}, swap: 'none'})">บันทึกชื่อ</button>"#,
    );
    html.push_str("</div>");
    html
}

fn render_player_panel(state: &MatchState, seat: Seat) -> String {
    let player = state.player(seat);
    let hidden = if seat == state.active { "" } else { " hidden" };
    format!(
        r#"<div class="player-panel"><span id="{}" class="player-name">{}</span><span id="{}" class="turn-badge"{}>กำลังแทง</span><span id="{}" class="player-score">{}</span></div>"#,
        element_id("Name", seat),
        escape_html(&player.name),
        element_id("Badge", seat),
        hidden,
        element_id("Score", seat),
        player.score
    )
}

/// The whole scoreboard, for the initial load.
pub fn render_page(state: &MatchState, limit: usize) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div id="scoreboard" class="p-3">"#);
    html.push_str(&render_name_form());
    html.push_str(r#"<div class="players grid grid-cols-2 gap-4 my-3">"#);
    for seat in Seat::BOTH {
        html.push_str(&render_player_panel(state, seat));
    }
    html.push_str("</div>");
    html.push_str(&render_controls());
    html.push_str(&render_match_actions());
    html.push_str(r#"<div class="history mt-3">"#);
    html.push_str(&render_history_list(&state.history, limit, false));
    html.push_str(&render_history_actions(state, false));
    html.push_str(r#"<div id="clipboard-sink" hidden></div>"#);
    html.push_str("</div>");
    html.push_str("</div>");
    html
}
