//! Match state: the two players, whose turn it is, and the action log.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The Web Worker keeps the WASM module alive, so the match persists
//! across `handle_request` calls for the whole page session (and no longer).
//!
//! Every transition returns a [`Repaint`] naming the parts of the surface it
//! made stale; the route layer renders exactly those.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::config::ScoreboardConfig;
use crate::error::ScoreboardError;
use crate::game::confirm::{self, Confirm};
use crate::game::history;

/// One of the two fixed player slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// 0 or 1, matching the `p0` / `p1` element ids.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];
}

/// Who a scoring action pays: the player at the table or the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "self")]
    Active,
    #[serde(rename = "opponent")]
    Opponent,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Active => "self",
            Target::Opponent => "opponent",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self" => Ok(Target::Active),
            "opponent" => Ok(Target::Opponent),
            other => Err(ScoreboardError::InvalidTarget(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Unclamped; a negative award can take it below zero.
    pub score: i32,
}

impl Player {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: 0,
        }
    }
}

/// One scoring event. Never modified after it is logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub timestamp: DateTime<Local>,
    pub recipient: Seat,
    /// Name at capture time; later renames do not touch it.
    pub recipient_name: String,
    pub label: String,
    pub points: i32,
    pub target: Target,
}

/// Parts of the surface made stale by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    Nothing,
    Names,
    Turn,
    History,
    ScoresAndHistory,
    Everything,
}

impl Repaint {
    pub fn names(self) -> bool {
        matches!(self, Repaint::Names | Repaint::Everything)
    }

    pub fn scores(self) -> bool {
        matches!(self, Repaint::ScoresAndHistory | Repaint::Everything)
    }

    pub fn turn(self) -> bool {
        matches!(self, Repaint::Turn | Repaint::Everything)
    }

    pub fn history(self) -> bool {
        matches!(
            self,
            Repaint::History | Repaint::ScoresAndHistory | Repaint::Everything
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub players: [Player; 2],
    /// Seat currently at the table.
    pub active: Seat,
    /// Oldest first.
    pub history: Vec<ActionEntry>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::with_config(&ScoreboardConfig::default())
    }
}

impl MatchState {
    /// Fresh match: zero scores, seat 0 to play, empty log.
    pub fn with_config(config: &ScoreboardConfig) -> Self {
        Self {
            players: [
                Player::named(&config.default_names[0]),
                Player::named(&config.default_names[1]),
            ],
            active: Seat::First,
            history: Vec::new(),
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Seat that a target resolves to right now.
    pub fn recipient(&self, target: Target) -> Seat {
        match target {
            Target::Active => self.active,
            Target::Opponent => self.active.other(),
        }
    }

    /// Award points and log the action, stamped with the current local time.
    pub fn apply_action(
        &mut self,
        target: Target,
        points: i32,
        label: &str,
    ) -> Result<Repaint, ScoreboardError> {
        self.apply_action_at(target, points, label, Local::now())
    }

    /// Award points and log the action with an explicit timestamp.
    ///
    /// A score that would leave the `i32` range is rejected and nothing
    /// changes; there is no clamp otherwise.
    pub fn apply_action_at(
        &mut self,
        target: Target,
        points: i32,
        label: &str,
        timestamp: DateTime<Local>,
    ) -> Result<Repaint, ScoreboardError> {
        let recipient = self.recipient(target);
        let player = self.player_mut(recipient);
        player.score = player
            .score
            .checked_add(points)
            .ok_or(ScoreboardError::ScoreOverflow(points))?;
        let recipient_name = player.name.clone();

        log::debug!(
            "{} {:+} to {} ({}, {})",
            label,
            points,
            recipient_name,
            target,
            recipient.index()
        );

        self.history.push(ActionEntry {
            timestamp,
            recipient,
            recipient_name,
            label: label.to_string(),
            points,
            target,
        });
        Ok(Repaint::ScoresAndHistory)
    }

    pub fn swap_turn(&mut self) -> Repaint {
        self.active = self.active.other();
        log::debug!("turn -> seat {}", self.active.index());
        Repaint::Turn
    }

    /// Pop the newest entry and take its points back. Turn swaps and renames
    /// are not logged, so they are not undone.
    pub fn undo_last(&mut self) -> Repaint {
        let Some(last) = self.history.pop() else {
            return Repaint::Nothing;
        };
        // Restores a value the score already held, so it stays in range.
        self.player_mut(last.recipient).score -= last.points;
        log::debug!(
            "undo {} {:+} from seat {}",
            last.label,
            last.points,
            last.recipient.index()
        );
        Repaint::ScoresAndHistory
    }

    /// Zero the scores, clear the log and hand the table to seat 0. Names stay.
    pub fn reset_match(&mut self, dialog: &mut impl Confirm) -> Repaint {
        if !dialog.confirm(confirm::RESET_PROMPT) {
            return Repaint::Nothing;
        }
        for player in &mut self.players {
            player.score = 0;
        }
        self.history.clear();
        self.active = Seat::First;
        log::debug!("match reset");
        Repaint::Everything
    }

    /// Discard the log only. Scores keep whatever the discarded entries added.
    pub fn clear_history(&mut self, dialog: &mut impl Confirm) -> Repaint {
        if self.history.is_empty() {
            return Repaint::Nothing;
        }
        if !dialog.confirm(confirm::CLEAR_HISTORY_PROMPT) {
            return Repaint::Nothing;
        }
        log::debug!("history cleared ({} entries)", self.history.len());
        self.history.clear();
        Repaint::History
    }

    /// Rename either player. Blank or whitespace-only input keeps the old name.
    pub fn rename_players(&mut self, name_a: Option<&str>, name_b: Option<&str>) -> Repaint {
        for (seat, input) in Seat::BOTH.into_iter().zip([name_a, name_b]) {
            let trimmed = input.map(str::trim).unwrap_or("");
            if !trimmed.is_empty() {
                self.player_mut(seat).name = trimmed.to_string();
            }
        }
        Repaint::Names
    }

    /// Log as plain text, oldest first: `HH:MM | name | label | +points`.
    pub fn format_history_for_export(&self) -> String {
        history::export_lines(&self.history)
    }
}

thread_local! {
    static STATE: RefCell<MatchState> = RefCell::new(MatchState::default());
}

/// Execute a closure with read access to the match state.
pub fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&MatchState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the match state.
pub fn with_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut MatchState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the entire match state (used by `configure` and tests).
pub fn replace_state(new_state: MatchState) {
    STATE.with(|s| {
        *s.borrow_mut() = new_state;
    });
}

/// Export the match state as JSON.
pub fn export_state_json() -> String {
    with_state(|state| serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string()))
}
