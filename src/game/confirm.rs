//! Yes/no confirmation seam.
//!
//! Reset and clear-history ask before discarding anything. In the browser the
//! dialog runs client-side (`confirm()` in the button's onclick) and the answer
//! arrives with the request as `confirmed=yes`.

/// Prompt shown before a new match wipes scores and history.
pub const RESET_PROMPT: &str = "เริ่มเกมใหม่? คะแนนและประวัติในเกมนี้จะถูกล้าง";

/// Prompt shown before the in-game history is discarded.
pub const CLEAR_HISTORY_PROMPT: &str = "ล้างเฉพาะประวัติระหว่างเกม?";

/// Something that can answer a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// An answer the user already gave in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered(pub bool);

impl Answered {
    /// Read the answer from a `confirmed` form value. Only `yes` and `true` count.
    pub fn from_param(value: Option<&str>) -> Self {
        Self(matches!(value, Some("yes") | Some("true")))
    }
}

impl Confirm for Answered {
    fn confirm(&mut self, message: &str) -> bool {
        log::debug!("confirm {:?} -> {}", message, self.0);
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answered_from_param() {
        assert_eq!(Answered::from_param(Some("yes")), Answered(true));
        assert_eq!(Answered::from_param(Some("true")), Answered(true));
        assert_eq!(Answered::from_param(Some("no")), Answered(false));
        assert_eq!(Answered::from_param(Some("")), Answered(false));
        assert_eq!(Answered::from_param(None), Answered(false));
    }

    #[test]
    fn closure_sees_the_prompt() {
        let mut seen = String::new();
        let mut ask = |msg: &str| {
            seen = msg.to_string();
            false
        };
        assert!(!ask.confirm(RESET_PROMPT));
        assert_eq!(seen, RESET_PROMPT);
    }
}
