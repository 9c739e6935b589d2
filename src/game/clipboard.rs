//! Clipboard export of the in-game history.
//!
//! The copy itself happens in the browser: the export route returns a
//! `<script>` that hands the text to `navigator.clipboard.writeText` and
//! alerts once with the outcome. Nothing here touches match state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied,
    Refused,
}

impl CopyOutcome {
    /// One-shot notice shown to the user.
    pub fn notice(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "คัดลอกประวัติแล้ว",
            CopyOutcome::Refused => "เบราว์เซอร์ปฏิเสธการคัดลอก",
        }
    }
}

/// JS literal for `text`. `</` is split so the text cannot close the script tag.
fn script_literal(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Script that copies `text` and alerts the outcome.
pub fn render_copy_script(text: &str) -> String {
    format!(
        r#"<script>
(function() {{
  navigator.clipboard.writeText({text}).then(function() {{
    alert({ok});
  }}).catch(function() {{
    alert({err});
  }});
}})();
</script>"#,
        text = script_literal(text),
        ok = script_literal(CopyOutcome::Copied.notice()),
        err = script_literal(CopyOutcome::Refused.notice()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_text_as_json_string() {
        let html = render_copy_script("14:05 | ผู้เล่น A | แดง | +1\n14:06 | ผู้เล่น A | ดำ | +7");
        assert!(html.contains(
            r#"writeText("14:05 | ผู้เล่น A | แดง | +1\n14:06 | ผู้เล่น A | ดำ | +7")"#
        ));
        assert!(html.contains("คัดลอกประวัติแล้ว"));
        assert!(html.contains("เบราว์เซอร์ปฏิเสธการคัดลอก"));
    }

    #[test]
    fn script_cannot_be_closed_by_text() {
        let html = render_copy_script(r#"</script><script>alert("x")"#);
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#"\"x\""#));
    }

    #[test]
    fn notices_differ() {
        assert_ne!(CopyOutcome::Copied.notice(), CopyOutcome::Refused.notice());
    }
}
