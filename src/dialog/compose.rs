/// Which compose box an action or key event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeTarget {
    /// Box for the first comment of a new thread.
    Annotation,
    Reply,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeBox {
    text: String,
    active: bool,
    invalid: bool,
}

impl ComposeBox {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub(super) fn activate(&mut self) {
        self.active = true;
    }

    pub(super) fn mark_invalid(&mut self) {
        self.invalid = true;
    }

    pub(super) fn clear_invalid_if_filled(&mut self) {
        if self.has_text() {
            self.invalid = false;
        }
    }

    /// Empties the box and drops its markers.
    pub(super) fn reset(&mut self) {
        self.text.clear();
        self.active = false;
        self.invalid = false;
    }

    /// Takes the text for posting, or marks the box invalid when it is blank.
    pub(super) fn take_for_post(&mut self) -> Option<String> {
        if !self.has_text() {
            self.mark_invalid();
            return None;
        }
        self.invalid = false;
        Some(std::mem::take(&mut self.text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Posted { text: String },
    /// Blank input; the compose box is now marked invalid.
    Rejected,
    /// The dialog is read-only or no longer live.
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected_and_marked_invalid() {
        let mut compose = ComposeBox::default();
        compose.set_text("   \n");
        assert_eq!(compose.take_for_post(), None);
        assert!(compose.is_invalid());
        assert_eq!(compose.text(), "   \n");
    }

    #[test]
    fn posted_text_is_taken_verbatim_and_box_cleared() {
        let mut compose = ComposeBox::default();
        compose.mark_invalid();
        compose.set_text(" the preview SDK is great! ");
        assert_eq!(
            compose.take_for_post().as_deref(),
            Some(" the preview SDK is great! ")
        );
        assert_eq!(compose.text(), "");
        assert!(!compose.is_invalid());
    }

    #[test]
    fn invalid_marker_clears_only_once_text_is_entered() {
        let mut compose = ComposeBox::default();
        compose.mark_invalid();
        compose.clear_invalid_if_filled();
        assert!(compose.is_invalid());

        compose.set_text("words");
        compose.clear_invalid_if_filled();
        assert!(!compose.is_invalid());
    }
}
