const ESCAPE_CODE_POINT: u32 = 0x1B;
const LEGACY_CODE_POINT_PREFIX: &str = "U+";

/// Element a keyboard event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    #[default]
    Dialog,
    AnnotationTextArea,
    ReplyTextArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    pub key: String,
    /// Pre-standard key name some hosts still send instead of `key`.
    pub key_identifier: Option<String>,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub meta_key: bool,
    pub target: KeyTarget,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn on(mut self, target: KeyTarget) -> Self {
        self.target = target;
        self
    }

    fn modifier(&self) -> Option<&'static str> {
        if self.ctrl_key {
            Some("Control")
        } else if self.shift_key {
            Some("Shift")
        } else if self.meta_key {
            Some("Meta")
        } else {
            None
        }
    }
}

fn decode_code_point(key: &str) -> Option<String> {
    let hex = key.strip_prefix(LEGACY_CODE_POINT_PREFIX)?;
    let code_point = u32::from_str_radix(hex, 16).ok()?;
    if code_point == ESCAPE_CODE_POINT {
        return Some("Escape".to_string());
    }
    char::from_u32(code_point).map(String::from)
}

fn normalize_key(key: &str) -> String {
    match key {
        " " => "Space".to_string(),
        "Left" => "ArrowLeft".to_string(),
        "Right" => "ArrowRight".to_string(),
        "Up" => "ArrowUp".to_string(),
        "Down" => "ArrowDown".to_string(),
        _ => decode_code_point(key).unwrap_or_else(|| key.to_string()),
    }
}

/// Canonical `Modifier+Key` name for a keydown, or an empty string when there
/// is nothing to report (no key, or a bare modifier press).
pub fn decode_keydown(event: &KeyEvent) -> String {
    let key = if event.key.is_empty() {
        event.key_identifier.as_deref().unwrap_or_default()
    } else {
        event.key.as_str()
    };
    let modifier = event.modifier();
    if key.is_empty() || Some(key) == modifier {
        return String::new();
    }

    let key = normalize_key(key);
    match modifier {
        Some(modifier) => format!("{modifier}+{key}"),
        None => key,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub has_annotations: bool,
    pub target: KeyTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKeyAction {
    CancelComposition,
    HideDialog,
    ActivateReply,
}

pub fn resolve_dialog_key(decoded: &str, context: KeyContext) -> Option<DialogKeyAction> {
    match (decoded, context.has_annotations, context.target) {
        ("", _, _) => None,
        ("Escape", false, _) => Some(DialogKeyAction::CancelComposition),
        ("Escape", true, _) => Some(DialogKeyAction::HideDialog),
        (_, _, KeyTarget::ReplyTextArea) => Some(DialogKeyAction::ActivateReply),
        _ => None,
    }
}
