/// Interaction mode of one annotation dialog.
///
/// The pending family applies while the first comment is being composed;
/// the others apply once at least one comment is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogState {
    #[default]
    Pending,
    PendingActive,
    Hover,
    Active,
    Inactive,
}

impl DialogState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PendingActive => "pending-active",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

pub const fn is_pending(state: DialogState) -> bool {
    matches!(state, DialogState::Pending | DialogState::PendingActive)
}
