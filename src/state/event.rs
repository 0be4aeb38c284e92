use super::model::DialogState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogEvent {
    Show,
    Hide,
    PointerEnter,
    PointerLeave,
    ComposeFocus,
    ComposeBlur,
    Posted,
    Cancel,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: Option<DialogState>,
    pub event: DialogEvent,
    pub to: DialogState,
}

impl StateTransition {
    pub const fn new(from: Option<DialogState>, event: DialogEvent, to: DialogState) -> Self {
        Self { from, event, to }
    }
}
