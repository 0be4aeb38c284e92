use super::error::{StateError, StateResult};
use super::{event::StateTransition, DialogEvent, DialogState};

#[derive(Debug)]
pub struct StateMachine {
    state: DialogState,
    mobile: bool,
    transition_history: Vec<StateTransition>,
}

impl StateMachine {
    pub fn new(has_annotations: bool, mobile: bool) -> Self {
        let state = if has_annotations {
            DialogState::Inactive
        } else {
            DialogState::Pending
        };
        Self {
            state,
            mobile,
            transition_history: Vec::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn can_transition(&self, event: DialogEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: DialogEvent) -> Option<DialogState> {
        use DialogEvent::*;
        use DialogState::*;

        if self.mobile && matches!(event, PointerEnter | PointerLeave) {
            return None;
        }

        match (self.state, event) {
            (Pending, Show | PointerEnter | ComposeBlur | Escape | Cancel | Hide) => Some(Pending),
            (Pending, ComposeFocus) => Some(PendingActive),
            (PendingActive, Show | PointerEnter | ComposeFocus) => Some(PendingActive),
            (PendingActive, ComposeBlur | Escape | Cancel | Hide) => Some(Pending),
            (Pending | PendingActive, Posted) => Some(Active),

            (Inactive, Show | PointerEnter) => Some(Hover),
            (Hover, Show | PointerEnter | ComposeBlur) => Some(Hover),
            (Active, Show | PointerEnter | ComposeFocus) => Some(Active),
            (Active, ComposeBlur) => Some(Hover),
            (Hover | Inactive, ComposeFocus) => Some(Active),
            (Hover | Active | Inactive, Posted) => Some(Active),
            (Hover | Active, PointerLeave) => Some(Inactive),
            (Hover | Active | Inactive, Hide | Escape) => Some(Inactive),
            (Inactive, ComposeBlur) => Some(Inactive),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: DialogEvent) -> StateResult<DialogState> {
        tracing::debug!(from = ?self.state, event = ?event, "request dialog transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(
                from = ?from,
                event = ?event,
                mobile = self.mobile,
                "invalid dialog transition requested"
            );
            StateError::InvalidStateTransition {
                from,
                event,
                mobile: self.mobile,
            }
        })?;

        let record = StateTransition::new(Some(self.state), event, next);
        self.state = next;
        self.transition_history.push(record);

        Ok(self.state)
    }
}

#[cfg(test)]
impl StateMachine {
    pub(crate) fn history(&self) -> &[StateTransition] {
        &self.transition_history
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl std::fmt::Display for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DialogState::{:?}", self.state)
    }
}
