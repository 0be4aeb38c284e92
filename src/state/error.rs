use super::event::DialogEvent;
use super::model::DialogState;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("invalid dialog transition: from {from:?} using event {event:?} (mobile={mobile})")]
    InvalidStateTransition {
        from: DialogState,
        event: DialogEvent,
        mobile: bool,
    },
}
