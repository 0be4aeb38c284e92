use crate::geometry::ScreenPoint;
use crate::input::{
    decode_keydown, resolve_dialog_key, resolve_intent, DialogIntent, DialogKeyAction, KeyContext,
    KeyEvent,
};
use crate::notification::DialogNotification;
use crate::state::DialogEvent;

use super::{AnnotationDialog, ComposeBox, ComposeTarget, DialogFrame, ListenerBinding};

impl AnnotationDialog {
    fn compose_is_active(&self) -> bool {
        let target = if self.has_annotations {
            ComposeTarget::Reply
        } else {
            ComposeTarget::Annotation
        };
        self.compose_box(target)
            .is_some_and(|compose| compose.is_active())
    }

    /// Displays the dialog against the host's current measurements.
    pub fn show(&mut self, frame: DialogFrame) {
        if self.destroyed {
            return;
        }
        if self.is_mobile {
            self.show_mobile();
            return;
        }

        if self.attached && !self.hidden && self.compose_is_active() {
            self.set_comments_scroll(frame.comments_scroll);
            self.scroll_to_last_comment();
            return;
        }

        self.hidden = false;
        self.apply(DialogEvent::Show);
        self.position(frame);
        if self.can_annotate {
            self.focus_text_area();
        }
        self.scroll_to_last_comment();
    }

    pub fn hide(&mut self) {
        if self.is_mobile {
            self.hide_mobile();
            return;
        }
        if self.hidden {
            return;
        }
        self.hidden = true;
        if let Some(layout) = self.layout.as_mut() {
            layout.refresh_thread_icon(true);
        }
        self.apply(DialogEvent::Hide);
    }

    /// Moves the dialog into the shared full-screen panel.
    pub fn show_mobile(&mut self) {
        if self.destroyed {
            return;
        }
        self.hidden = false;
        self.attached = true;
        self.listeners = Some(ListenerBinding { hover: false });
        self.mobile_panel.animating = true;
        self.mobile_panel.plain_highlight =
            self.annotation_type.is_highlight() && self.rows.is_empty();
        self.apply(DialogEvent::Show);
        tracing::debug!(
            plain_highlight = self.mobile_panel.plain_highlight,
            "showing mobile annotation dialog"
        );
    }

    pub fn hide_mobile(&mut self) {
        if !self.attached {
            return;
        }
        self.hidden = true;
        self.listeners = None;
        self.mobile_panel = Default::default();
        if !self.has_annotations {
            self.cancel_annotation();
        }
        self.apply(DialogEvent::Hide);
    }

    pub fn pointer_enter(&mut self) {
        if self.destroyed || self.is_mobile {
            return;
        }
        if self.hidden {
            self.hidden = false;
            if let Some(layout) = self.layout.as_mut() {
                layout.refresh_thread_icon(false);
            }
            let pending_text = [&self.annotation_box, &self.reply_box]
                .into_iter()
                .flatten()
                .any(ComposeBox::has_text);
            if pending_text {
                self.bus.emit(DialogNotification::CommentPending);
            }
        }
        self.apply(DialogEvent::PointerEnter);
        self.activate_reply();
    }

    /// Hides the dialog once the pointer is outside its bounds. Threads
    /// without saved comments stay open so the draft is not lost.
    pub fn pointer_leave(&mut self, pointer: ScreenPoint) {
        if self.destroyed || self.is_mobile || !self.has_annotations {
            return;
        }
        let inside = self
            .layout
            .is_some_and(|layout| layout.bounds().contains(pointer));
        if inside {
            return;
        }
        self.apply(DialogEvent::PointerLeave);
        self.hide();
    }

    /// Handles a keydown inside the dialog. The event never propagates to
    /// the page, so the caller should swallow it whatever this returns.
    pub fn keydown(&mut self, event: &KeyEvent) -> Option<DialogKeyAction> {
        if self.destroyed {
            return None;
        }
        let decoded = decode_keydown(event);
        let context = KeyContext {
            has_annotations: self.has_annotations,
            target: event.target,
        };
        let action = resolve_dialog_key(&decoded, context)?;
        match action {
            DialogKeyAction::CancelComposition => {
                self.apply(DialogEvent::Escape);
                self.cancel_annotation();
            }
            DialogKeyAction::HideDialog => self.hide(),
            DialogKeyAction::ActivateReply => self.activate_reply(),
        }
        Some(action)
    }

    /// Routes a click on the element carrying `marker`.
    pub fn click(
        &mut self,
        marker: Option<&str>,
        annotation_id: Option<&str>,
    ) -> Option<DialogIntent> {
        if self.destroyed {
            return None;
        }
        let intent = resolve_intent(marker, annotation_id)?;
        tracing::debug!(?intent, "dialog click");
        match &intent {
            DialogIntent::PostAnnotation => {
                self.post_annotation();
            }
            DialogIntent::CancelAnnotation if self.is_mobile => self.hide_mobile(),
            DialogIntent::CancelAnnotation => self.cancel_annotation(),
            DialogIntent::ActivateReply => self.activate_reply(),
            DialogIntent::CancelReply => self.deactivate_reply(true),
            DialogIntent::PostReply => {
                self.post_reply();
            }
            DialogIntent::ShowDeleteConfirmation(id) => self.show_delete_confirmation(id),
            DialogIntent::CancelDeleteConfirmation(id) => self.hide_delete_confirmation(id),
            DialogIntent::ConfirmDelete(id) => self.delete_annotation(id),
        }
        Some(intent)
    }
}
