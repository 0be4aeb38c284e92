//! The annotation dialog record: comments, compose boxes, layout and
//! interaction state for one thread.

mod compose;
mod interaction;
mod layout;

use std::sync::mpsc;

use crate::config::PlacementConfig;
use crate::error::DialogResult;
use crate::geometry::ScrollMetrics;
use crate::location::{Anchor, AnnotationType, Location, ValidationFailure};
use crate::notification::{DialogNotification, NotificationBus};
use crate::state::{DialogEvent, DialogState, StateError, StateMachine};
use crate::thread::{order_comments, validate_thread_params, Comment, ThreadCreationParams};

pub use compose::{ComposeBox, ComposeTarget, PostOutcome};
pub use layout::{DialogFrame, DialogLayout};

/// Which half of the dialog body is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSection {
    /// Composing the first comment of a new thread.
    Create,
    /// Listing saved comments with a reply box.
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub comment: Comment,
    pub delete_confirmation_visible: bool,
    pub disabled: bool,
}

impl CommentRow {
    fn new(comment: Comment) -> Self {
        Self {
            comment,
            delete_confirmation_visible: false,
            disabled: false,
        }
    }
}

/// Host listeners the dialog expects to receive events from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerBinding {
    /// Pointer enter/leave; never bound on mobile.
    pub hover: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilePanel {
    pub animating: bool,
    /// A highlight dialog with nothing to discuss renders as a bare highlight.
    pub plain_highlight: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DialogSettings {
    pub can_annotate: bool,
    pub is_mobile: bool,
    pub placement: PlacementConfig,
}

#[derive(Debug, Clone)]
pub struct DialogOptions {
    pub annotation_type: AnnotationType,
    pub location: Location,
    pub locale: String,
    pub settings: DialogSettings,
}

#[derive(Debug)]
pub struct AnnotationDialog {
    annotation_type: AnnotationType,
    location: Location,
    locale: String,
    can_annotate: bool,
    is_mobile: bool,
    placement: PlacementConfig,
    machine: StateMachine,
    has_annotations: bool,
    thread_number: Option<u32>,
    rows: Vec<CommentRow>,
    section: DialogSection,
    annotation_box: Option<ComposeBox>,
    reply_box: Option<ComposeBox>,
    focus: Option<ComposeTarget>,
    hidden: bool,
    attached: bool,
    listeners: Option<ListenerBinding>,
    layout: Option<DialogLayout>,
    last_frame: Option<DialogFrame>,
    mobile_panel: MobilePanel,
    destroyed: bool,
    bus: NotificationBus,
}

impl AnnotationDialog {
    /// Builds a dialog with `comments` in chronological order.
    pub fn new(options: DialogOptions, comments: Vec<Comment>) -> Self {
        let DialogOptions {
            annotation_type,
            location,
            locale,
            settings,
        } = options;
        let rows = order_comments(comments.into_iter().enumerate())
            .into_iter()
            .map(CommentRow::new)
            .collect::<Vec<_>>();
        let has_annotations = !rows.is_empty();
        let compose = || settings.can_annotate.then(ComposeBox::default);

        tracing::debug!(
            annotation_type = annotation_type.as_str(),
            comments = rows.len(),
            mobile = settings.is_mobile,
            "set up annotation dialog"
        );

        Self {
            annotation_type,
            location,
            locale,
            can_annotate: settings.can_annotate,
            is_mobile: settings.is_mobile,
            placement: settings.placement,
            machine: StateMachine::new(has_annotations, settings.is_mobile),
            has_annotations,
            thread_number: rows.first().and_then(|row| row.comment.thread_number),
            section: if has_annotations {
                DialogSection::Show
            } else {
                DialogSection::Create
            },
            rows,
            annotation_box: compose(),
            reply_box: compose(),
            focus: None,
            hidden: true,
            attached: false,
            // Mobile dialogs share one panel that binds its listeners when shown.
            listeners: (!settings.is_mobile).then_some(ListenerBinding { hover: true }),
            layout: None,
            last_frame: None,
            mobile_panel: MobilePanel::default(),
            destroyed: false,
            bus: NotificationBus::default(),
        }
    }

    /// Validates creation parameters before building the dialog, so an
    /// incomplete request never reaches placement or the state machine.
    pub fn from_params(
        params: Option<&ThreadCreationParams>,
        settings: DialogSettings,
    ) -> DialogResult<(Self, Anchor)> {
        let anchor = validate_thread_params(params)?;
        let (Some(params), Some(annotation_type)) =
            (params, params.and_then(|params| params.annotation_type))
        else {
            return Err(ValidationFailure::MissingParams.into());
        };
        let options = DialogOptions {
            annotation_type,
            location: params.location.clone(),
            locale: params.locale.clone().unwrap_or_default(),
            settings,
        };
        let comments = params.annotations.clone().unwrap_or_default();
        Ok((Self::new(options, comments), anchor))
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<DialogNotification> {
        self.bus.subscribe()
    }

    pub fn state(&self) -> DialogState {
        self.machine.state()
    }

    pub fn annotation_type(&self) -> AnnotationType {
        self.annotation_type
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn has_annotations(&self) -> bool {
        self.has_annotations
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn can_annotate(&self) -> bool {
        self.can_annotate
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_flipped(&self) -> bool {
        self.layout.is_some_and(|layout| layout.flipped())
    }

    pub fn thread_number(&self) -> Option<u32> {
        self.thread_number
    }

    pub fn section(&self) -> DialogSection {
        self.section
    }

    pub fn rows(&self) -> &[CommentRow] {
        &self.rows
    }

    pub fn comment_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.comment.annotation_id.as_str())
            .collect()
    }

    pub fn compose_box(&self, target: ComposeTarget) -> Option<&ComposeBox> {
        match target {
            ComposeTarget::Annotation => self.annotation_box.as_ref(),
            ComposeTarget::Reply => self.reply_box.as_ref(),
        }
    }

    /// Host-side typing lands here.
    pub fn set_compose_text(&mut self, target: ComposeTarget, text: impl Into<String>) {
        if let Some(compose) = self.compose_box_mut(target) {
            compose.set_text(text);
        }
    }

    pub fn focused(&self) -> Option<ComposeTarget> {
        self.focus
    }

    pub fn listeners(&self) -> Option<ListenerBinding> {
        self.listeners
    }

    pub fn layout(&self) -> Option<&DialogLayout> {
        self.layout.as_ref()
    }

    pub fn mobile_panel(&self) -> MobilePanel {
        self.mobile_panel
    }

    /// Feeds a host event into the state machine. `Posted` is only accepted
    /// once a comment is recorded, and a destroyed dialog accepts nothing.
    pub fn dispatch(&mut self, event: DialogEvent) -> DialogResult<DialogState> {
        let blocked = self.destroyed || (event == DialogEvent::Posted && !self.has_annotations);
        if blocked {
            tracing::warn!(
                state = ?self.state(),
                ?event,
                destroyed = self.destroyed,
                "dialog rejected host event"
            );
            return Err(StateError::InvalidStateTransition {
                from: self.state(),
                event,
                mobile: self.is_mobile,
            }
            .into());
        }
        Ok(self.machine.transition(event)?)
    }

    /// Internal transitions are advisory: a rejected one is logged and the
    /// dialog keeps its current state.
    fn apply(&mut self, event: DialogEvent) {
        if let Err(err) = self.machine.transition(event) {
            tracing::debug!(%err, "dialog transition ignored");
        }
    }

    fn compose_box_mut(&mut self, target: ComposeTarget) -> Option<&mut ComposeBox> {
        if self.destroyed {
            return None;
        }
        match target {
            ComposeTarget::Annotation => self.annotation_box.as_mut(),
            ComposeTarget::Reply => self.reply_box.as_mut(),
        }
    }

    fn row_mut(&mut self, annotation_id: &str) -> Option<&mut CommentRow> {
        if self.destroyed {
            return None;
        }
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.comment.annotation_id == annotation_id);
        if row.is_none() {
            tracing::debug!(annotation_id, "no comment row with this id");
        }
        row
    }

    /// Records a saved comment. The dialog leaves the pending family for good.
    pub fn add_annotation(&mut self, comment: Comment) {
        if self.destroyed {
            return;
        }
        self.has_annotations = true;
        self.section = DialogSection::Show;
        if self.thread_number.is_none() {
            self.thread_number = comment.thread_number;
        }
        self.rows.push(CommentRow::new(comment));
        self.apply(DialogEvent::Posted);
        self.deactivate_reply(false);
        // Hover implies a visible dialog.
        if self.hidden {
            self.apply(DialogEvent::Hide);
        }
    }

    /// Drops a comment row; the thread keeps `has_annotations` even when empty.
    pub fn remove_annotation(&mut self, annotation_id: &str) {
        if self.destroyed {
            return;
        }
        let before = self.rows.len();
        self.rows
            .retain(|row| row.comment.annotation_id != annotation_id);
        if self.rows.len() == before {
            tracing::debug!(annotation_id, "remove requested for unknown comment");
        }
        if self.reply_box.is_some() {
            self.focus = Some(ComposeTarget::Reply);
        }
    }

    pub fn post_annotation(&mut self) -> PostOutcome {
        self.post_from(ComposeTarget::Annotation)
    }

    pub fn post_reply(&mut self) -> PostOutcome {
        self.post_from(ComposeTarget::Reply)
    }

    fn post_from(&mut self, target: ComposeTarget) -> PostOutcome {
        if self.destroyed {
            return PostOutcome::Unavailable;
        }
        let Some(compose) = self.compose_box_mut(target) else {
            return PostOutcome::Unavailable;
        };
        let Some(text) = compose.take_for_post() else {
            tracing::debug!(?target, "rejected blank comment");
            return PostOutcome::Rejected;
        };
        self.bus.emit(DialogNotification::Create { text: text.clone() });
        self.focus = Some(target);
        PostOutcome::Posted { text }
    }

    /// Discards the uncommitted first comment.
    pub fn cancel_annotation(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(compose) = self.annotation_box.as_mut() {
            compose.reset();
        }
        self.bus.emit(DialogNotification::Cancel);
        if !self.has_annotations {
            self.apply(DialogEvent::Cancel);
        }
    }

    pub fn activate_reply(&mut self) {
        if self.destroyed {
            return;
        }
        let Some(reply) = self.reply_box.as_mut() else {
            return;
        };
        if reply.is_active() {
            return;
        }
        reply.activate();
        self.apply(DialogEvent::ComposeFocus);
    }

    /// Clears and collapses the reply box, optionally keeping focus on it.
    pub fn deactivate_reply(&mut self, keep_focus: bool) {
        if self.destroyed {
            return;
        }
        let Some(reply) = self.reply_box.as_mut() else {
            return;
        };
        reply.reset();
        if keep_focus {
            self.focus = Some(ComposeTarget::Reply);
        } else if self.focus == Some(ComposeTarget::Reply) {
            self.focus = None;
        }
        self.apply(DialogEvent::ComposeBlur);
    }

    /// Activates the compose box appropriate for the thread and focuses it.
    pub fn focus_text_area(&mut self) -> Option<ComposeTarget> {
        if self.destroyed {
            return None;
        }
        if self.has_annotations {
            self.activate_reply();
            self.reply_box.as_ref()?;
            self.focus = Some(ComposeTarget::Reply);
        } else {
            self.annotation_box.as_mut()?.activate();
            self.focus = Some(ComposeTarget::Annotation);
            self.apply(DialogEvent::ComposeFocus);
        }
        self.focus
    }

    /// Clears the invalid marker once the box has content again.
    pub fn validate_text_area(&mut self, target: ComposeTarget) {
        if let Some(compose) = self.compose_box_mut(target) {
            compose.clear_invalid_if_filled();
        }
    }

    pub fn show_delete_confirmation(&mut self, annotation_id: &str) {
        if let Some(row) = self.row_mut(annotation_id) {
            row.delete_confirmation_visible = true;
        }
    }

    pub fn hide_delete_confirmation(&mut self, annotation_id: &str) {
        if let Some(row) = self.row_mut(annotation_id) {
            row.delete_confirmation_visible = false;
        }
    }

    pub fn delete_annotation(&mut self, annotation_id: &str) {
        if self.row_mut(annotation_id).is_none() {
            return;
        }
        self.bus.emit(DialogNotification::Delete {
            annotation_id: annotation_id.to_string(),
        });
    }

    pub fn enable(&mut self, annotation_id: &str) {
        if let Some(row) = self.row_mut(annotation_id) {
            row.disabled = false;
        }
    }

    pub fn disable(&mut self, annotation_id: &str) {
        if let Some(row) = self.row_mut(annotation_id) {
            row.disabled = true;
        }
    }

    /// Lays the dialog out against `frame` and attaches it to the page.
    pub fn position(&mut self, frame: DialogFrame) {
        if self.destroyed {
            return;
        }
        self.layout = Some(DialogLayout::compute(&self.placement, &frame, self.hidden));
        self.last_frame = Some(frame);
        self.attached = true;
    }

    /// The host removed the dialog from the page (e.g. the page re-rendered).
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Updates comment list measurements after the host re-renders it.
    pub fn set_comments_scroll(&mut self, metrics: ScrollMetrics) {
        if let Some(frame) = self.last_frame.as_mut() {
            frame.comments_scroll = metrics;
        }
    }

    pub fn scroll_to_last_comment(&mut self) {
        let Some(metrics) = self.last_frame.map(|frame| frame.comments_scroll) else {
            return;
        };
        if let Some(layout) = self.layout.as_mut() {
            layout.scroll_to_last_comment(metrics);
        }
    }

    /// Unbinds listeners and releases the surface; later calls are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.listeners = None;
        self.attached = false;
        self.hidden = true;
        self.destroyed = true;
        tracing::debug!(state = %self.machine, "destroyed annotation dialog");
    }
}
