#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentMarker {
    PostAnnotation,
    CancelAnnotation,
    ReplyTextArea,
    CancelReply,
    PostReply,
    Delete,
    CancelDelete,
    ConfirmDelete,
}

const INTENT_MARKERS: &[(&str, IntentMarker)] = &[
    ("post-annotation-btn", IntentMarker::PostAnnotation),
    ("cancel-annotation-btn", IntentMarker::CancelAnnotation),
    ("reply-textarea", IntentMarker::ReplyTextArea),
    ("cancel-reply-btn", IntentMarker::CancelReply),
    ("post-reply-btn", IntentMarker::PostReply),
    ("delete-btn", IntentMarker::Delete),
    ("cancel-delete-btn", IntentMarker::CancelDelete),
    ("confirm-delete-btn", IntentMarker::ConfirmDelete),
];

impl IntentMarker {
    pub fn from_marker(marker: &str) -> Option<Self> {
        INTENT_MARKERS
            .iter()
            .find(|(name, _)| *name == marker)
            .map(|(_, intent)| *intent)
    }

    pub fn marker(self) -> &'static str {
        INTENT_MARKERS
            .iter()
            .find(|(_, intent)| *intent == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogIntent {
    PostAnnotation,
    CancelAnnotation,
    ActivateReply,
    CancelReply,
    PostReply,
    ShowDeleteConfirmation(String),
    CancelDeleteConfirmation(String),
    ConfirmDelete(String),
}

/// Resolves the marker found on the nearest clicked ancestor. Unknown markers,
/// and delete markers without an annotation id, resolve to nothing.
pub fn resolve_intent(marker: Option<&str>, annotation_id: Option<&str>) -> Option<DialogIntent> {
    let annotation_id = || {
        annotation_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    };
    let intent = match IntentMarker::from_marker(marker?)? {
        IntentMarker::PostAnnotation => DialogIntent::PostAnnotation,
        IntentMarker::CancelAnnotation => DialogIntent::CancelAnnotation,
        IntentMarker::ReplyTextArea => DialogIntent::ActivateReply,
        IntentMarker::CancelReply => DialogIntent::CancelReply,
        IntentMarker::PostReply => DialogIntent::PostReply,
        IntentMarker::Delete => DialogIntent::ShowDeleteConfirmation(annotation_id()?),
        IntentMarker::CancelDelete => DialogIntent::CancelDeleteConfirmation(annotation_id()?),
        IntentMarker::ConfirmDelete => DialogIntent::ConfirmDelete(annotation_id()?),
    };
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_round_trip_through_table() {
        for (name, marker) in INTENT_MARKERS {
            assert_eq!(IntentMarker::from_marker(name), Some(*marker));
            assert_eq!(marker.marker(), *name);
        }
    }

    #[test]
    fn compose_markers_resolve_without_annotation_id() {
        assert_eq!(
            resolve_intent(Some("post-annotation-btn"), None),
            Some(DialogIntent::PostAnnotation)
        );
        assert_eq!(
            resolve_intent(Some("cancel-annotation-btn"), None),
            Some(DialogIntent::CancelAnnotation)
        );
        assert_eq!(
            resolve_intent(Some("reply-textarea"), None),
            Some(DialogIntent::ActivateReply)
        );
        assert_eq!(
            resolve_intent(Some("cancel-reply-btn"), None),
            Some(DialogIntent::CancelReply)
        );
        assert_eq!(
            resolve_intent(Some("post-reply-btn"), None),
            Some(DialogIntent::PostReply)
        );
    }

    #[test]
    fn delete_markers_carry_annotation_id() {
        assert_eq!(
            resolve_intent(Some("delete-btn"), Some("someID")),
            Some(DialogIntent::ShowDeleteConfirmation("someID".to_string()))
        );
        assert_eq!(
            resolve_intent(Some("cancel-delete-btn"), Some("someID")),
            Some(DialogIntent::CancelDeleteConfirmation("someID".to_string()))
        );
        assert_eq!(
            resolve_intent(Some("confirm-delete-btn"), Some("someID")),
            Some(DialogIntent::ConfirmDelete("someID".to_string()))
        );
    }

    #[test]
    fn delete_markers_without_id_are_ignored() {
        assert_eq!(resolve_intent(Some("delete-btn"), None), None);
        assert_eq!(resolve_intent(Some("confirm-delete-btn"), Some("")), None);
    }

    #[test]
    fn unknown_or_absent_markers_are_ignored() {
        assert_eq!(resolve_intent(None, Some("someID")), None);
        assert_eq!(resolve_intent(Some("annotation-comment"), None), None);
    }
}
