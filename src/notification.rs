use std::sync::mpsc;

use serde::Serialize;

/// Outbound messages a dialog raises for the surrounding annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum DialogNotification {
    #[serde(rename = "annotationcreate")]
    Create { text: String },
    #[serde(rename = "annotationcancel")]
    Cancel,
    #[serde(rename = "annotationdelete")]
    Delete {
        #[serde(rename = "annotationID")]
        annotation_id: String,
    },
    #[serde(rename = "annotationcommentpending")]
    CommentPending,
}

impl DialogNotification {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "annotationcreate",
            Self::Cancel => "annotationcancel",
            Self::Delete { .. } => "annotationdelete",
            Self::CommentPending => "annotationcommentpending",
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationBus {
    subscribers: Vec<mpsc::Sender<DialogNotification>>,
}

impl NotificationBus {
    pub fn subscribe(&mut self) -> mpsc::Receiver<DialogNotification> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers to every live subscriber; dropped receivers are pruned.
    pub fn emit(&mut self, notification: DialogNotification) {
        tracing::debug!(event = notification.name(), "emit dialog notification");
        self.subscribers
            .retain(|subscriber| subscriber.send(notification.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notifications_serialize_with_wire_names() {
        assert_eq!(
            serde_json::to_value(DialogNotification::Create {
                text: "hi".to_string()
            })
            .expect("notification should serialize"),
            json!({ "event": "annotationcreate", "text": "hi" })
        );
        assert_eq!(
            serde_json::to_value(DialogNotification::Delete {
                annotation_id: "1".to_string()
            })
            .expect("notification should serialize"),
            json!({ "event": "annotationdelete", "annotationID": "1" })
        );
        assert_eq!(
            serde_json::to_value(DialogNotification::Cancel)
                .expect("notification should serialize"),
            json!({ "event": DialogNotification::Cancel.name() })
        );
    }

    #[test]
    fn emit_reaches_every_subscriber_in_order() {
        let mut bus = NotificationBus::default();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.emit(DialogNotification::CommentPending);
        bus.emit(DialogNotification::Cancel);

        for rx in [first, second] {
            let received = rx.try_iter().collect::<Vec<_>>();
            assert_eq!(
                received,
                vec![DialogNotification::CommentPending, DialogNotification::Cancel]
            );
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut bus = NotificationBus::default();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.emit(DialogNotification::Cancel);
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().ok(), Some(DialogNotification::Cancel));
    }
}
