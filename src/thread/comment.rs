use serde::{Deserialize, Serialize};

/// Placeholder author id carried by a comment that is still being saved.
const POSTING_USER_ID: &str = "0";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPermissions {
    #[serde(default)]
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "annotationID")]
    pub annotation_id: String,
    #[serde(rename = "threadID", default)]
    pub thread_id: Option<String>,
    #[serde(rename = "threadNumber", default)]
    pub thread_number: Option<u32>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user: CommentUser,
    #[serde(default)]
    pub permissions: CommentPermissions,
    #[serde(default)]
    pub created: Option<String>,
}

impl Comment {
    pub fn new(annotation_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            annotation_id: annotation_id.into(),
            thread_id: None,
            thread_number: None,
            text: text.into(),
            user: CommentUser::default(),
            permissions: CommentPermissions::default(),
            created: None,
        }
    }

    /// True while the backend has not yet assigned a real author.
    pub fn is_posting(&self) -> bool {
        self.user.id.as_deref() == Some(POSTING_USER_ID)
    }

    pub fn can_delete(&self) -> bool {
        self.permissions.can_delete
    }
}

/// File-level permissions of the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ViewerPermissions {
    #[serde(default)]
    pub can_annotate: bool,
    #[serde(default)]
    pub can_view_annotations_all: bool,
    #[serde(default)]
    pub can_view_annotations_self: bool,
}

pub fn can_load_annotations(permissions: Option<&ViewerPermissions>) -> bool {
    permissions.is_some_and(|permissions| {
        permissions.can_annotate
            || permissions.can_view_annotations_all
            || permissions.can_view_annotations_self
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comment_deserializes_wire_names() {
        let comment: Comment = serde_json::from_value(json!({
            "annotationID": "a1",
            "threadID": "t1",
            "threadNumber": 3,
            "text": "hello",
            "user": { "id": "7", "name": "Ana" },
            "permissions": { "can_delete": true },
            "created": "2016-10-29T14:19:56"
        }))
        .expect("comment should deserialize");

        assert_eq!(comment.annotation_id, "a1");
        assert_eq!(comment.thread_number, Some(3));
        assert!(comment.can_delete());
        assert!(!comment.is_posting());
    }

    #[test]
    fn missing_delete_permission_defaults_to_false() {
        let comment: Comment = serde_json::from_value(json!({ "annotationID": "a1" }))
            .expect("comment should deserialize");
        assert!(!comment.can_delete());
    }

    #[test]
    fn posting_placeholder_user_is_detected() {
        let mut comment = Comment::new("a1", "hi");
        comment.user.id = Some("0".to_string());
        assert!(comment.is_posting());
    }

    #[test]
    fn can_load_annotations_requires_any_view_permission() {
        assert!(!can_load_annotations(None));
        assert!(!can_load_annotations(Some(&ViewerPermissions::default())));
        assert!(can_load_annotations(Some(&ViewerPermissions {
            can_annotate: true,
            ..Default::default()
        })));
        assert!(can_load_annotations(Some(&ViewerPermissions {
            can_view_annotations_all: true,
            ..Default::default()
        })));
        assert!(can_load_annotations(Some(&ViewerPermissions {
            can_view_annotations_self: true,
            ..Default::default()
        })));
    }
}
