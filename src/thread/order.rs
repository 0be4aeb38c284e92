use chrono::{DateTime, NaiveDateTime, Utc};

use super::comment::Comment;

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Timestamps come either with an offset or as naive `YYYY-MM-DDTHH:MM:SS`,
/// which is read as UTC.
fn parse_created(created: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(created) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(created, NAIVE_TIMESTAMP_FORMAT)
        .ok()
        .map(|timestamp| timestamp.and_utc())
}

/// Orders an id-keyed mapping of comments by creation instant. Keys only
/// fix the iteration order: ties keep it, and comments with a missing or
/// unparseable timestamp go last in it.
pub fn order_comments<K, I>(comments: I) -> Vec<Comment>
where
    I: IntoIterator<Item = (K, Comment)>,
{
    let mut keyed = comments
        .into_iter()
        .map(|(_, comment)| {
            let created = comment.created.as_deref().and_then(parse_created);
            if created.is_none() {
                tracing::debug!(
                    annotation_id = %comment.annotation_id,
                    created = ?comment.created,
                    "comment timestamp could not be parsed"
                );
            }
            (created, comment)
        })
        .collect::<Vec<_>>();
    keyed.sort_by_key(|(created, _)| (created.is_none(), *created));
    keyed.into_iter().map(|(_, comment)| comment).collect()
}

pub fn first_comment(comments: &[Comment]) -> Option<&Comment> {
    comments.first()
}

pub fn last_comment(comments: &[Comment]) -> Option<&Comment> {
    comments.last()
}

/// A highlight without discussion: exactly one comment and it has no text.
pub fn is_plain_highlight(comments: &[Comment]) -> bool {
    matches!(comments, [only] if only.text.is_empty())
}
