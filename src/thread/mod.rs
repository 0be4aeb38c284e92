//! Comments, their chronological ordering, and thread creation parameters.

mod comment;
mod order;
mod params;

pub use comment::{
    can_load_annotations, Comment, CommentPermissions, CommentUser, ViewerPermissions,
};
pub use order::{first_comment, is_plain_highlight, last_comment, order_comments};
pub use params::{
    are_thread_params_valid, validate_thread_params, AnnotatedElement, AnnotationService,
    ThreadCreationParams, UuidAnnotationService,
};
