use std::fmt;
use std::sync::Arc;

use crate::location::{validate_location, Anchor, AnnotationType, Location, ValidationFailure};

use super::comment::Comment;

/// Identifier generator owned by the persistence layer.
pub trait AnnotationService: fmt::Debug {
    fn generate_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAnnotationService;

impl AnnotationService for UuidAnnotationService {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Opaque handle to the host element a thread is drawn on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedElement(pub String);

#[derive(Debug, Clone, Default)]
pub struct ThreadCreationParams {
    pub annotated_element: Option<AnnotatedElement>,
    pub annotations: Option<Vec<Comment>>,
    pub annotation_service: Option<Arc<dyn AnnotationService>>,
    pub file_version_id: Option<String>,
    pub location: Location,
    pub locale: Option<String>,
    pub annotation_type: Option<AnnotationType>,
}

fn require_present<T>(value: &Option<T>, field: &'static str) -> Result<(), ValidationFailure> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationFailure::MissingField { field }),
    }
}

/// Structural fields first, then the type-specific location check.
pub fn validate_thread_params(
    params: Option<&ThreadCreationParams>,
) -> Result<Anchor, ValidationFailure> {
    let params = params.ok_or(ValidationFailure::MissingParams)?;
    require_present(&params.annotated_element, "annotatedElement")?;
    require_present(&params.annotations, "annotations")?;
    require_present(&params.annotation_service, "annotationService")?;
    require_present(&params.file_version_id, "fileVersionId")?;
    require_present(&params.locale, "locale")?;
    let annotation_type = params
        .annotation_type
        .ok_or(ValidationFailure::MissingType)?;
    validate_location(annotation_type, &params.location)
}

pub fn are_thread_params_valid(params: Option<&ThreadCreationParams>) -> bool {
    match validate_thread_params(params) {
        Ok(_) => true,
        Err(failure) => {
            tracing::debug!(%failure, "rejected thread parameters");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::create_location;

    fn complete_params(
        annotation_type: AnnotationType,
        location: Location,
    ) -> ThreadCreationParams {
        ThreadCreationParams {
            annotated_element: Some(AnnotatedElement("page-1".to_string())),
            annotations: Some(Vec::new()),
            annotation_service: Some(Arc::new(UuidAnnotationService)),
            file_version_id: Some("123".to_string()),
            location,
            locale: Some("en-US".to_string()),
            annotation_type: Some(annotation_type),
        }
    }

    #[test]
    fn missing_params_are_invalid() {
        assert!(!are_thread_params_valid(None));
        assert_eq!(
            validate_thread_params(None).expect_err("absent params should fail"),
            ValidationFailure::MissingParams
        );
    }

    #[test]
    fn params_with_only_file_version_are_invalid() {
        let params = ThreadCreationParams {
            file_version_id: Some("123".to_string()),
            ..Default::default()
        };
        assert!(!are_thread_params_valid(Some(&params)));
        assert_eq!(
            validate_thread_params(Some(&params)).expect_err("incomplete params should fail"),
            ValidationFailure::MissingField {
                field: "annotatedElement"
            }
        );
    }

    #[test]
    fn empty_location_is_invalid_for_every_type() {
        for annotation_type in [
            AnnotationType::Point,
            AnnotationType::Highlight,
            AnnotationType::Draw,
        ] {
            let params = complete_params(annotation_type, Location::default());
            assert!(
                !are_thread_params_valid(Some(&params)),
                "{annotation_type:?} should reject an empty location"
            );
        }
    }

    #[test]
    fn missing_type_is_invalid() {
        let mut params = complete_params(AnnotationType::Point, create_location(1.0, 2.0, None));
        params.annotation_type = None;
        assert_eq!(
            validate_thread_params(Some(&params)).expect_err("untyped params should fail"),
            ValidationFailure::MissingType
        );
    }

    #[test]
    fn complete_params_with_valid_location_are_valid() {
        let params = complete_params(AnnotationType::Point, create_location(1.0, 2.0, None));
        assert!(are_thread_params_valid(Some(&params)));
    }

    #[test]
    fn uuid_service_generates_distinct_ids() {
        let service = UuidAnnotationService;
        assert_ne!(service.generate_id(), service.generate_id());
    }
}
