use super::Validator;
use crate::core::annotation::Annotation;
use crate::core::Rule;

/// Flags deprecated `# type: ...` comment annotations. Only part of
/// the active validator set when old-style annotations are disallowed.
pub struct AnnotationOldStyle;

impl Validator for AnnotationOldStyle {
    fn rule(&self) -> Rule {
        Rule::OldStyle
    }

    fn validate(&self, annotation: &Annotation) -> Option<String> {
        annotation.shape.is_comment().then(|| {
            format!(
                "{} comment-style annotation is deprecated, use inline type hints",
                Rule::OldStyle
            )
        })
    }
}
