use super::Validator;
use crate::core::annotation::Annotation;
use crate::core::Rule;

/// Flags annotations whose flattened element count exceeds the
/// configured maximum. Comment-style annotations are exempt.
pub struct AnnotationLength {
    max_len: usize,
}

impl AnnotationLength {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Validator for AnnotationLength {
    fn rule(&self) -> Rule {
        Rule::Length
    }

    fn validate(&self, annotation: &Annotation) -> Option<String> {
        if annotation.shape.is_comment() {
            return None;
        }
        let len = annotation.shape.flattened_len();
        (len > self.max_len).then(|| {
            format!(
                "{} too long annotation ({} > {})",
                Rule::Length,
                len,
                self.max_len
            )
        })
    }
}
