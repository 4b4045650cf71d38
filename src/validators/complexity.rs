use super::Validator;
use crate::core::annotation::Annotation;
use crate::core::Rule;

/// Flags annotations whose nesting depth exceeds the configured
/// maximum. Comment-style annotations have no expression tree and are
/// handled by [`super::AnnotationOldStyle`] instead.
pub struct AnnotationComplexity {
    max_complexity: usize,
}

impl AnnotationComplexity {
    pub fn new(max_complexity: usize) -> Self {
        Self { max_complexity }
    }
}

impl Validator for AnnotationComplexity {
    fn rule(&self) -> Rule {
        Rule::Complexity
    }

    fn validate(&self, annotation: &Annotation) -> Option<String> {
        if annotation.shape.is_comment() {
            return None;
        }
        let complexity = annotation.shape.depth();
        (complexity > self.max_complexity).then(|| {
            format!(
                "{} too complex annotation ({} > {})",
                Rule::Complexity,
                complexity,
                self.max_complexity
            )
        })
    }
}
