pub mod complexity;
pub mod length;
pub mod old_style;

pub use complexity::AnnotationComplexity;
pub use length::AnnotationLength;
pub use old_style::AnnotationOldStyle;

use crate::core::annotation::Annotation;
use crate::core::Rule;

/// One annotation check. Validators are pure: same annotation, same
/// answer, no state mutated across calls.
pub trait Validator {
    /// Which rule this validator reports under.
    fn rule(&self) -> Rule;

    /// Returns a violation message, or `None` when the annotation
    /// passes.
    fn validate(&self, annotation: &Annotation) -> Option<String>;
}
