use crate::analyzers::{locate_annotations, parse_python, PythonModule};
use crate::config::AnnolintConfig;
use crate::core::Violation;
use crate::validators::{AnnotationComplexity, AnnotationLength, AnnotationOldStyle, Validator};
use anyhow::Result;
use std::path::Path;

/// Runs every active validator over every annotation in a module.
///
/// The validator set is fixed at construction from the resolved
/// configuration: complexity and length always, old-style only while
/// comment annotations are disallowed.
pub struct AnnotationsChecker {
    config: AnnolintConfig,
}

impl AnnotationsChecker {
    pub fn new(config: AnnolintConfig) -> Self {
        Self { config }
    }

    fn validators(&self) -> Vec<Box<dyn Validator>> {
        let mut validators: Vec<Box<dyn Validator>> = vec![
            Box::new(AnnotationComplexity::new(
                self.config.max_annotations_complexity,
            )),
            Box::new(AnnotationLength::new(self.config.max_annotations_len)),
        ];
        if !self.config.enable_old_style_annotations {
            validators.push(Box::new(AnnotationOldStyle));
        }
        validators
    }

    /// Checks one parsed module. Every validator runs against every
    /// annotation; a failing check never short-circuits the rest, so a
    /// single annotation can report up to one violation per validator.
    pub fn check_module(&self, module: &PythonModule) -> Vec<Violation> {
        let validators = self.validators();
        let mut violations = Vec::new();
        for annotation in locate_annotations(module) {
            for validator in &validators {
                if let Some(message) = validator.validate(&annotation) {
                    violations.push(Violation {
                        line: annotation.line,
                        column: annotation.column,
                        message,
                        rule: validator.rule(),
                    });
                }
            }
        }
        violations
    }

    /// Convenience entry point: parse then check.
    pub fn check_source(&self, content: &str, path: &Path) -> Result<Vec<Violation>> {
        let module = parse_python(content, path)?;
        Ok(self.check_module(&module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;
    use indoc::indoc;

    fn check(source: &str, config: AnnolintConfig) -> Vec<Violation> {
        AnnotationsChecker::new(config)
            .check_source(source, Path::new("<test>"))
            .unwrap()
    }

    #[test]
    fn simple_annotation_passes_defaults() {
        let violations = check("x: int = 1\n", AnnolintConfig::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn deep_annotation_reports_complexity_only() {
        let violations = check(
            "x: List[Dict[str, List[int]]] = []\n",
            AnnolintConfig::default(),
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::Complexity);
        assert_eq!(violations[0].message, "TAE001 too complex annotation (4 > 3)");
    }

    #[test]
    fn one_annotation_can_violate_several_rules() {
        let source = "x: List[List[List[Tuple[int, str, bytes, float]]]] = []\n";
        let violations = check(source, AnnolintConfig::default());
        let rules: Vec<Rule> = violations.iter().map(|v| v.rule).collect();
        assert_eq!(rules, vec![Rule::Complexity, Rule::Length]);
    }

    #[test]
    fn old_style_reported_when_disallowed() {
        let source = indoc! {"
            def f(a, b):
                # type: (int, str) -> bool
                return True
        "};
        let violations = check(source, AnnolintConfig::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::OldStyle);
        assert_eq!(violations[0].line, 2);
    }

    #[test]
    fn old_style_silent_when_enabled() {
        let source = indoc! {"
            def f(a, b):
                # type: (int, str) -> bool
                return True
        "};
        let config = AnnolintConfig {
            enable_old_style_annotations: true,
            ..AnnolintConfig::default()
        };
        assert!(check(source, config).is_empty());
    }

    #[test]
    fn empty_module_yields_no_violations() {
        assert!(check("", AnnolintConfig::default()).is_empty());
    }

    #[test]
    fn checking_twice_is_idempotent() {
        let source = indoc! {"
            def f(a: List[Dict[str, List[int]]]) -> bool:
                # type: ignore
                return True

            x: int | str | bytes | float | complex | bool | None | list = 0
        "};
        let checker = AnnotationsChecker::new(AnnolintConfig::default());
        let first = checker.check_source(source, Path::new("<test>")).unwrap();
        let second = checker.check_source(source, Path::new("<test>")).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
