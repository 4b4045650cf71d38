// Export modules for library usage
pub mod analyzers;
pub mod checker;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod validators;

// Re-export commonly used types
pub use crate::analyzers::{locate_annotations, parse_python, PythonModule};
pub use crate::checker::AnnotationsChecker;
pub use crate::config::{AnnolintConfig, ConfigError};
pub use crate::core::annotation::{Annotation, AnnotationShape};
pub use crate::core::{AnalysisResults, FileReport, Rule, Violation};
pub use crate::io::output::{create_writer, OutputWriter};
pub use crate::validators::Validator;
