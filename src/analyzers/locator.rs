use crate::core::annotation::{Annotation, AnnotationShape};
use crate::core::source_index::SourceIndex;

use super::PythonModule;
use once_cell::sync::Lazy;
use regex::Regex;
use rustpython_parser::ast::{self, Ranged};
use rustpython_parser::{lexer, Mode, Tok};

static TYPE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#?\s*type:\s*(.+)").unwrap());

/// Walks a parsed module and collects every annotation occurrence in
/// document order: parameter annotations, return annotations,
/// annotated assignments at any scope, and deprecated `# type:`
/// signature comments on functions.
pub fn locate_annotations(module: &PythonModule) -> Vec<Annotation> {
    let mut locator = AnnotationLocator::new(&module.source);
    locator.visit_suite(&module.suite);
    log::debug!(
        "located {} annotations in {}",
        locator.annotations.len(),
        module.path.display()
    );
    locator.annotations
}

struct TypeComment {
    line: usize,
    column: usize,
    text: String,
}

/// The parser drops comments, so comment-style annotations are
/// recovered from the lexer's comment tokens up front and matched to
/// function headers during the walk. Lexing keeps string context:
/// `# type:` text inside a string literal or docstring is a string,
/// not a comment. `# type: ignore` is a suppression marker, not an
/// annotation.
fn scan_type_comments(source: &str, index: &SourceIndex) -> Vec<TypeComment> {
    let mut comments = Vec::new();
    for (tok, range) in lexer::lex(source, Mode::Module).flatten() {
        if let Tok::Comment(comment) = tok {
            if let Some(captures) = TYPE_COMMENT.captures(&comment) {
                let text = captures.get(1).map_or("", |m| m.as_str().trim());
                if is_type_ignore(text) {
                    continue;
                }
                let (line, column) = index.location(range.start().to_usize());
                comments.push(TypeComment {
                    line,
                    column,
                    text: text.to_string(),
                });
            }
        }
    }
    comments
}

/// `ignore` must stand alone as the first token: `# type: ignore` and
/// `# type: ignore[arg-type]` are suppressions, `# type: ignoreme` is
/// an (odd) annotation.
fn is_type_ignore(text: &str) -> bool {
    match text.strip_prefix("ignore") {
        Some(rest) => {
            rest.is_empty() || rest.starts_with('[') || rest.starts_with(char::is_whitespace)
        }
        None => false,
    }
}

struct AnnotationLocator {
    index: SourceIndex,
    type_comments: Vec<TypeComment>,
    annotations: Vec<Annotation>,
}

impl AnnotationLocator {
    fn new(source: &str) -> Self {
        let index = SourceIndex::new(source);
        let type_comments = scan_type_comments(source, &index);
        Self {
            index,
            type_comments,
            annotations: Vec::new(),
        }
    }

    fn visit_suite(&mut self, suite: &[ast::Stmt]) {
        for stmt in suite {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::FunctionDef(func) => {
                self.collect_function(&func.args, func.returns.as_deref(), func, &func.body);
                self.visit_suite(&func.body);
            }
            ast::Stmt::AsyncFunctionDef(func) => {
                self.collect_function(&func.args, func.returns.as_deref(), func, &func.body);
                self.visit_suite(&func.body);
            }
            ast::Stmt::ClassDef(class) => {
                self.visit_suite(&class.body);
            }
            ast::Stmt::AnnAssign(ann_assign) => {
                self.push_annotation(&ann_assign.annotation);
            }
            ast::Stmt::If(if_stmt) => {
                self.visit_suite(&if_stmt.body);
                self.visit_suite(&if_stmt.orelse);
            }
            ast::Stmt::While(while_stmt) => {
                self.visit_suite(&while_stmt.body);
                self.visit_suite(&while_stmt.orelse);
            }
            ast::Stmt::For(for_stmt) => {
                self.visit_suite(&for_stmt.body);
                self.visit_suite(&for_stmt.orelse);
            }
            ast::Stmt::AsyncFor(for_stmt) => {
                self.visit_suite(&for_stmt.body);
                self.visit_suite(&for_stmt.orelse);
            }
            ast::Stmt::With(with_stmt) => {
                self.visit_suite(&with_stmt.body);
            }
            ast::Stmt::AsyncWith(with_stmt) => {
                self.visit_suite(&with_stmt.body);
            }
            ast::Stmt::Try(try_stmt) => {
                self.visit_suite(&try_stmt.body);
                for handler in &try_stmt.handlers {
                    let ast::ExceptHandler::ExceptHandler(h) = handler;
                    self.visit_suite(&h.body);
                }
                self.visit_suite(&try_stmt.orelse);
                self.visit_suite(&try_stmt.finalbody);
            }
            ast::Stmt::TryStar(try_stmt) => {
                self.visit_suite(&try_stmt.body);
                for handler in &try_stmt.handlers {
                    let ast::ExceptHandler::ExceptHandler(h) = handler;
                    self.visit_suite(&h.body);
                }
                self.visit_suite(&try_stmt.orelse);
                self.visit_suite(&try_stmt.finalbody);
            }
            ast::Stmt::Match(match_stmt) => {
                for case in &match_stmt.cases {
                    self.visit_suite(&case.body);
                }
            }
            _ => {}
        }
    }

    fn collect_function(
        &mut self,
        args: &ast::Arguments,
        returns: Option<&ast::Expr>,
        header: &impl Ranged,
        body: &[ast::Stmt],
    ) {
        for arg in args.posonlyargs.iter().chain(args.args.iter()) {
            if let Some(annotation) = &arg.def.annotation {
                self.push_annotation(annotation);
            }
        }
        if let Some(vararg) = &args.vararg {
            if let Some(annotation) = &vararg.annotation {
                self.push_annotation(annotation);
            }
        }
        for arg in &args.kwonlyargs {
            if let Some(annotation) = &arg.def.annotation {
                self.push_annotation(annotation);
            }
        }
        if let Some(kwarg) = &args.kwarg {
            if let Some(annotation) = &kwarg.annotation {
                self.push_annotation(annotation);
            }
        }
        if let Some(annotation) = returns {
            self.push_annotation(annotation);
        }
        self.collect_signature_comment(header, body);
    }

    /// A signature type comment sits either on the `def` header line or
    /// on its own line before the first body statement.
    fn collect_signature_comment(&mut self, header: &impl Ranged, body: &[ast::Stmt]) {
        let header_line = self.index.line_of(header.start().to_usize());
        let first_body_line = body
            .first()
            .map_or(header_line, |stmt| self.index.line_of(stmt.start().to_usize()));
        let found = self
            .type_comments
            .iter()
            .find(|tc| tc.line >= header_line && tc.line <= first_body_line);
        if let Some(comment) = found {
            self.annotations.push(Annotation::new(
                AnnotationShape::Comment(comment.text.clone()),
                comment.line,
                comment.column,
            ));
        }
    }

    fn push_annotation(&mut self, expr: &ast::Expr) {
        let (line, column) = self.index.location(expr.start().to_usize());
        self.annotations
            .push(Annotation::new(AnnotationShape::from_expr(expr), line, column));
    }
}
