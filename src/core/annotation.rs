use rustpython_parser::ast;

/// Structural shape of one type annotation.
///
/// A closed set of cases so the metrics below are total functions: an
/// expression form the converter does not recognize becomes `Opaque`
/// instead of aborting the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnnotationShape {
    /// Bare or dotted name: `int`, `typing.List`.
    Name(String),
    /// Non-string constant: `None`, `...`, numbers in `Literal[3]`.
    Literal,
    /// String-literal forward reference. The text is kept for display
    /// but never re-parsed; the reference is an opaque leaf.
    ForwardRef(String),
    /// Generic application: `List[int]`, `Dict[str, int]`. The slice
    /// tuple is flattened into `args`.
    Subscript {
        base: String,
        args: Vec<AnnotationShape>,
    },
    /// PEP 604 union: `int | str | None`, flattened across chained `|`.
    Union(Vec<AnnotationShape>),
    /// Bracketed group: the parameter list of `Callable[[int], str]`,
    /// or a bare tuple annotation.
    Group(Vec<AnnotationShape>),
    /// Deprecated `# type: ...` comment, raw text. Not an expression
    /// tree; exempt from the structural metrics.
    Comment(String),
    /// Unrecognized expression, treated as a leaf.
    Opaque,
}

impl AnnotationShape {
    pub fn from_expr(expr: &ast::Expr) -> Self {
        match expr {
            ast::Expr::Name(name) => Self::Name(name.id.to_string()),
            ast::Expr::Attribute(_) => match dotted_name(expr) {
                Some(name) => Self::Name(name),
                None => Self::Opaque,
            },
            ast::Expr::Constant(constant) => match &constant.value {
                ast::Constant::Str(text) => Self::ForwardRef(text.clone()),
                _ => Self::Literal,
            },
            ast::Expr::Subscript(subscript) => {
                let base = dotted_name(&subscript.value).unwrap_or_else(|| "<subscript>".to_string());
                let args = match subscript.slice.as_ref() {
                    ast::Expr::Tuple(tuple) => {
                        tuple.elts.iter().map(Self::from_expr).collect()
                    }
                    single => vec![Self::from_expr(single)],
                };
                Self::Subscript { base, args }
            }
            ast::Expr::BinOp(binop) if matches!(binop.op, ast::Operator::BitOr) => {
                let mut members = Vec::new();
                collect_union_members(expr, &mut members);
                Self::Union(members)
            }
            ast::Expr::Tuple(tuple) => {
                Self::Group(tuple.elts.iter().map(Self::from_expr).collect())
            }
            ast::Expr::List(list) => {
                Self::Group(list.elts.iter().map(Self::from_expr).collect())
            }
            _ => Self::Opaque,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Maximum nesting depth. Leaves are depth 1; each container level
    /// adds one. Comment-style text has no structure and counts as a
    /// single leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Name(_) | Self::Literal | Self::ForwardRef(_) | Self::Opaque | Self::Comment(_) => 1,
            Self::Subscript { args: children, .. } | Self::Union(children) | Self::Group(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    /// Total node count of the shape tree. Each leaf counts once and
    /// each container node counts once, so `List[Dict[str, List[int]]]`
    /// has length 5.
    pub fn flattened_len(&self) -> usize {
        match self {
            Self::Comment(_) => 0,
            Self::Name(_) | Self::Literal | Self::ForwardRef(_) | Self::Opaque => 1,
            Self::Subscript { args: children, .. } | Self::Union(children) | Self::Group(children) => {
                1 + children.iter().map(Self::flattened_len).sum::<usize>()
            }
        }
    }
}

/// One located annotation occurrence: its shape plus the source
/// position violations are attributed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub shape: AnnotationShape,
    pub line: usize,
    pub column: usize,
}

impl Annotation {
    pub fn new(shape: AnnotationShape, line: usize, column: usize) -> Self {
        Self {
            shape,
            line,
            column,
        }
    }
}

fn dotted_name(expr: &ast::Expr) -> Option<String> {
    match expr {
        ast::Expr::Name(name) => Some(name.id.to_string()),
        ast::Expr::Attribute(attribute) => {
            dotted_name(&attribute.value).map(|base| format!("{}.{}", base, attribute.attr))
        }
        _ => None,
    }
}

fn collect_union_members(expr: &ast::Expr, members: &mut Vec<AnnotationShape>) {
    match expr {
        ast::Expr::BinOp(binop) if matches!(binop.op, ast::Operator::BitOr) => {
            collect_union_members(&binop.left, members);
            collect_union_members(&binop.right, members);
        }
        other => members.push(AnnotationShape::from_expr(other)),
    }
}
