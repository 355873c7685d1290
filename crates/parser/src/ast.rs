// crates/parser/src/ast.rs

use std::fmt;
use std::ops::Range;

/// Byte range of a node in the source text.
pub type Span = Range<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Plus,
}

/// A possibly namespace-qualified name (`x`, `np.sin`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub namespace: Option<String>,
    pub ident: String,
}

impl Name {
    pub fn plain(ident: impl Into<String>) -> Self {
        Name {
            namespace: None,
            ident: ident.into(),
        }
    }

    pub fn qualified(namespace: impl Into<String>, ident: impl Into<String>) -> Self {
        Name {
            namespace: Some(namespace.into()),
            ident: ident.into(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{}", ns, self.ident),
            None => write!(f, "{}", self.ident),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(f64),

    Identifier(Name),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    // Only names are callable; `func_span` covers the callee alone
    Call {
        func: Name,
        func_span: Span,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Identifier(_) => 1,
            ExprKind::Unary { expr, .. } => 1 + expr.size(),
            ExprKind::Binary { lhs, rhs, .. } => 1 + lhs.size() + rhs.size(),
            ExprKind::Call { args, .. } => 1 + args.iter().map(Expr::size).sum::<usize>(),
        }
    }
}

// Fully parenthesized, so the printed form shows how the tree was grouped
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(value) => write!(f, "{}", value),
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::Unary { op, expr } => match op {
                UnaryOp::Negate => write!(f, "(-{})", expr),
                UnaryOp::Plus => write!(f, "(+{})", expr),
            },
            ExprKind::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            ExprKind::Call { func, args, .. } => {
                write!(f, "{}(", func)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
