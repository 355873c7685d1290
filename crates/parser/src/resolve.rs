//! Name Resolution
//!
//! Checks every identifier and call in a parsed expression against an
//! allow-list before anything is evaluated. Runs AFTER parsing; the evaluator
//! supplies the allow-list through `NameTable`.

use crate::ast::{Expr, ExprKind, Name, Span};
use thiserror::Error;

/// The set of names an expression may refer to.
pub trait NameTable {
    /// Bound variables, such as `x`. Never namespace-qualified.
    fn is_variable(&self, ident: &str) -> bool;

    fn is_constant(&self, ident: &str) -> bool;

    /// Number of arguments the named function takes, if it exists.
    fn function_arity(&self, ident: &str) -> Option<usize>;

    /// Namespaces accepted as transparent qualifiers (`np` in `np.sin`).
    fn is_namespace(&self, namespace: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("undefined name '{name}'")]
    UndefinedName { name: String, span: Span },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String, span: Span },

    #[error("unknown namespace '{namespace}'")]
    UnknownNamespace { namespace: String, span: Span },

    #[error("'{name}' takes {expected} argument(s) but {found} were given")]
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("function '{name}' used as a value")]
    FunctionAsValue { name: String, span: Span },

    #[error("'{name}' is not a function")]
    NotAFunction { name: String, span: Span },
}

impl ResolveError {
    pub fn span(&self) -> &Span {
        match self {
            ResolveError::UndefinedName { span, .. }
            | ResolveError::UnknownFunction { span, .. }
            | ResolveError::UnknownNamespace { span, .. }
            | ResolveError::WrongArity { span, .. }
            | ResolveError::FunctionAsValue { span, .. }
            | ResolveError::NotAFunction { span, .. } => span,
        }
    }
}

/// Check all names in `expr`, reporting every problem found.
pub fn resolve<N: NameTable + ?Sized>(expr: &Expr, names: &N) -> Result<(), Vec<ResolveError>> {
    let mut errors = Vec::new();
    resolve_expr(expr, names, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Recursively analyze expressions
fn resolve_expr<N: NameTable + ?Sized>(expr: &Expr, names: &N, errors: &mut Vec<ResolveError>) {
    match &expr.kind {
        ExprKind::Number(_) => {}

        ExprKind::Identifier(name) => {
            if !check_namespace(name, &expr.span, names, errors) {
                return;
            }
            let ident = name.ident.as_str();
            let is_value = names.is_constant(ident)
                || (name.namespace.is_none() && names.is_variable(ident));

            if !is_value {
                if names.function_arity(ident).is_some() {
                    errors.push(ResolveError::FunctionAsValue {
                        name: name.to_string(),
                        span: expr.span.clone(),
                    });
                } else {
                    errors.push(ResolveError::UndefinedName {
                        name: name.to_string(),
                        span: expr.span.clone(),
                    });
                }
            }
        }

        ExprKind::Unary { expr, .. } => resolve_expr(expr, names, errors),

        ExprKind::Binary { lhs, rhs, .. } => {
            resolve_expr(lhs, names, errors);
            resolve_expr(rhs, names, errors);
        }

        ExprKind::Call {
            func,
            func_span,
            args,
        } => {
            if check_namespace(func, func_span, names, errors) {
                match names.function_arity(&func.ident) {
                    Some(expected) if expected != args.len() => {
                        errors.push(ResolveError::WrongArity {
                            name: func.to_string(),
                            expected,
                            found: args.len(),
                            span: expr.span.clone(),
                        });
                    }
                    Some(_) => {}
                    None if names.is_constant(&func.ident) || names.is_variable(&func.ident) => {
                        errors.push(ResolveError::NotAFunction {
                            name: func.to_string(),
                            span: func_span.clone(),
                        });
                    }
                    None => {
                        errors.push(ResolveError::UnknownFunction {
                            name: func.to_string(),
                            span: func_span.clone(),
                        });
                    }
                }
            }

            // Arguments are checked even when the callee is bad
            for arg in args {
                resolve_expr(arg, names, errors);
            }
        }
    }
}

fn check_namespace<N: NameTable + ?Sized>(
    name: &Name,
    span: &Span,
    names: &N,
    errors: &mut Vec<ResolveError>,
) -> bool {
    match &name.namespace {
        Some(namespace) if !names.is_namespace(namespace) => {
            errors.push(ResolveError::UnknownNamespace {
                namespace: namespace.clone(),
                span: span.clone(),
            });
            false
        }
        _ => true,
    }
}
