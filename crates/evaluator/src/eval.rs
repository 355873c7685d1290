// Tree-walking evaluator
//
// Each operator dispatches on operand shape: scalar with scalar, scalar
// broadcast over a vector, or vector with vector elementwise.

use crate::builtins::{self, Kernel};
use crate::error::EvalError;
use crate::value::{LengthMismatch, Value};
use parser::ast::{BinaryOp, Expr, ExprKind, Name, Span, UnaryOp};
use parser::ResolveError;

/// Evaluation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Fail instead of producing NaN/inf when an operation maps finite
    /// input to a non-finite result (log of a negative, division by zero).
    pub strict: bool,
}

/// Variables bound for one evaluation. Constants are always visible.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    variables: Vec<(String, Value)>,
}

impl Scope {
    pub fn constants_only() -> Self {
        Scope::default()
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.push((name.into(), value));
        self
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    fn lookup(&self, name: &Name) -> Option<Value> {
        if name.namespace.is_none() {
            if let Some(value) = self.variable(&name.ident) {
                return Some(value.clone());
            }
        }
        builtins::constant(&name.ident).map(Value::Scalar)
    }
}

/// Samples whose values can reach the result. `where` narrows this for
/// each branch, so strict checks ignore samples the branch discards.
#[derive(Debug, Clone)]
enum Active {
    All,
    Nothing,
    Only(Vec<bool>),
}

impl Active {
    fn at(&self, i: usize) -> bool {
        match self {
            Active::All => true,
            Active::Nothing => false,
            Active::Only(mask) => mask.get(i).copied().unwrap_or(false),
        }
    }

    fn any(&self) -> bool {
        match self {
            Active::All => true,
            Active::Nothing => false,
            Active::Only(mask) => mask.contains(&true),
        }
    }

    /// Keep the samples where `cond` is truthy (or falsy, for `taken == false`).
    fn narrow(&self, cond: &Value, taken: bool) -> Active {
        match cond {
            Value::Scalar(c) if (*c != 0.0) == taken => self.clone(),
            Value::Scalar(_) => Active::Nothing,
            Value::Vector(c) => Active::Only(
                c.iter()
                    .enumerate()
                    .map(|(i, &v)| self.at(i) && (v != 0.0) == taken)
                    .collect(),
            ),
        }
    }
}

pub struct Evaluator<'a> {
    scope: &'a Scope,
    options: EvalOptions,
}

impl<'a> Evaluator<'a> {
    pub fn new(scope: &'a Scope, options: EvalOptions) -> Self {
        Evaluator { scope, options }
    }

    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        self.eval_active(expr, &Active::All)
    }

    fn eval_active(&self, expr: &Expr, active: &Active) -> Result<Value, EvalError> {
        match &expr.kind {
            ExprKind::Number(value) => Ok(Value::Scalar(*value)),

            ExprKind::Identifier(name) => self.scope.lookup(name).ok_or_else(|| {
                EvalError::Unresolved(ResolveError::UndefinedName {
                    name: name.to_string(),
                    span: expr.span.clone(),
                })
            }),

            ExprKind::Unary { op, expr: operand } => {
                let value = self.eval_active(operand, active)?;
                Ok(match op {
                    UnaryOp::Negate => value.map(|v| -v),
                    UnaryOp::Plus => value,
                })
            }

            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = self.eval_active(lhs, active)?;
                let rhs = self.eval_active(rhs, active)?;
                let result = lhs
                    .zip_map(&rhs, binary_kernel(*op))
                    .map_err(|e| length_error(e, &expr.span))?;
                self.check_domain(op.symbol(), &expr.span, &[&lhs, &rhs], &result, active)?;
                Ok(result)
            }

            ExprKind::Call {
                func,
                func_span,
                args,
            } => self.eval_call(func, func_span, args, &expr.span, active),
        }
    }

    fn eval_call(
        &self,
        func: &Name,
        func_span: &Span,
        args: &[Expr],
        span: &Span,
        active: &Active,
    ) -> Result<Value, EvalError> {
        let builtin = builtins::function(&func.ident).ok_or_else(|| {
            EvalError::Unresolved(ResolveError::UnknownFunction {
                name: func.to_string(),
                span: func_span.clone(),
            })
        })?;

        if builtin.arity() != args.len() {
            return Err(EvalError::Unresolved(ResolveError::WrongArity {
                name: func.to_string(),
                expected: builtin.arity(),
                found: args.len(),
                span: span.clone(),
            }));
        }

        let (result, values) = match builtin.kernel {
            Kernel::Select => return self.eval_where(args, span, active),
            Kernel::Unary(f) => {
                let arg = self.eval_active(&args[0], active)?;
                (arg.map(f), vec![arg])
            }
            Kernel::Binary(f) => {
                let lhs = self.eval_active(&args[0], active)?;
                let rhs = self.eval_active(&args[1], active)?;
                let result = lhs.zip_map(&rhs, f).map_err(|e| length_error(e, span))?;
                (result, vec![lhs, rhs])
            }
        };

        let inputs: Vec<&Value> = values.iter().collect();
        self.check_domain(builtin.name, span, &inputs, &result, active)?;
        Ok(result)
    }

    /// where(cond, a, b) only picks between its inputs, so it cannot create
    /// NaN itself. Each branch is checked only where it is picked.
    fn eval_where(&self, args: &[Expr], span: &Span, active: &Active) -> Result<Value, EvalError> {
        let cond = self.eval_active(&args[0], active)?;
        let then = self.eval_active(&args[1], &active.narrow(&cond, true))?;
        let otherwise = self.eval_active(&args[2], &active.narrow(&cond, false))?;
        Value::select(&cond, &then, &otherwise).map_err(|e| length_error(e, span))
    }

    /// In strict mode, reject the first active element where all inputs are
    /// finite but the output is not.
    fn check_domain(
        &self,
        operation: &str,
        span: &Span,
        inputs: &[&Value],
        output: &Value,
        active: &Active,
    ) -> Result<(), EvalError> {
        if !self.options.strict || !output.has_non_finite() {
            return Ok(());
        }

        let created = |i: usize| {
            !output.get(i).is_finite() && inputs.iter().all(|input| input.get(i).is_finite())
        };

        let index = match output {
            Value::Scalar(_) => (active.any() && created(0)).then_some(None),
            Value::Vector(v) => (0..v.len()).find(|&i| active.at(i) && created(i)).map(Some),
        };

        match index {
            Some(index) => Err(EvalError::Domain {
                operation: operation.to_string(),
                span: span.clone(),
                index,
            }),
            None => Ok(()),
        }
    }
}

fn length_error(error: LengthMismatch, span: &Span) -> EvalError {
    EvalError::LengthMismatch {
        left: error.left,
        right: error.right,
        span: span.clone(),
    }
}

fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

fn binary_kernel(op: BinaryOp) -> fn(f64, f64) -> f64 {
    match op {
        BinaryOp::Add => |a, b| a + b,
        BinaryOp::Sub => |a, b| a - b,
        BinaryOp::Mul => |a, b| a * b,
        BinaryOp::Div => |a, b| a / b,
        BinaryOp::Mod => builtins::floor_mod,
        BinaryOp::Pow => f64::powf,
        BinaryOp::Eq => |a, b| truth(a == b),
        BinaryOp::NotEq => |a, b| truth(a != b),
        BinaryOp::Lt => |a, b| truth(a < b),
        BinaryOp::Gt => |a, b| truth(a > b),
        BinaryOp::LtEq => |a, b| truth(a <= b),
        BinaryOp::GtEq => |a, b| truth(a >= b),
    }
}
