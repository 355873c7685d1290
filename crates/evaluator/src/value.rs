// Runtime values
//
// `x` is bound to the whole domain, so every operator works on either a
// single number or one number per sample and broadcasts between the two.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Vec<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Vector(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "a single value"),
            Shape::Vector(n) => write!(f, "{} values", n),
        }
    }
}

/// Two vector operands of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::Scalar,
            Value::Vector(v) => Shape::Vector(v.len()),
        }
    }

    /// Element `i`; a scalar broadcasts to every index.
    pub fn get(&self, i: usize) -> f64 {
        match self {
            Value::Scalar(v) => *v,
            Value::Vector(v) => v[i],
        }
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(v) => Value::Scalar(f(*v)),
            Value::Vector(v) => Value::Vector(v.iter().map(|&e| f(e)).collect()),
        }
    }

    pub fn zip_map(&self, other: &Value, f: impl Fn(f64, f64) -> f64) -> Result<Value, LengthMismatch> {
        match broadcast_len(&[self, other])? {
            None => Ok(Value::Scalar(f(self.get(0), other.get(0)))),
            Some(n) => Ok(Value::Vector(
                (0..n).map(|i| f(self.get(i), other.get(i))).collect(),
            )),
        }
    }

    /// Elementwise `if cond != 0 { then } else { otherwise }`.
    pub fn select(cond: &Value, then: &Value, otherwise: &Value) -> Result<Value, LengthMismatch> {
        let pick = |i: usize| {
            if cond.get(i) != 0.0 {
                then.get(i)
            } else {
                otherwise.get(i)
            }
        };
        match broadcast_len(&[cond, then, otherwise])? {
            None => Ok(Value::Scalar(pick(0))),
            Some(n) => Ok(Value::Vector((0..n).map(pick).collect())),
        }
    }

    /// True when any element is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        match self {
            Value::Scalar(v) => !v.is_finite(),
            Value::Vector(v) => v.iter().any(|e| !e.is_finite()),
        }
    }
}

/// Common length of the vector operands, or None if all are scalars.
pub fn broadcast_len(values: &[&Value]) -> Result<Option<usize>, LengthMismatch> {
    let mut len: Option<usize> = None;
    for value in values {
        if let Value::Vector(v) = value {
            match len {
                None => len = Some(v.len()),
                Some(n) if n != v.len() => {
                    return Err(LengthMismatch {
                        left: n,
                        right: v.len(),
                    });
                }
                Some(_) => {}
            }
        }
    }
    Ok(len)
}
