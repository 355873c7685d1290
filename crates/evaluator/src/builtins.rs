// Math library functions (sin, cos, sqrt, etc.) and constants
//
// This is the complete allow-list: an expression can reach nothing that is
// not named here. Names follow numpy, with the C/calculator spellings as
// aliases.

use parser::NameTable;
use std::f64::consts;

/// How a builtin combines its arguments, elementwise.
#[derive(Clone, Copy)]
pub enum Kernel {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    /// where(cond, a, b)
    Select,
}

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub kernel: Kernel,
}

impl Builtin {
    pub fn arity(&self) -> usize {
        match self.kernel {
            Kernel::Unary(_) => 1,
            Kernel::Binary(_) => 2,
            Kernel::Select => 3,
        }
    }
}

const fn unary(name: &'static str, f: fn(f64) -> f64) -> Builtin {
    Builtin {
        name,
        kernel: Kernel::Unary(f),
    }
}

const fn binary(name: &'static str, f: fn(f64, f64) -> f64) -> Builtin {
    Builtin {
        name,
        kernel: Kernel::Binary(f),
    }
}

static FUNCTIONS: &[Builtin] = &[
    // Trigonometric
    unary("sin", f64::sin),
    unary("cos", f64::cos),
    unary("tan", f64::tan),
    unary("arcsin", f64::asin),
    unary("asin", f64::asin),
    unary("arccos", f64::acos),
    unary("acos", f64::acos),
    unary("arctan", f64::atan),
    unary("atan", f64::atan),
    binary("arctan2", f64::atan2),
    binary("atan2", f64::atan2),
    binary("hypot", f64::hypot),
    unary("deg2rad", f64::to_radians),
    unary("radians", f64::to_radians),
    unary("rad2deg", f64::to_degrees),
    unary("degrees", f64::to_degrees),
    // Hyperbolic
    unary("sinh", f64::sinh),
    unary("cosh", f64::cosh),
    unary("tanh", f64::tanh),
    unary("arcsinh", f64::asinh),
    unary("asinh", f64::asinh),
    unary("arccosh", f64::acosh),
    unary("acosh", f64::acosh),
    unary("arctanh", f64::atanh),
    unary("atanh", f64::atanh),
    // Exponential and logarithmic
    unary("exp", f64::exp),
    unary("exp2", f64::exp2),
    unary("expm1", f64::exp_m1),
    unary("log", f64::ln),
    unary("ln", f64::ln),
    unary("log10", f64::log10),
    unary("log2", f64::log2),
    unary("log1p", f64::ln_1p),
    // Powers and roots
    unary("sqrt", f64::sqrt),
    unary("cbrt", f64::cbrt),
    unary("square", square),
    binary("power", f64::powf),
    binary("pow", f64::powf),
    // Rounding
    unary("floor", f64::floor),
    unary("ceil", f64::ceil),
    unary("round", f64::round_ties_even),
    unary("rint", f64::round_ties_even),
    unary("trunc", f64::trunc),
    // Sign and magnitude
    unary("abs", f64::abs),
    unary("absolute", f64::abs),
    unary("fabs", f64::abs),
    unary("sign", sign),
    // Comparison-like
    binary("minimum", minimum),
    binary("min", minimum),
    binary("maximum", maximum),
    binary("max", maximum),
    binary("fmin", f64::min),
    binary("fmax", f64::max),
    binary("mod", floor_mod),
    binary("fmod", fmod),
    Builtin {
        name: "where",
        kernel: Kernel::Select,
    },
];

/// Named constants available in every expression.
pub static CONSTANTS: &[(&str, f64)] = &[
    ("pi", consts::PI),
    ("e", consts::E),
    ("tau", consts::TAU),
    ("inf", f64::INFINITY),
    ("nan", f64::NAN),
];

/// Accepted as transparent qualifiers, so `np.sin(x)` means `sin(x)`.
pub static NAMESPACES: &[&str] = &["np", "numpy", "math"];

pub fn function(name: &str) -> Option<&'static Builtin> {
    FUNCTIONS.iter().find(|b| b.name == name)
}

pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|b| b.name)
}

fn square(v: f64) -> f64 {
    v * v
}

// 0 stays 0 and NaN stays NaN, unlike f64::signum
fn sign(v: f64) -> f64 {
    if v.is_nan() || v == 0.0 {
        v
    } else {
        v.signum()
    }
}

// NaN-propagating, unlike f64::min
fn minimum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn maximum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Remainder with the sign of the divisor (Python `%`).
pub fn floor_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Remainder with the sign of the dividend (C `fmod`).
fn fmod(a: f64, b: f64) -> f64 {
    a % b
}

/// The allow-list seen by name resolution, for a given set of variables.
pub struct MathNames {
    variables: &'static [&'static str],
}

impl MathNames {
    /// Bounds: constants and functions, no variables.
    pub const CONSTANTS_ONLY: MathNames = MathNames { variables: &[] };

    /// Function expressions: everything plus `x`.
    pub const FUNCTION_OF_X: MathNames = MathNames {
        variables: &[crate::VARIABLE],
    };
}

impl NameTable for MathNames {
    fn is_variable(&self, ident: &str) -> bool {
        self.variables.contains(&ident)
    }

    fn is_constant(&self, ident: &str) -> bool {
        constant(ident).is_some()
    }

    fn function_arity(&self, ident: &str) -> Option<usize> {
        function(ident).map(Builtin::arity)
    }

    fn is_namespace(&self, namespace: &str) -> bool {
        NAMESPACES.contains(&namespace)
    }
}
