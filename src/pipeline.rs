// Plot pipeline
//
// bounds -> point count -> domain -> f(x) -> f'(x) -> integral.
// The first failure ends the run; nothing partial is returned.

use crate::error::{Curve, PlotError};
use calculus::EdgeOrder;
use evaluator::{Domain, EvalOptions, Field, FunctionExpr, PointCount};
use log::info;

/// The four text fields of a plot request, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRequest {
    pub function: String,
    pub start: String,
    pub end: String,
    pub points: String,
}

impl Default for PlotRequest {
    fn default() -> Self {
        PlotRequest {
            function: "sin(x)".to_string(),
            start: "0".to_string(),
            end: "2*pi".to_string(),
            points: PointCount::DEFAULT.to_string(),
        }
    }
}

impl PlotRequest {
    pub fn new(
        function: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        points: impl Into<String>,
    ) -> Self {
        PlotRequest {
            function: function.into(),
            start: start.into(),
            end: end.into(),
            points: points.into(),
        }
    }

    /// Text of the given field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Function => &self.function,
            Field::Start => &self.start,
            Field::End => &self.end,
            Field::Points => &self.points,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotOptions {
    pub edge_order: EdgeOrder,
    pub strict: bool,
}

/// A successful run: four aligned sequences of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Curves {
    x: Vec<f64>,
    y: Vec<f64>,
    dydx: Vec<f64>,
    integral: Vec<f64>,
}

impl Curves {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn dydx(&self) -> &[f64] {
        &self.dydx
    }

    pub fn integral(&self) -> &[f64] {
        &self.integral
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample `i` as `(x, f, f', ∫f)`.
    pub fn row(&self, i: usize) -> (f64, f64, f64, f64) {
        (self.x[i], self.y[i], self.dydx[i], self.integral[i])
    }
}

pub fn run(request: &PlotRequest, options: &PlotOptions) -> Result<Curves, PlotError> {
    let start = evaluator::resolve_bound(Field::Start, &request.start)?;
    let end = evaluator::resolve_bound(Field::End, &request.end)?;
    let count = PointCount::parse(&request.points)?;
    let domain = Domain::linspace(start, end, count);

    let function = FunctionExpr::parse(&request.function)?;
    let eval_options = EvalOptions {
        strict: options.strict,
    };
    let y = function.sample(&domain, &eval_options)?;
    let x = domain.into_points();

    let dydx = calculus::derivative_with(&x, &y, options.edge_order).map_err(|source| {
        PlotError::Computation {
            curve: Curve::Derivative,
            source,
        }
    })?;
    let integral = calculus::integral(&x, &y).map_err(|source| PlotError::Computation {
        curve: Curve::Integral,
        source,
    })?;

    info!(
        "computed f(x) = {} on {} points over [{}, {}]",
        function.source().trim(),
        x.len(),
        start,
        end
    );
    Ok(Curves {
        x,
        y,
        dydx,
        integral,
    })
}
