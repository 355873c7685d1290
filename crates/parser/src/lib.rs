pub mod ast;
pub mod parser;
pub mod error;
pub mod resolve;

pub use error::{syntax_report, SyntaxError};
pub use parser::parse_expression;
pub use resolve::{resolve, NameTable, ResolveError};

#[cfg(test)]
mod tests;
