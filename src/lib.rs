//! Parsing and evaluation of arithmetic expressions over `f64`.
//!
//! Two parse modes share one grammar: [`parse`] builds the whole
//! [`Expression`] tree and leaves evaluation to [`Expression::evaluate`],
//! while [`eval_parse`] folds every subexpression into a literal as soon as
//! it is complete.
//!
//! ```
//! let tree = arithparse::parse_str("2 * (1 + 2)").unwrap();
//! assert_eq!(tree.to_string(), "2.00 * (1.00 + 2.00)");
//! assert_eq!(tree.evaluate().unwrap(), 6.0);
//!
//! let folded = arithparse::eval_parse_str("2 * (1 + 2)").unwrap();
//! assert_eq!(folded.size(), 1);
//! ```

mod error;
mod runtime;
mod syntax;

pub use error::{Error, ErrorKind, PResult};
pub use syntax::{eval_parse, eval_parse_str, parse, parse_str, Expression, Operator, Precedence};
