//! Evaluator for parenthesized prefix-notation integer expressions, such as
//! `(add 1 (multiply 2 3))`.
//!
//! An expression is parsed into a list of objects and evaluated against a
//! registry mapping handler names to callable handlers. The [`standard`]
//! registry binds the arithmetic handlers `add` and `multiply`; callers may
//! extend it with their own.
//!
//! ```
//! use polish::{eval_raw, Object};
//!
//! let result = eval_raw("(add 1 (multiply 2 3))");
//! assert_eq!(result, Ok(Object::from(7)));
//! ```

#[macro_use]
extern crate lazy_static;

mod builtins;
mod error;
mod lexing;
mod parsing;
mod traits;
mod types;

pub mod eval;
pub mod object;

#[cfg(test)]
mod tests;

pub use builtins::standard;
pub use error::Error;
pub use object::Object;
pub use parsing::parse;
pub use types::{Handler, Key, List, NativeFunction, Registry, Type};

/// Parse and evaluate an expression against a registry of handlers.
pub fn eval(input: &str, registry: &Registry) -> Result<Object, Error> {
    parsing::parse(input, registry).and_then(|node| eval::eval(&node, registry))
}

/// Parse and evaluate an expression against the standard registry.
pub fn eval_raw(input: &str) -> Result<Object, Error> {
    eval(input, &builtins::standard())
}
