//! Fail-fast JSON syntax validation.
//!
//! This crate answers one question: is a byte buffer a single well-formed
//! JSON document? It builds no value tree and tracks no positions — the
//! verdict is the whole product. Validation is a single forward pass of
//! recursive descent over the buffer, `O(n)` in its length, with no
//! allocation and no I/O.
//!
//! ```
//! use jsoncheck::validate;
//!
//! assert!(validate(b"{\"key\": [1, 2.5e-3, null]}"));
//! assert!(!validate(b"[1, 2,]"));
//! ```
//!
//! Nesting depth of arrays and objects is bounded (128 levels by default) so
//! adversarial input cannot exhaust the call stack; see
//! [`ValidatorOptions::max_depth`].

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod scanner;
mod validator;

pub use error::SyntaxError;
pub use options::{DEFAULT_MAX_DEPTH, ValidatorOptions};
pub use validator::{check, check_with, validate, validate_with};
