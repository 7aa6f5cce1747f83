//! A line-by-line syntax checker for a small fixed-format assembly language.
//!
//! Each line is split into whitespace-separated tokens and judged on its own.
//! The token count picks a statement shape, and each slot of the shape must
//! not collide with the reserved words its rule forbids:
//!
//! ```
//! # use asm_checker::{check_str, Config};
//! let (report, summary) = check_str("LOOP ADD AREG DATA1\nADD AREG BREG\n", Config::default()).unwrap();
//! assert_eq!(report, "\
//! [VALID] Line 1: LOOP ADD AREG DATA1 \n\
//! Error (Line 2): Invalid Symbolic Name 'ADD'\n\
//! Error (Line 2): Invalid Mnemonic Instruction 'AREG'\n\
//! Error (Line 2): Invalid Symbolic Name (Memory Operand) 'BREG'\n");
//! assert_eq!(summary.invalid, 1);
//! ```

pub mod error;
pub mod config;

pub mod vocab;
pub mod lexer;
pub mod rules;
pub mod validate;

pub mod report;
pub mod diagnostic;
pub mod source;
pub mod check;

pub use check::{check_str, Annotations, Checker, Summary};
pub use config::{Config, ShapePolicy};
pub use error::{Error, Result};
pub use validate::{validate, Verdict, Violation};
