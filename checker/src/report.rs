//! The plain report stream: one block per input line.
//!
//! ```text
//! [VALID] Line 2: LOOP ADD AREG DATA1
//! Error (Line 3): Invalid Symbolic Name 'ADD'
//! Error (Line 3): Invalid Mnemonic Instruction 'AREG'
//! ```
//!
//! Echoed tokens are each followed by a single space, trailing one included.

use std::io::{self, Write};

use crate::validate::Verdict;

pub fn write_verdict<W: Write + ?Sized>(out: &mut W, line_number: usize, verdict: &Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Valid(tokens) => {
            write!(out, "[VALID] Line {}: ", line_number)?;
            for token in tokens {
                write!(out, "{} ", token)?;
            }
            writeln!(out)
        }
        Verdict::Invalid(violations) => {
            for violation in violations {
                writeln!(out, "Error (Line {}): {}", line_number, violation)?;
            }
            Ok(())
        }
    }
}
