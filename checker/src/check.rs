//! Runs the pipeline over a whole input: line source, tokenizer, validator,
//! report sink. Lines are handled strictly in order and independently.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::diagnostic::{self, Location};
use crate::error::{Error, Result};
use crate::lexer::Statement;
use crate::report::write_verdict;
use crate::source::SourceLines;
use crate::validate::{validate, Verdict};

/// Totals for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub lines: usize,
    pub valid: usize,
    pub invalid: usize,
    pub violations: usize,
}

impl Summary {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    fn record(&mut self, verdict: &Verdict) {
        self.lines += 1;
        match verdict {
            Verdict::Valid(_) => self.valid += 1,
            Verdict::Invalid(violations) => {
                self.invalid += 1;
                self.violations += violations.len();
            }
        }
    }
}

/// Where annotated diagnostics go, if anywhere.
pub struct Annotations<'a> {
    pub sink: &'a mut dyn Write,
    pub origin: Option<&'a str>,
    pub color: bool,
}

pub struct Checker {
    config: Config,
}

impl Checker {
    pub fn new(config: Config) -> Self {
        Checker { config }
    }

    /// Tokenizes and judges a single line.
    pub fn check_line(&self, line: &str, line_number: usize) -> Verdict {
        let statement = Statement::tokenize(line, self.config.max_tokens);
        if statement.truncated() {
            warn!(line = line_number, max_tokens = self.config.max_tokens, "too many tokens, extra tokens ignored");
        }

        let verdict = validate(&statement, self.config.shape_policy);
        debug!(line = line_number, tokens = statement.len(), valid = verdict.is_valid(), "checked statement");
        verdict
    }

    /// Checks every line of `source`, writing one report block per line to `report`.
    ///
    /// Stops at the first read or write failure; invalid statements never stop a run.
    pub fn run<R, W>(&self, source: SourceLines<R>, report: &mut W, mut annotations: Option<Annotations<'_>>) -> Result<Summary>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        let mut summary = Summary::default();

        for line in source {
            let line = line?;
            let verdict = self.check_line(&line.text, line.number);
            write_verdict(report, line.number, &verdict).map_err(Error::Write)?;

            if let Some(annotations) = annotations.as_mut() {
                let location = Location {
                    line: &line.text,
                    line_number: line.number,
                    origin: annotations.origin,
                };
                for violation in verdict.violations() {
                    let rendered = diagnostic::render(violation, location, annotations.color);
                    writeln!(annotations.sink, "{}", rendered).map_err(Error::Write)?;
                }
            }

            summary.record(&verdict);
        }

        report.flush().map_err(Error::Write)?;
        info!(
            lines = summary.lines,
            valid = summary.valid,
            invalid = summary.invalid,
            violations = summary.violations,
            "finished checking"
        );
        Ok(summary)
    }
}

/// Checks `input` and returns the report text alongside the totals.
pub fn check_str(input: &str, config: Config) -> Result<(String, Summary)> {
    let source = SourceLines::new(input.as_bytes(), config.max_line_len);
    let mut report = Vec::new();
    let summary = Checker::new(config).run(source, &mut report, None)?;
    Ok((String::from_utf8_lossy(&report).into_owned(), summary))
}
