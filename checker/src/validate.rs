use std::fmt::{Display, Formatter, Result};

use crate::config::ShapePolicy;
use crate::lexer::Statement;
use crate::rules::{shape_for, Breach, Shape, SlotRole};

pub const UNSUPPORTED_SHAPE_MESSAGE: &str = "Unsupported Statement Shape";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Slot { role: SlotRole, breach: Breach },
    UnsupportedShape { token_count: usize },
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Reason::Slot { role, breach } => write!(f, "{}: {}", role, breach),
            Reason::UnsupportedShape { token_count } => {
                write!(f, "no statement form has {} tokens (expected 1-4)", token_count)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Slot index of the offending token. Shape violations point at slot 0.
    pub position: usize,
    pub token: String,
    /// Byte range of the offending text in its line.
    pub range: (usize, usize),
    pub reason: Reason,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match &self.reason {
            Reason::Slot { role, .. } => role.message(),
            Reason::UnsupportedShape { .. } => UNSUPPORTED_SHAPE_MESSAGE,
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} '{}'", self.message(), self.token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Holds the statement's tokens for echoing.
    Valid(Vec<String>),
    Invalid(Vec<Violation>),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        match self {
            Verdict::Valid(_) => true,
            Verdict::Invalid(_) => false,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Valid(_) => &[],
            Verdict::Invalid(violations) => violations,
        }
    }
}

/// Judges one statement. The same statement always gets the same verdict,
/// with violations in slot order.
pub fn validate(statement: &Statement, policy: ShapePolicy) -> Verdict {
    let violations = match shape_for(statement.len()) {
        Some(shape) => check_slots(shape, statement),
        None => check_unmatched(statement, policy),
    };

    if violations.is_empty() {
        Verdict::Valid(statement.texts().map(str::to_string).collect())
    } else {
        Verdict::Invalid(violations)
    }
}

fn check_slots(shape: &Shape, statement: &Statement) -> Vec<Violation> {
    shape.slots.iter()
        .zip(statement.tokens())
        .filter_map(|(rule, token)| {
            rule.constraint.check(token.src).map(|breach| Violation {
                position: token.index,
                token: token.src.to_string(),
                range: (token.start, token.end),
                reason: Reason::Slot { role: rule.role, breach },
            })
        })
        .collect()
}

fn check_unmatched(statement: &Statement, policy: ShapePolicy) -> Vec<Violation> {
    if !policy.rejects_unmatched_shapes() {
        return Vec::new();
    }
    vec![Violation {
        position: 0,
        token: statement.joined(),
        range: statement.span(),
        reason: Reason::UnsupportedShape { token_count: statement.len() },
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::DEFAULT_MAX_TOKENS;
    use crate::rules::STANDALONE_MNEMONICS;
    use crate::vocab::Category;
    use crate::config::ShapePolicy::*;

    use pretty_assertions::assert_eq;

    fn check(line: &str, policy: ShapePolicy) -> Verdict {
        validate(&Statement::tokenize(line, DEFAULT_MAX_TOKENS), policy)
    }

    fn messages(line: &str) -> Vec<String> {
        check(line, Lenient).violations().iter().map(Violation::to_string).collect()
    }

    #[test]
    fn every_colliding_slot_is_reported() {
        let verdict = check("ADD AREG BREG", Lenient);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.violations(), &[
            Violation {
                position: 0,
                token: "ADD".to_string(),
                range: (0, 3),
                reason: Reason::Slot { role: SlotRole::Label, breach: Breach::Reserved(Category::Imperative) },
            },
            Violation {
                position: 1,
                token: "AREG".to_string(),
                range: (4, 8),
                reason: Reason::Slot { role: SlotRole::Mnemonic, breach: Breach::Reserved(Category::Register) },
            },
            Violation {
                position: 2,
                token: "BREG".to_string(),
                range: (9, 13),
                reason: Reason::Slot { role: SlotRole::MemoryOperand, breach: Breach::Reserved(Category::Register) },
            },
        ][..]);
        assert_eq!(messages("ADD AREG BREG"), vec![
            "Invalid Symbolic Name 'ADD'",
            "Invalid Mnemonic Instruction 'AREG'",
            "Invalid Symbolic Name (Memory Operand) 'BREG'",
        ]);
    }

    #[test]
    fn full_statement_is_valid() {
        assert_eq!(
            check("LOOP ADD AREG DATA1", Lenient),
            Verdict::Valid(vec!["LOOP".to_string(), "ADD".to_string(), "AREG".to_string(), "DATA1".to_string()])
        );
    }

    #[test]
    fn register_operand_slot() {
        assert_eq!(messages("L1 MOVER LT X"), vec!["Invalid Register Operand 'LT'"]);
        assert_eq!(messages("L1 MOVER X AREG"), vec!["Invalid Symbolic Name (Memory Operand) 'AREG'"]);
        assert_eq!(messages("L1 MOVER CREG X"), Vec::<String>::new());
    }

    #[test]
    fn two_token_statements() {
        assert_eq!(messages("HERE PRINT"), Vec::<String>::new());
        assert_eq!(messages("BREG DS"), vec![
            "Invalid Symbolic Name 'BREG'",
            "Invalid Mnemonic Instruction 'DS'",
        ]);
    }

    #[test]
    fn standalone_statements() {
        assert!(check("STOP", Lenient).is_valid());
        assert!(check("LTORG", Lenient).is_valid());
        let verdict = check("HALT", Lenient);
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].reason, Reason::Slot {
            role: SlotRole::Mnemonic,
            breach: Breach::NotOneOf(STANDALONE_MNEMONICS),
        });
        assert_eq!(messages("HALT"), vec!["Invalid Mnemonic Instruction 'HALT'"]);
        assert_eq!(messages("ADD"), vec!["Invalid Mnemonic Instruction 'ADD'"]);
    }

    #[test]
    fn lowercase_reserved_words_are_ordinary_names() {
        assert!(check("add areg breg", Lenient).is_valid());
        assert!(check("stop areg", Lenient).is_valid());
    }

    #[test]
    fn unmatched_shapes_are_valid_when_lenient() {
        assert_eq!(check("", Lenient), Verdict::Valid(vec![]));
        assert_eq!(check(" \t ", Lenient), Verdict::Valid(vec![]));
        assert!(check("ADD ADD ADD ADD ADD", Lenient).is_valid());
        assert!(check("1 2 3 4 5 6 7 8 9 10 11 12", Lenient).is_valid());
    }

    #[test]
    fn unmatched_shapes_are_rejected_when_strict() {
        assert_eq!(check("", Strict).violations(), &[Violation {
            position: 0,
            token: String::new(),
            range: (0, 0),
            reason: Reason::UnsupportedShape { token_count: 0 },
        }][..]);

        let verdict = check(" A  B C D E ", Strict);
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].to_string(), "Unsupported Statement Shape 'A B C D E'");
        assert_eq!(verdict.violations()[0].range, (1, 11));
    }

    #[test]
    fn strict_policy_leaves_known_shapes_alone() {
        assert_eq!(check("LOOP ADD AREG DATA1", Strict), check("LOOP ADD AREG DATA1", Lenient));
        assert_eq!(check("ADD AREG BREG", Strict), check("ADD AREG BREG", Lenient));
    }

    #[test]
    fn truncated_statements_are_judged_on_kept_tokens() {
        let statement = Statement::tokenize("STOP", 0);
        assert!(statement.truncated());
        assert_eq!(validate(&statement, Lenient), Verdict::Valid(vec![]));

        let statement = Statement::tokenize("LOOP ADD AREG DATA1 EXTRA", 4);
        assert!(statement.truncated());
        assert!(validate(&statement, Strict).is_valid());
    }

    #[test]
    fn verdicts_are_deterministic() {
        for line in &["ADD AREG BREG", "X DC LT END", "HALT", "", "A B"] {
            assert_eq!(check(line, Strict), check(line, Strict));
        }
    }

    #[test]
    fn reasons_describe_the_breach() {
        let verdict = check("LOOP EQU", Lenient);
        assert_eq!(
            verdict.violations()[0].reason.to_string(),
            "mnemonic: reserved word from Assembler Directives"
        );
        assert_eq!(
            Reason::UnsupportedShape { token_count: 6 }.to_string(),
            "no statement form has 6 tokens (expected 1-4)"
        );
    }
}
