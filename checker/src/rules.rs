//! The positional rule table.
//!
//! A statement's shape is chosen by its token count. Each shape lists one rule
//! per slot, in slot order; a rule names the role the slot plays and the
//! constraint its token has to meet. User-chosen slots (labels, mnemonics,
//! operands) are constrained by the categories they must *not* collide with.
//!
//! | tokens | slot 0 | slot 1 | slot 2 | slot 3 |
//! |--------|--------|--------|--------|--------|
//! | 1 | mnemonic, `STOP`/`LTORG` only | | | |
//! | 2 | label | mnemonic | | |
//! | 3 | label | mnemonic | memory operand | |
//! | 4 | label | mnemonic | register operand | memory operand |

use std::fmt::{Display, Formatter, Result};

use crate::vocab::{Category, CategorySet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Label,
    Mnemonic,
    RegisterOperand,
    MemoryOperand,
}

impl SlotRole {
    /// The report message for a token that breaks this slot's rule.
    pub fn message(self) -> &'static str {
        match self {
            SlotRole::Label => "Invalid Symbolic Name",
            SlotRole::Mnemonic => "Invalid Mnemonic Instruction",
            SlotRole::RegisterOperand => "Invalid Register Operand",
            SlotRole::MemoryOperand => "Invalid Symbolic Name (Memory Operand)",
        }
    }
}

impl Display for SlotRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SlotRole::Label => write!(f, "label"),
            SlotRole::Mnemonic => write!(f, "mnemonic"),
            SlotRole::RegisterOperand => write!(f, "register operand"),
            SlotRole::MemoryOperand => write!(f, "memory operand"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The token must not be reserved by any of these categories.
    Forbidden(CategorySet),
    /// The token must be exactly one of these words.
    OneOf(&'static [&'static str]),
}

/// How a token broke a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breach {
    Reserved(Category),
    NotOneOf(&'static [&'static str]),
}

impl Constraint {
    pub fn check(&self, token: &str) -> Option<Breach> {
        match self {
            Constraint::Forbidden(categories) => categories.reserving(token).map(Breach::Reserved),
            Constraint::OneOf(allowed) => {
                if allowed.contains(&token) {
                    None
                } else {
                    Some(Breach::NotOneOf(*allowed))
                }
            }
        }
    }
}

impl Display for Breach {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Breach::Reserved(category) => write!(f, "reserved word from {}", category),
            Breach::NotOneOf(allowed) => write!(f, "expected one of {}", allowed.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRule {
    pub role: SlotRole,
    pub constraint: Constraint,
}

/// The rules for every slot of one statement shape; slot `i` is `slots[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub slots: &'static [SlotRule],
}

impl Shape {
    pub fn token_count(&self) -> usize {
        self.slots.len()
    }
}

/// Words allowed to stand alone on a line.
pub const STANDALONE_MNEMONICS: &[&str] = &["STOP", "LTORG"];

const SYMBOL: CategorySet = CategorySet::ALL;
const MNEMONIC: CategorySet = CategorySet::ALL.without(Category::Imperative);
const REGISTER: CategorySet = CategorySet::ALL.without(Category::Register);

const LABEL_RULE: SlotRule = SlotRule { role: SlotRole::Label, constraint: Constraint::Forbidden(SYMBOL) };
const MNEMONIC_RULE: SlotRule = SlotRule { role: SlotRole::Mnemonic, constraint: Constraint::Forbidden(MNEMONIC) };
const REGISTER_RULE: SlotRule = SlotRule { role: SlotRole::RegisterOperand, constraint: Constraint::Forbidden(REGISTER) };
const MEMORY_RULE: SlotRule = SlotRule { role: SlotRole::MemoryOperand, constraint: Constraint::Forbidden(SYMBOL) };
const STANDALONE_RULE: SlotRule = SlotRule { role: SlotRole::Mnemonic, constraint: Constraint::OneOf(STANDALONE_MNEMONICS) };

pub static SHAPES: [Shape; 4] = [
    Shape { slots: &[STANDALONE_RULE] },
    Shape { slots: &[LABEL_RULE, MNEMONIC_RULE] },
    Shape { slots: &[LABEL_RULE, MNEMONIC_RULE, MEMORY_RULE] },
    Shape { slots: &[LABEL_RULE, MNEMONIC_RULE, REGISTER_RULE, MEMORY_RULE] },
];

pub fn shape_for(token_count: usize) -> Option<&'static Shape> {
    SHAPES.iter().find(|shape| shape.token_count() == token_count)
}
