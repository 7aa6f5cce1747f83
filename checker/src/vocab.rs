//! Reserved vocabularies.
//!
//! Every word the statement language reserves belongs to exactly one [`Category`].
//! The tables are fixed for the life of the process; there is no way to add to them.
//! Rules that need "any of these categories" use a [`CategorySet`].

use std::fmt::{Display, Formatter, Result};

const IMPERATIVE_STATEMENTS: &[&str] = &[
    "STOP", "ADD", "SUB", "MULT", "DIV", "PRINT", "MOVER", "MOVEM", "COMP", "BC",
];
const DECLARATIVE_STATEMENTS: &[&str] = &["DS", "DC", "READ"];
const ASSEMBLER_DIRECTIVES: &[&str] = &["START", "END", "ORIGIN", "EQU", "LTORG"];
const CONDITION_CODES: &[&str] = &["LT", "LE", "GT", "GE", "EQ", "NE"];
const REGISTERS: &[&str] = &["AREG", "BREG", "CREG", "DREG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Imperative,
    Declarative,
    Directive,
    Condition,
    Register,
}

use Category::*;

impl Category {
    /// All categories, in the order they are searched when reporting a collision.
    pub const ALL: [Category; 5] = [Imperative, Declarative, Directive, Condition, Register];

    pub fn members(self) -> &'static [&'static str] {
        match self {
            Imperative => IMPERATIVE_STATEMENTS,
            Declarative => DECLARATIVE_STATEMENTS,
            Directive => ASSEMBLER_DIRECTIVES,
            Condition => CONDITION_CODES,
            Register => REGISTERS,
        }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(self, token: &str) -> bool {
        self.members().contains(&token)
    }

    pub fn name(self) -> &'static str {
        match self {
            Imperative => "Imperative Statements",
            Declarative => "Declarative Statements",
            Directive => "Assembler Directives",
            Condition => "Condition Codes",
            Register => "Registers",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

pub fn belongs(token: &str, category: Category) -> bool {
    category.contains(token)
}

/// A union of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const ALL: CategorySet = CategorySet::of(&Category::ALL);

    pub const fn of(categories: &[Category]) -> CategorySet {
        let mut bits = 0;
        let mut i = 0;
        while i < categories.len() {
            bits |= categories[i].bit();
            i += 1;
        }
        CategorySet(bits)
    }

    pub const fn without(self, category: Category) -> CategorySet {
        CategorySet(self.0 & !category.bit())
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.iter().copied().filter(move |category| self.contains(*category))
    }

    /// The first category in the set that reserves `token`, if any.
    pub fn reserving(self, token: &str) -> Option<Category> {
        self.iter().find(|category| belongs(token, *category))
    }
}
