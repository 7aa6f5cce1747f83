use crate::lexer::DEFAULT_MAX_TOKENS;

/// How to judge a statement whose token count matches no rule shape
/// (a blank line, or five or more tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Nothing is checked and the statement is reported valid.
    Lenient,
    /// The statement gets a single "Unsupported Statement Shape" violation.
    Strict,
}

impl ShapePolicy {
    pub fn rejects_unmatched_shapes(&self) -> bool {
        match self {
            ShapePolicy::Lenient => false,
            ShapePolicy::Strict => true,
        }
    }
}

impl Default for ShapePolicy {
    fn default() -> Self {
        ShapePolicy::Lenient
    }
}

/// Limits and policies for a checking run.
///
/// The defaults reproduce the classic checker except for line length: it read
/// lines into a 256 byte buffer, whereas lines are unbounded here unless
/// `max_line_len` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_tokens: usize,
    /// Bytes kept per line; the rest of a longer line is dropped.
    pub max_line_len: Option<usize>,
    pub shape_policy: ShapePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_line_len: None,
            shape_policy: ShapePolicy::default(),
        }
    }
}

impl Config {
    pub fn strict() -> Self {
        Config { shape_policy: ShapePolicy::Strict, ..Config::default() }
    }
}
