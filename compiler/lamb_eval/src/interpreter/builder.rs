//! `InterpreterBuilder` for configuring Interpreter instances.

use lamb_ir::StringInterner;

use super::Interpreter;
use crate::Strategy;

/// Builder for creating Interpreter instances.
///
/// Defaults: lexical strategy, no recursion limit.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    strategy: Strategy,
    max_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            strategy: Strategy::default(),
            max_depth: None,
        }
    }

    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fail with a stack-overflow error past `depth` nested evaluation steps.
    ///
    /// `None` removes the limit; the native stack then grows on demand.
    #[must_use]
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            strategy: self.strategy,
            max_depth: self.max_depth,
            depth: 0,
        }
    }
}
