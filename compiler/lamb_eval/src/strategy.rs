//! Evaluation strategies.
//!
//! Exactly one strategy drives an evaluation. Selecting it through a single
//! enum keeps contradictory combinations unrepresentable.

use std::fmt;
use std::str::FromStr;

/// Operational semantics used to reduce an expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Return the expression unchanged. Exercises the plumbing only.
    Trivial,
    /// Environment-free reduction by capture-avoiding substitution.
    Substitution,
    /// Function bodies see the caller's environment.
    Dynamic,
    /// Functions close over their defining environment.
    #[default]
    Lexical,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Trivial,
        Strategy::Substitution,
        Strategy::Dynamic,
        Strategy::Lexical,
    ];

    /// The strategies that actually reduce expressions.
    pub const REDUCING: [Strategy; 3] =
        [Strategy::Substitution, Strategy::Dynamic, Strategy::Lexical];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Trivial => "trivial",
            Strategy::Substitution => "substitution",
            Strategy::Dynamic => "dynamic",
            Strategy::Lexical => "lexical",
        }
    }

    /// Whether bindings are resolved through substitution instead of environments.
    #[inline]
    pub const fn substitutes(self) -> bool {
        matches!(self, Strategy::Substitution)
    }

    /// Whether function literals evaluate to closures.
    #[inline]
    pub const fn makes_closures(self) -> bool {
        matches!(self, Strategy::Lexical)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluation strategy `{0}` (expected trivial, substitution, dynamic or lexical)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == lowered)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}
