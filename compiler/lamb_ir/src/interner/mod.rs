//! String interner for identifiers.
//!
//! Interned strings are leaked so that `lookup` can hand out `&'static str`
//! without holding the lock. The evaluator is single-threaded, but the
//! interner sits behind a `RwLock` so a driver may share one table between
//! several evaluations.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Storage behind the lock.
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Index to string content.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "interner exceeded capacity: {count} strings")
            }
        }
    }
}

impl std::error::Error for InternError {}

/// String interner mapping identifier text to [`Name`]s.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner with the keyword set and the empty string pre-interned.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        let interner = Self {
            table: RwLock::new(InternTable {
                map,
                strings: vec![empty],
            }),
        };
        interner.pre_intern_keywords();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::from_raw(index));
            }
        }

        let mut guard = self.table.write();

        // Another writer may have won the race.
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to `"<unknown>"`.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("<unknown>")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Whether only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    fn pre_intern_keywords(&self) {
        const KEYWORDS: &[&str] = &[
            "if", "then", "else", "let", "rec", "in", "fun", "function", "raise", "true",
            "false", "not",
        ];

        for kw in KEYWORDS {
            self.intern(kw);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
