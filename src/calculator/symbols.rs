use std::collections::HashMap;

/// Stores the per-session variable state.
///
/// A flat mapping from identifier to its current numeric value. The table is
/// created empty at session start, shared by every statement in the session,
/// and only goes away when the session ends.
///
/// # Example
/// ```
/// use deskcalc::calculator::symbols::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// assert_eq!(table.value_of("x"), 0.0);
///
/// table.assign("x", 5.0);
/// assert_eq!(table.value_of("x"), 5.0);
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of `name`. A name that has never been assigned is
    /// created on first lookup with the value `0.0`.
    pub fn value_of(&mut self, name: &str) -> f64 {
        match self.entries.get(name) {
            Some(value) => *value,
            None => {
                self.entries.insert(name.to_owned(), 0.0);
                0.0
            },
        }
    }

    /// Creates or updates the entry for `name`. The new value is immediately
    /// visible to later lookups in the same session.
    pub fn assign(&mut self, name: &str, value: f64) {
        self.entries.insert(name.to_owned(), value);
    }

    /// The value of `name`, without creating an entry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// The number of known names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no name has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
