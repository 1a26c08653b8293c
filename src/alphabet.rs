use itertools::Itertools;

use crate::Show;

/// A symbol labels a single transition of an automaton. Input files use single characters.
pub type Symbol = char;

/// The reserved symbol that marks an epsilon edge in the textual input format. It labels a
/// transition that consumes no input and is never a member of a [`CharAlphabet`].
pub const EPSILON: Symbol = 'ε';

/// An alphabet of single characters. The symbols are kept sorted and free of duplicates, so
/// iterating over the [`universe`](CharAlphabet::universe) always yields the same order. The
/// subset construction relies on this for reproducible state numbering.
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord, Default)]
pub struct CharAlphabet(Vec<Symbol>);

impl CharAlphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `symbol` to the alphabet, returns `true` if it was not present before.
    ///
    /// # Panics
    /// If `symbol` is [`EPSILON`], as the empty word is not a symbol.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        assert_ne!(symbol, EPSILON, "epsilon cannot be part of an alphabet");
        match self.0.binary_search(&symbol) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, symbol);
                true
            }
        }
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.binary_search(&symbol).is_ok()
    }

    /// Iterates over all symbols in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Symbol> for CharAlphabet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        let mut alphabet = Self::new();
        for symbol in iter {
            alphabet.insert(symbol);
        }
        alphabet
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for CharAlphabet {
    fn show(&self) -> String {
        format!("{{{}}}", self.universe().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_deduplicated() {
        let alphabet = CharAlphabet::from_iter(['c', 'a', 'b', 'a']);
        assert_eq!(alphabet.universe().collect::<String>(), "abc");
        assert_eq!(alphabet.size(), 3);
        assert!(alphabet.contains('b'));
        assert!(!alphabet.contains('d'));
        assert_eq!(alphabet.show(), "{a, b, c}");
    }

    #[test]
    #[should_panic]
    fn rejects_epsilon() {
        CharAlphabet::new().insert(EPSILON);
    }
}
