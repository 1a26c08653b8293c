use bit_set::BitSet;
use itertools::Itertools;

use crate::{nfa::StateIndex, Show};

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// A set of NFA states. This is backed by a [`BitSet`], so two sets with the same members
/// compare and hash equal regardless of the order in which the members were inserted. That
/// makes it usable as the canonical key of a DFA state in the subset construction.
#[derive(Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StateSet(BitSet);

impl StateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set containing only `q`.
    pub fn singleton(q: StateIndex) -> Self {
        let mut set = Self::new();
        set.insert(q);
        set
    }

    /// Inserts `q`, returning `true` if it was not present before.
    pub fn insert(&mut self, q: StateIndex) -> bool {
        self.0.insert(q)
    }

    /// Returns true if `q` is a member.
    pub fn contains(&self, q: StateIndex) -> bool {
        self.0.contains(q)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds all members of `other` to `self` and returns `true` if this added at least one
    /// state that was not present before.
    pub fn union_with(&mut self, other: &StateSet) -> bool {
        let before = self.len();
        self.0.union_with(&other.0);
        self.len() > before
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns true if `self` and `other` share at least one member.
    pub fn intersects(&self, other: &StateSet) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.0.iter()
    }
}

impl Extend<StateIndex> for StateSet {
    fn extend<T: IntoIterator<Item = StateIndex>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl FromIterator<StateIndex> for StateSet {
    fn from_iter<T: IntoIterator<Item = StateIndex>>(iter: T) -> Self {
        Self(BitSet::from_iter(iter))
    }
}

impl<const N: usize> From<[StateIndex; N]> for StateSet {
    fn from(value: [StateIndex; N]) -> Self {
        value.into_iter().collect()
    }
}

impl Show for StateSet {
    fn show(&self) -> String {
        if self.is_empty() {
            "∅".to_string()
        } else {
            format!("{{{}}}", self.iter().join(", "))
        }
    }
}

impl std::fmt::Debug for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::StateSet;
    use crate::math::Set;
    use crate::Show;

    #[test]
    fn equality_ignores_insertion_order() {
        let left = StateSet::from([3, 1, 2]);
        let mut right = StateSet::new();
        right.insert(2);
        right.insert(3);
        right.insert(1);
        assert_eq!(left, right);

        let mut seen = Set::default();
        seen.insert(left);
        assert!(seen.contains(&right));
    }

    #[test]
    fn union_reports_growth() {
        let mut set = StateSet::from([0, 1]);
        assert!(!set.union_with(&StateSet::from([1])));
        assert!(set.union_with(&StateSet::from([1, 4])));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 4]);
    }

    #[test]
    fn show_state_sets() {
        assert_eq!(StateSet::new().show(), "∅");
        assert_eq!(StateSet::from([2, 0]).show(), "{0, 2}");
    }
}
