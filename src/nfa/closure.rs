use tracing::trace;

use crate::prelude::*;

impl NFA {
    /// Computes the epsilon closure of `states`, that is the smallest superset of `states`
    /// which contains every epsilon successor of each of its members.
    ///
    /// The closure is computed as a fixed point: in every round the epsilon successors of all
    /// current members are collected and merged, until a round adds nothing new. The closure of
    /// the empty set is empty, and since epsilon is reflexive every member of `states` is kept.
    /// Reflexivity needs no stored self loops, the closure starts out as a copy of `states`.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut rounds = 0usize;
        loop {
            rounds += 1;
            let mut delta = StateSet::new();
            for q in closure.iter() {
                if let Some(successors) = self.epsilon.get(q) {
                    delta.union_with(successors);
                }
            }
            if !closure.union_with(&delta) {
                break;
            }
        }
        trace!(
            "epsilon closure of {} is {} after {rounds} rounds",
            states.show(),
            closure.show()
        );
        closure
    }

    /// Returns the union of the `symbol` successors of all members of `states`. States that
    /// have no edge labeled with `symbol` contribute nothing.
    pub fn post(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        let mut reach = StateSet::new();
        for q in states.iter() {
            if let Some(successors) = self.successors(q, symbol) {
                reach.union_with(successors);
            }
        }
        reach
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn chain() -> NFA {
        // 0 -ε-> 1 -ε-> 2 -ε-> 3, 3 -ε-> 1 and a single symbol edge 3 -a-> 4
        NFABuilder::default()
            .with_accepting([4])
            .with_epsilon_edges([(0, 1), (1, 2), (2, 3), (3, 1)])
            .with_edges([(3, 'a', 4)])
            .into_nfa(5)
    }

    #[test_log::test]
    fn closure_follows_chains_and_cycles() {
        let nfa = chain();
        assert_eq!(
            nfa.epsilon_closure(&StateSet::singleton(0)),
            StateSet::from([0, 1, 2, 3])
        );
        assert_eq!(
            nfa.epsilon_closure(&StateSet::singleton(2)),
            StateSet::from([1, 2, 3])
        );
        assert_eq!(
            nfa.epsilon_closure(&StateSet::singleton(4)),
            StateSet::singleton(4)
        );
    }

    #[test]
    fn closure_of_empty_set_is_empty() {
        assert!(chain().epsilon_closure(&StateSet::new()).is_empty());
    }

    #[test]
    fn closure_is_idempotent_and_extensive() {
        let nfa = chain();
        for set in [
            StateSet::from([0]),
            StateSet::from([2, 4]),
            StateSet::from([0, 1, 2, 3, 4]),
        ] {
            let closure = nfa.epsilon_closure(&set);
            assert!(set.is_subset(&closure));
            assert_eq!(nfa.epsilon_closure(&closure), closure);
        }
    }

    #[test]
    fn post_unions_successors() {
        let nfa = NFABuilder::default()
            .with_edges([(0, 'a', 1), (1, 'a', 2), (1, 'b', 0)])
            .into_nfa(3);
        assert_eq!(nfa.post(&StateSet::from([0, 1]), 'a'), StateSet::from([1, 2]));
        assert_eq!(nfa.post(&StateSet::from([0, 2]), 'b'), StateSet::new());
        assert_eq!(nfa.post(&StateSet::new(), 'a'), StateSet::new());
    }
}
