use std::collections::{BTreeMap, TryReserveError};

use tracing::trace;

use crate::prelude::*;

mod builder;
pub use builder::NFABuilder;

mod closure;

/// States of an [`NFA`] are identified by their position in `0..size`.
pub type StateIndex = usize;

/// A nondeterministic finite automaton with epsilon transitions. State `0` is the initial state.
///
/// The transition table is split into two relations. The symbol relation maps a state and an
/// alphabet symbol to the set of successors, the epsilon relation maps a state to the states
/// it reaches without consuming input. Only explicit epsilon edges are stored, every state is
/// implicitly an epsilon successor of itself.
///
/// # Example
/// ```
/// use nfa2dfa::prelude::*;
///
/// let nfa = NFABuilder::default()
///     .with_accepting([2])
///     .with_edges([(0, 'a', 1), (1, 'b', 2)])
///     .with_epsilon_edges([(0, 1)])
///     .into_nfa(3);
/// assert!(nfa.accepts("ab".chars()));
/// assert!(nfa.accepts("b".chars()));
/// assert!(!nfa.accepts("a".chars()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NFA {
    alphabet: CharAlphabet,
    accepting: Vec<bool>,
    transitions: Vec<BTreeMap<Symbol, StateSet>>,
    epsilon: Vec<StateSet>,
}

impl NFA {
    /// Creates an automaton with `size` states, no edges and no accepting states.
    ///
    /// # Panics
    /// If the memory for `size` states cannot be allocated, see [`NFA::try_new`].
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(nfa) => nfa,
            Err(e) => panic!("could not allocate an automaton with {size} states: {e}"),
        }
    }

    /// Creates an automaton with `size` states, no edges and no accepting states. Returns an
    /// error instead of aborting if the per state storage cannot be allocated.
    pub fn try_new(size: usize) -> Result<Self, TryReserveError> {
        let mut epsilon = Vec::new();
        epsilon.try_reserve_exact(size)?;
        epsilon.resize_with(size, StateSet::new);
        let mut transitions = Vec::new();
        transitions.try_reserve_exact(size)?;
        transitions.resize_with(size, BTreeMap::new);
        let mut accepting = Vec::new();
        accepting.try_reserve_exact(size)?;
        accepting.resize(size, false);

        Ok(Self {
            alphabet: CharAlphabet::new(),
            accepting,
            transitions,
            epsilon,
        })
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.accepting.len()
    }

    /// The initial state, which is always `0`.
    pub fn initial(&self) -> StateIndex {
        0
    }

    /// Returns the alphabet, i.e. all symbols that label at least one non-epsilon edge.
    pub fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    /// Marks `state` as accepting.
    ///
    /// # Panics
    /// If `state` is not a state of the automaton.
    pub fn set_accepting(&mut self, state: StateIndex) {
        self.assert_state(state);
        self.accepting[state] = true;
    }

    /// Returns true if `state` is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting.get(state).copied().unwrap_or(false)
    }

    /// Returns the set of all accepting states.
    pub fn accepting_states(&self) -> StateSet {
        self.accepting
            .iter()
            .enumerate()
            .filter_map(|(q, &acc)| acc.then_some(q))
            .collect()
    }

    /// Adds an edge from `source` to `target` that consumes `symbol`. Passing [`EPSILON`] adds
    /// an epsilon edge instead, the symbol then does not become part of the alphabet.
    ///
    /// # Panics
    /// If `source` or `target` is not a state of the automaton.
    pub fn add_edge(&mut self, source: StateIndex, symbol: Symbol, target: StateIndex) {
        if symbol == EPSILON {
            return self.add_epsilon_edge(source, target);
        }
        self.assert_state(source);
        self.assert_state(target);
        trace!("adding edge ({source}, {symbol}, {target})");
        self.alphabet.insert(symbol);
        self.transitions[source]
            .entry(symbol)
            .or_default()
            .insert(target);
    }

    /// Adds an epsilon edge from `source` to `target`.
    ///
    /// # Panics
    /// If `source` or `target` is not a state of the automaton.
    pub fn add_epsilon_edge(&mut self, source: StateIndex, target: StateIndex) {
        self.assert_state(source);
        self.assert_state(target);
        trace!("adding epsilon edge ({source}, {target})");
        self.epsilon[source].insert(target);
    }

    /// Returns the states reachable from `source` by consuming `symbol`, or `None` if there
    /// is no such edge.
    pub fn successors(&self, source: StateIndex, symbol: Symbol) -> Option<&StateSet> {
        self.transitions.get(source)?.get(&symbol)
    }

    /// Returns the epsilon successors of `source`, which always includes `source` itself.
    pub fn epsilon_successors(&self, source: StateIndex) -> Option<StateSet> {
        let mut successors = self.epsilon.get(source)?.clone();
        successors.insert(source);
        Some(successors)
    }

    /// Simulates the automaton on `word` by tracking the set of all states it can be in.
    /// Returns true if that set contains an accepting state once the word is consumed.
    pub fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> bool {
        let mut current = self.epsilon_closure(&StateSet::singleton(self.initial()));
        for symbol in word {
            if current.is_empty() {
                return false;
            }
            current = self.epsilon_closure(&self.post(&current, symbol));
        }
        current.intersects(&self.accepting_states())
    }

    /// Determinizes `self` through the subset construction.
    pub fn subset_construction(&self) -> DFA {
        SubsetConstruction::new(self).into_dfa()
    }

    fn assert_state(&self, state: StateIndex) {
        assert!(
            state < self.size(),
            "state {state} does not exist, the automaton has {} states",
            self.size()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test_log::test]
    fn epsilon_is_kept_apart_from_alphabet() {
        let mut nfa = NFA::new(3);
        nfa.add_edge(0, EPSILON, 1);
        nfa.add_edge(1, 'b', 2);

        assert_eq!(nfa.alphabet().universe().collect::<Vec<_>>(), vec!['b']);
        assert_eq!(nfa.epsilon_successors(0), Some(StateSet::from([0, 1])));
        assert_eq!(nfa.successors(0, EPSILON), None);
        assert_eq!(nfa.successors(1, 'b'), Some(&StateSet::from([2])));
    }

    #[test]
    fn epsilon_is_reflexive() {
        let nfa = NFA::new(4);
        for q in 0..4 {
            assert!(nfa.epsilon_successors(q).unwrap().contains(q));
        }
        assert_eq!(nfa.epsilon_successors(4), None);
    }

    #[test]
    #[should_panic]
    fn out_of_range_edge() {
        NFA::new(2).add_edge(0, 'a', 2);
    }

    #[test_log::test]
    fn simulation() {
        // accepts all words over {a, b} whose second to last symbol is `a`
        let nfa = NFABuilder::default()
            .with_accepting([2])
            .with_edges([(0, 'a', 0), (0, 'b', 0), (0, 'a', 1), (1, 'a', 2), (1, 'b', 2)])
            .into_nfa(3);

        assert!(nfa.accepts("ab".chars()));
        assert!(nfa.accepts("bbaa".chars()));
        assert!(!nfa.accepts("".chars()));
        assert!(!nfa.accepts("abb".chars()));
        assert!(!nfa.accepts("c".chars()));
        assert_eq!(nfa.accepting_states(), StateSet::from([2]));
    }
}
