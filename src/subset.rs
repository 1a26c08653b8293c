use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::{math::Map, prelude::*};

/// Represents the subset construction applied to an [`NFA`]. It resolves the nondeterminism by
/// operating on epsilon closed sets of NFA states, each of which becomes one state of the
/// resulting [`DFA`].
///
/// Discovered subsets are numbered in the order in which they are found, the epsilon closure of
/// the initial NFA state has index `0`. The worklist is the list of discovered subsets itself
/// together with a cursor that points at the first unprocessed one, so every subset is processed
/// exactly once and in FIFO order. Symbols are processed in ascending order, which makes the
/// numbering reproducible.
#[derive(Clone, Debug)]
pub struct SubsetConstruction<'a> {
    nfa: &'a NFA,
    states: Vec<StateSet>,
    index: Map<StateSet, usize>,
    transitions: Vec<BTreeMap<Symbol, usize>>,
    cursor: usize,
}

impl<'a> SubsetConstruction<'a> {
    /// Creates a new subset construction for `nfa`, which is seeded with the epsilon closure of
    /// the initial state.
    pub fn new(nfa: &'a NFA) -> Self {
        let mut construction = Self {
            nfa,
            states: vec![],
            index: Map::default(),
            transitions: vec![],
            cursor: 0,
        };
        let initial = nfa.epsilon_closure(&StateSet::singleton(nfa.initial()));
        construction.discover(initial);
        construction
    }

    /// Returns the subsets that have been discovered so far.
    pub fn states(&self) -> &[StateSet] {
        &self.states
    }

    /// Returns the number of discovered subsets that have not been processed yet.
    pub fn pending(&self) -> usize {
        self.states.len() - self.cursor
    }

    /// Returns the index of `set` if it has been discovered already.
    pub fn position(&self, set: &StateSet) -> Option<usize> {
        self.index.get(set).copied()
    }

    /// Processes the next entry of the worklist and returns its index, or `None` if the
    /// worklist is exhausted. For every symbol of the alphabet, the successors of all members
    /// are collected and closed under epsilon. An empty result produces no transition, any
    /// other result is either matched to a known subset or registered as a new one.
    pub fn step(&mut self) -> Option<usize> {
        let source = self.cursor;
        if source >= self.states.len() {
            return None;
        }
        self.cursor += 1;
        let nfa = self.nfa;
        trace!("processing {source}: {}", self.states[source].show());

        for symbol in nfa.alphabet().universe() {
            let reach = nfa.post(&self.states[source], symbol);
            let target = nfa.epsilon_closure(&reach);
            if target.is_empty() {
                continue;
            }
            let target = match self.position(&target) {
                Some(known) => known,
                None => self.discover(target),
            };
            trace!("transition ({source}, {symbol}, {target})");
            self.transitions[source].insert(symbol, target);
        }

        Some(source)
    }

    /// Drains the worklist.
    pub fn run(&mut self) {
        while self.step().is_some() {}
        debug!(
            "subset construction found {} states for an NFA with {} states",
            self.states.len(),
            self.nfa.size()
        );
    }

    /// Drains the worklist and returns the resulting [`DFA`], whose states are marked as
    /// accepting if their subset contains an accepting NFA state.
    pub fn into_dfa(mut self) -> DFA {
        self.run();
        let accepting = self.nfa.accepting_states();
        let accepting = self.states.iter().map(|s| s.intersects(&accepting)).collect();
        DFA::new(
            self.nfa.alphabet().clone(),
            self.states,
            self.transitions,
            accepting,
        )
    }

    /// Returns the outgoing transitions of the discovered subset `state`, which are only
    /// complete once `state` has been processed.
    pub fn transitions_from(&self, state: usize) -> Option<&BTreeMap<Symbol, usize>> {
        self.transitions.get(state)
    }

    fn discover(&mut self, set: StateSet) -> usize {
        let id = self.states.len();
        debug!("discovered state {id}: {}", set.show());
        self.index.insert(set.clone(), id);
        self.states.push(set);
        self.transitions.push(BTreeMap::new());
        id
    }
}
