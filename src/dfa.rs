use std::collections::BTreeMap;

use itertools::Itertools;

use crate::prelude::*;

/// A deterministic finite automaton that results from the [`SubsetConstruction`]. Every state
/// corresponds to an epsilon closed set of states of the original [`NFA`], state `0` is the
/// initial one. Each state has at most one transition per symbol, a missing transition means the
/// symbol cannot be read from that state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DFA {
    alphabet: CharAlphabet,
    states: Vec<StateSet>,
    transitions: Vec<BTreeMap<Symbol, usize>>,
    accepting: Vec<bool>,
}

impl DFA {
    pub(crate) fn new(
        alphabet: CharAlphabet,
        states: Vec<StateSet>,
        transitions: Vec<BTreeMap<Symbol, usize>>,
        accepting: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(states.len(), transitions.len());
        debug_assert_eq!(states.len(), accepting.len());
        Self {
            alphabet,
            states,
            transitions,
            accepting,
        }
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// The initial state, which is always `0`.
    pub fn initial(&self) -> usize {
        0
    }

    /// Returns the alphabet of the underlying [`NFA`].
    pub fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    /// Returns all states as sets of NFA states, in the order of their discovery.
    pub fn states(&self) -> &[StateSet] {
        &self.states
    }

    /// Returns the set of NFA states that `state` stands for.
    pub fn subset(&self, state: usize) -> Option<&StateSet> {
        self.states.get(state)
    }

    /// Returns the state that is reached from `state` on `symbol`, if any.
    pub fn successor(&self, state: usize, symbol: Symbol) -> Option<usize> {
        self.transitions.get(state)?.get(&symbol).copied()
    }

    /// Iterates over the outgoing transitions of `state` in ascending symbol order.
    pub fn transitions_from(&self, state: usize) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.transitions
            .get(state)
            .into_iter()
            .flat_map(|map| map.iter().map(|(&sym, &target)| (sym, target)))
    }

    /// Returns true if `state` is accepting, that is if its subset contains an accepting NFA
    /// state.
    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting.get(state).copied().unwrap_or(false)
    }

    /// Returns the indices of all accepting states.
    pub fn accepting_states(&self) -> impl Iterator<Item = usize> + '_ {
        self.accepting
            .iter()
            .enumerate()
            .filter_map(|(q, &acc)| acc.then_some(q))
    }

    /// Runs `word` from the initial state. Returns true if every symbol can be read and the
    /// reached state is accepting.
    pub fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> bool {
        let mut state = self.initial();
        for symbol in word {
            match self.successor(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }

    /// Renders a transition table with one row per state and one column per symbol. Missing
    /// transitions are shown as `-`.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string())
                .chain(std::iter::once("Accepting".to_string()))
                .chain(self.alphabet.universe().map(|sym| sym.show())),
        );
        for (id, set) in self.states.iter().enumerate() {
            let mut row = vec![set.show(), self.is_accepting(id).show()];
            for sym in self.alphabet.universe() {
                row.push(
                    self.successor(id, sym)
                        .and_then(|target| self.subset(target))
                        .map_or_else(|| "-".to_string(), |target| target.show()),
                );
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl std::fmt::Display for DFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, set) in self.states.iter().enumerate() {
            write!(f, "state {}", set.show())?;
            if self.is_accepting(id) {
                write!(f, " accepting")?;
            }
            writeln!(f)?;
            for (symbol, target) in self.transitions_from(id) {
                writeln!(f, "  {symbol} to {}", self.states[target].show())?;
            }
        }
        Ok(())
    }
}

impl Show for DFA {
    fn show(&self) -> String {
        format!(
            "DFA over {} with states {}",
            self.alphabet.show(),
            self.states.iter().map(Show::show).join(", ")
        )
    }
}
