use crate::prelude::*;

use super::StateIndex;

/// Helper struct for the construction of an [`NFA`] from lists of edges. It collects accepting
/// states, symbol edges and epsilon edges and only creates the automaton once the number of
/// states is known.
///
/// # Example
///
/// We want an automaton with the three states 0, 1 and 2, where 2 is accepting. It should read
/// an `a` from 0 to 1, can move from 0 to 1 without reading anything, and reads a `b` from 1
/// to 2.
/// ```
/// use nfa2dfa::prelude::*;
///
/// let nfa = NFABuilder::default()
///     .with_accepting([2])
///     .with_edges([(0, 'a', 1), (1, 'b', 2)])
///     .with_epsilon_edges([(0, 1)])
///     .into_nfa(3);
/// assert_eq!(nfa.size(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NFABuilder {
    accepting: Vec<StateIndex>,
    edges: Vec<(StateIndex, Symbol, StateIndex)>,
    epsilon: Vec<(StateIndex, StateIndex)>,
}

impl NFABuilder {
    /// Marks all given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = StateIndex>>(mut self, iter: I) -> Self {
        self.accepting.extend(iter);
        self
    }

    /// Adds a list of edges, each given as `(source, symbol, target)`. An edge labeled with
    /// [`EPSILON`] is treated as an epsilon edge.
    pub fn with_edges<I: IntoIterator<Item = (StateIndex, Symbol, StateIndex)>>(
        mut self,
        iter: I,
    ) -> Self {
        self.edges.extend(iter);
        self
    }

    /// Adds a list of epsilon edges, each given as `(source, target)`.
    pub fn with_epsilon_edges<I: IntoIterator<Item = (StateIndex, StateIndex)>>(
        mut self,
        iter: I,
    ) -> Self {
        self.epsilon.extend(iter);
        self
    }

    /// Builds an [`NFA`] with `size` states from the collected data.
    ///
    /// # Panics
    /// If one of the collected states is not smaller than `size`.
    pub fn into_nfa(self, size: usize) -> NFA {
        let mut nfa = NFA::new(size);
        for q in self.accepting {
            nfa.set_accepting(q);
        }
        for (source, symbol, target) in self.edges {
            nfa.add_edge(source, symbol, target);
        }
        for (source, target) in self.epsilon {
            nfa.add_epsilon_edge(source, target);
        }
        nfa
    }
}
