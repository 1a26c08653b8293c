//! Determinization of finite automata through the subset construction.
//!
//! An [`NFA`](nfa::NFA) is a nondeterministic finite automaton over single character symbols,
//! which may additionally have epsilon edges that are taken without consuming any input. Its
//! transition table keeps the two kinds of edges apart: symbol edges map a state and a symbol to
//! a set of successors, epsilon edges map a state to the states reachable for free. Every state
//! is an epsilon successor of itself.
//!
//! The [`SubsetConstruction`](subset::SubsetConstruction) turns such an automaton into an
//! equivalent [`DFA`](dfa::DFA). Its states are epsilon closed sets of NFA states, which are
//! discovered starting from the closure of the initial state `0`. A worklist processes each
//! discovered set once, and for every symbol computes the closure of all successors. Sets are
//! deduplicated through a hash index keyed by their members, and symbols are always visited in
//! ascending order, so the numbering of DFA states is the same on every run.
//!
//! ```
//! use nfa2dfa::prelude::*;
//!
//! let nfa: NFA = "3\n2\n0 1 ε\n0 1 a\n0 2 a\n1 2 b\n".parse().unwrap();
//! let dfa = nfa.subset_construction();
//! assert_eq!(dfa.size(), 3);
//! assert!(dfa.accepts("ab".chars()));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use nfa2dfa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{CharAlphabet, Symbol, EPSILON},
        dfa::DFA,
        input::{parse_nfa, ParseError},
        math::StateSet,
        nfa::{NFABuilder, StateIndex, NFA},
        subset::SubsetConstruction,
        Show,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the
/// crate, most importantly sets of states.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Nondeterministic automata with epsilon edges and the computation of epsilon closures.
#[allow(clippy::upper_case_acronyms)]
pub mod nfa;

/// Implements the subset construction.
pub mod subset;

/// Defines the deterministic automata produced by the subset construction.
#[allow(clippy::upper_case_acronyms)]
pub mod dfa;

pub mod input;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that should be
    /// for example 0, 1, 2, ... and for a set of states it should be {0, 1, 2}.
    fn show(&self) -> String;
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Show;

    #[test]
    fn show_primitives() {
        assert_eq!(3usize.show(), "3");
        assert_eq!(true.show(), "+");
        assert_eq!((&false).show(), "-");
    }
}
