//! Reads an [`NFA`] from its textual description.
//!
//! The first non-blank line holds the number of states, the second one the whitespace separated
//! list of accepting states. Every further line describes one edge as `<from> <to> <symbol>`,
//! where the symbol is a single character. The symbol [`EPSILON`] marks an epsilon edge. Blank
//! lines are skipped everywhere.
//!
//! ```text
//! 3
//! 2
//! 0 1 ε
//! 0 1 a
//! 1 2 b
//! ```

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::prelude::*;

/// Errors that can occur while reading an automaton. Line numbers start at `1` and refer to
/// the unmodified input, blank lines included.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The input contains no line with the number of states.
    #[error("missing number of states, the input is empty")]
    Empty,
    /// A token that should be a state index or count is not a non-negative integer.
    #[error("line {line}: could not parse `{token}` as a number")]
    InvalidNumber { line: usize, token: String },
    /// An automaton needs at least two states.
    #[error("there must be at least 2 states, got {0}")]
    TooFewStates(usize),
    /// The storage for the given number of states cannot be allocated.
    #[error("line {line}: cannot allocate an automaton with {size} states")]
    TooManyStates { line: usize, size: usize },
    /// The line listing the accepting states is missing or empty.
    #[error("line {line}: there must be at least 1 accepting state")]
    MissingAccepting { line: usize },
    /// An edge line does not consist of exactly three fields.
    #[error("line {line}: could not parse edge `{content}`, expected `<from> <to> <symbol>`")]
    Format { line: usize, content: String },
    /// A referenced state does not exist.
    #[error("line {line}: state {index} is out of bounds, there are only {size} states")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        size: usize,
    },
    /// The symbol of an edge is not a single character.
    #[error("line {line}: edge symbol `{symbol}` is not a single character")]
    SymbolArity { line: usize, symbol: String },
}

/// Parses the textual description of an automaton in the format described above.
pub fn parse_nfa(input: &str) -> Result<NFA, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let (line, size) = lines.next().ok_or(ParseError::Empty)?;
    let size = parse_number(line, size.trim())?;
    if size < 2 {
        return Err(ParseError::TooFewStates(size));
    }
    let mut nfa = NFA::try_new(size).map_err(|_| ParseError::TooManyStates { line, size })?;

    let Some((line, accepting)) = lines.next() else {
        return Err(ParseError::MissingAccepting { line: line + 1 });
    };
    for token in accepting.split_whitespace() {
        let state = parse_state(line, token, size)?;
        nfa.set_accepting(state);
    }
    trace!("read {size} states with accepting states {}", nfa.accepting_states().show());

    let mut edges = 0usize;
    for (line, content) in lines {
        let (source, symbol, target) = parse_edge(line, content, size)?;
        nfa.add_edge(source, symbol, target);
        edges += 1;
    }

    if nfa.alphabet().is_empty() {
        warn!("the automaton has no symbol edges, its DFA consists of the initial state only");
    }
    debug!(
        "read NFA with {size} states, {edges} edges and alphabet {}",
        nfa.alphabet().show()
    );
    Ok(nfa)
}

impl std::str::FromStr for NFA {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_nfa(s)
    }
}

fn parse_edge(
    line: usize,
    content: &str,
    size: usize,
) -> Result<(StateIndex, Symbol, StateIndex), ParseError> {
    let fields = content.split_whitespace().collect::<Vec<_>>();
    let [source, target, symbol] = fields.as_slice() else {
        return Err(ParseError::Format {
            line,
            content: content.to_string(),
        });
    };

    let source = parse_state(line, source, size)?;
    let target = parse_state(line, target, size)?;
    let mut chars = symbol.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(ParseError::SymbolArity {
            line,
            symbol: symbol.to_string(),
        });
    };
    Ok((source, symbol, target))
}

fn parse_state(line: usize, token: &str, size: usize) -> Result<StateIndex, ParseError> {
    let index = parse_number(line, token)?;
    if index >= size {
        return Err(ParseError::IndexOutOfRange { line, index, size });
    }
    Ok(index)
}

fn parse_number(line: usize, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
