use std::path::PathBuf;
use std::process::ExitCode;

use nfa2dfa::prelude::*;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::{debug, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{error::ErrorKind, Arg, ArgAction, ArgMatches, Command};

#[derive(Debug, Error)]
enum Error {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn cli() -> Command {
    Command::new("nfa2dfa")
        .about("Converts a nondeterministic finite automaton into a deterministic one using the subset construction")
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("file containing the number of states, the accepting states and one edge per line")
        )
        .arg(
            Arg::new("print")
                .long("print")
                .action(ArgAction::SetTrue)
                .help("prints the steps of the construction to stderr")
        )
        .arg(
            Arg::new("table")
                .long("table")
                .action(ArgAction::SetTrue)
                .help("prints the result as a transition table")
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info")
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };
    let level = if matches.get_flag("print") {
        level.max(filter::LevelFilter::INFO)
    } else {
        level
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let Some(path) = matches.get_one::<PathBuf>("input") else {
        unreachable!("clap enforces the input argument");
    };

    debug!("reading automaton from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    let nfa = parse_nfa(&content)?;

    let start = std::time::Instant::now();
    let dfa = if matches.get_flag("print") {
        let mut construction = SubsetConstruction::new(&nfa);
        while let Some(state) = construction.step() {
            let transitions = construction
                .transitions_from(state)
                .into_iter()
                .flatten()
                .map(|(sym, target)| format!("{sym} -> {}", construction.states()[*target].show()))
                .collect::<Vec<_>>();
            info!(
                "processed {}, transitions [{}], {} pending",
                construction.states()[state].show(),
                transitions.join(", "),
                construction.pending()
            );
        }
        construction.into_dfa()
    } else {
        nfa.subset_construction()
    };
    info!(
        "subset construction produced {} states from {} in {}µs",
        dfa.size(),
        nfa.size(),
        start.elapsed().as_micros()
    );

    if matches.get_flag("table") {
        println!("{}", dfa.transition_table());
    } else {
        print!("{dfa}");
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
