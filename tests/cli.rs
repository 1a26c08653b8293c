use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn nfa2dfa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nfa2dfa"))
        .args(args)
        .output()
        .unwrap()
}

fn convert(content: &str, flags: &[&str]) -> Output {
    let file = fixture(content);
    let path = file.path().to_str().unwrap().to_string();
    let mut args = flags.to_vec();
    args.push(&path);
    nfa2dfa(&args)
}

#[test]
fn trivial_automaton() {
    let output = convert("2\n1\n0 1 a\n", &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "state {0}\n  a to {1}\nstate {1} accepting\n"
    );
}

#[test]
fn epsilon_branching() {
    let output = convert("3\n2\n0 1 ε\n0 1 a\n0 2 a\n1 2 b\n", &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "state {0, 1}\n  a to {1, 2}\n  b to {2}\nstate {1, 2} accepting\n  b to {2}\nstate {2} accepting\n"
    );
}

#[test]
fn print_flag_keeps_stdout() {
    let content = "3\n2\n0 1 ε\n0 1 a\n0 2 a\n1 2 b\n";
    let plain = convert(content, &[]);
    let traced = convert(content, &["--print"]);
    assert!(traced.status.success());
    assert_eq!(plain.stdout, traced.stdout);
    assert!(String::from_utf8_lossy(&traced.stderr).contains("processed"));
}

#[test]
fn table_output() {
    let output = convert("2\n1\n0 1 a\n", &["--table"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("State"));
    assert!(stdout.contains("{0}"));
    assert!(stdout.contains("{1}"));
}

#[test]
fn malformed_edge() {
    let output = convert("2\n1\n0 1\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not parse edge `0 1`"));
}

#[test]
fn accepting_state_out_of_range() {
    let output = convert("2\n2\n0 1 a\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("state 2 is out of bounds"));
}

#[test]
fn missing_argument() {
    let output = nfa2dfa(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.nfa");
    let output = nfa2dfa(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not read"));
}

#[test]
fn symbol_arity() {
    let output = convert("2\n1\n0 1 ab\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("edge symbol `ab` is not a single character"));
}

#[test]
fn unreachable_symbol() {
    let output = convert("3\n1\n0 1 a\n2 1 z\n", &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "state {0}\n  a to {1}\nstate {1} accepting\n");
    assert!(!stdout.contains('z'));
}

#[test]
fn unallocatable_state_count() {
    let output = convert("100000000000000\n1\n0 1 a\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot allocate"));
}
