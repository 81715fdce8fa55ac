//! Runs the solver binary end to end on diagrams written to a temp directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const PHILIDOR: &str = "\
----R--K
------PP
-------n
---q----
--------
--------
--------
-k------
";

const HELPMATE: &str = "\
-------K
-P------
------k-
--------
--------
--------
--------
r-------
";

const WHITE_STALEMATED: &str = "\
-------K
--------
--------
--------
--------
-Q------
--------
k-------
";

fn write_diagram(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_etude-solver"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run etude-solver")
}

#[test]
fn solves_mate_in_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_diagram(dir.path(), "philidor.txt", PHILIDOR);

    let output = run(dir.path(), &["-i", input.to_str().unwrap(), "-t", "mate_in_2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("8| - - - - R - - K |"));
    assert!(stdout.contains("1. Qg8+ is the solution!"));
    assert!(stdout.contains("1... Rxg8"));
    assert!(stdout.contains("2. Nf7#"));
}

#[test]
fn reports_missing_solution() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_diagram(dir.path(), "stalemate.txt", WHITE_STALEMATED);

    let output = run(dir.path(), &["-i", input.to_str().unwrap(), "-t", "selfmate"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No solution found."));
    assert!(stdout.contains("en passant"));
}

#[test]
fn helpmate_json_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_diagram(dir.path(), "helpmate.txt", HELPMATE);
    std::fs::write(
        dir.path().join("etude.toml"),
        "num_solutions = 2\nformat = \"json\"\nlog_level = \"warn\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["-i", input.to_str().unwrap(), "-t", "helpmate"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["etude"], "helpmate");
    assert_eq!(value["helpmates"].as_array().unwrap().len(), 2);
    assert_eq!(value["limit_reached"], true);
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_diagram(dir.path(), "helpmate.txt", HELPMATE);
    std::fs::write(dir.path().join("etude.toml"), "format = \"json\"\n").unwrap();

    let output = run(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-t", "helpmate", "-n", "3", "-f", "text"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Solution #3: 1. b6"));
    assert!(stdout.contains("All 3 requested solutions were found."));
}

#[test]
fn rejects_unknown_type() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_diagram(dir.path(), "philidor.txt", PHILIDOR);

    let output = run(dir.path(), &["-i", input.to_str().unwrap(), "-t", "mate_in_9"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("mate_in_9"));
}

#[test]
fn rejects_malformed_diagram() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_diagram(dir.path(), "bad.txt", "kK\n");

    let output = run(dir.path(), &["-i", input.to_str().unwrap(), "-t", "mate_in_2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid diagram"));
}
