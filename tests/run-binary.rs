use assert_cmd::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn run_single_step_dfs() {
    let output = r"Solving levels/single-step.txt using dfs...
Total nodes visited: 2
Found solution:
Aa#
...
...

.A#
...
...

Moves: r
Steps: 1
";

    Command::main_binary()
        .unwrap()
        .arg("--dfs")
        .arg("levels/single-step.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_single_step_classic() {
    let output = r"Solving levels/single-step.txt using bfs...
Total nodes visited: 3
Found solution:
P G X
. . .
. . .

. G X
. . .
. . .

Moves: r
Steps: 1
";

    Command::main_binary()
        .unwrap()
        .args(&["-c", "levels/single-step.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution_trace() {
    let output = r"Solving levels/no-solution.txt using ucs...
Total nodes visited: 4
No solution
Visited states:
State 1:
A....
.###.
.#a#.

State 2:
.....
.###.
A#a#.

State 3:
....A
.###.
.#a#.

State 4:
.....
.###.
.#a#A

";

    Command::main_binary()
        .unwrap()
        .args(&["--ucs", "--trace", "levels/no-solution.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_single_step_stats() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["--stats", "levels/single-step.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Solving levels/single-step.txt using bfs...\nVisited new depth: 0\n"));
    assert!(stdout.contains("Total nodes visited: 3\nStates created total: 5\nVisited total: 3\n"));
    assert!(stdout.contains("Depth"));
    assert!(stdout.contains("Unknown (not reached)"));
    assert!(stdout.ends_with("Moves: r\nSteps: 1\n"));
}

#[test]
fn run_default_level() {
    let output = Command::main_binary().unwrap().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Solving default level using bfs...\nTotal nodes visited: 17\n"));
    assert!(stdout.ends_with("Moves: dlur\nSteps: 4\n"));
}

#[test]
fn run_missing_level() {
    let output = Command::main_binary()
        .unwrap()
        .arg("levels/does-not-exist.txt")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Can't load level levels/does-not-exist.txt"));
}

#[test]
fn run_conflicting_strategies() {
    Command::main_binary()
        .unwrap()
        .args(&["--dfs", "--bfs", "levels/single-step.txt"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_play() {
    let output = r"Aa#
...
...

Enter your move (WASD): Invalid! Enter W, A, S, or D.
Enter your move (WASD): Nobody can move that way.
Enter your move (WASD): .A#
...
...

You won!
";

    let mut child = Command::main_binary()
        .unwrap()
        .args(&["--play", "levels/single-step.txt"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"q\nw\nd\n")
        .unwrap();

    child
        .wait_with_output()
        .unwrap()
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_play_until_input_ends() {
    Command::main_binary()
        .unwrap()
        .args(&["-p", "levels/two-players.txt"])
        .assert()
        .success()
        .stdout(".B.A.\n.....\nb...a\n\nEnter your move (WASD): \n");
}
