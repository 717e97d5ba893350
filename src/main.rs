use std::env;
use std::io::{self, prelude::*};
use std::process;

use clap::{App, Arg, ArgGroup};
use log::debug;

use slide_solver::config::{Format, Strategy};
use slide_solver::level::Level;
use slide_solver::{Dir, LoadLevel, Solve, DEFAULT_LEVEL};

fn main() {
    env_logger::init();

    let matches = App::new("slide-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Slides players across a grid until every one of them reaches its goal")
        .arg(
            Arg::with_name("dfs")
                .short("d")
                .long("dfs")
                .help("search depth-first"),
        )
        .arg(
            Arg::with_name("bfs")
                .short("b")
                .long("bfs")
                .help("search breadth-first (default)"),
        )
        .arg(
            Arg::with_name("ucs")
                .short("u")
                .long("ucs")
                .help("search by uniform cost"),
        )
        .group(ArgGroup::with_name("strategy").args(&["dfs", "bfs", "ucs"]))
        .arg(
            Arg::with_name("play")
                .short("p")
                .long("play")
                .conflicts_with("strategy")
                .help("play manually using W/A/S/D"),
        )
        .arg(
            Arg::with_name("classic")
                .short("c")
                .long("classic")
                .help("draw boards using X/G/P"),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("print every state taken from the frontier"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print progress and statistics by depth"),
        )
        .arg(Arg::with_name("file").help("level file, the built-in level is used if omitted"))
        .get_matches();

    let strategy = if matches.is_present("dfs") {
        Strategy::DepthFirst
    } else if matches.is_present("ucs") {
        Strategy::UniformCost
    } else {
        Strategy::BreadthFirst
    };
    let format = if matches.is_present("classic") {
        Format::Classic
    } else {
        Format::Letters
    };

    let (name, level) = match matches.value_of("file") {
        Some(path) => {
            let level = path.load_level().unwrap_or_else(|err| {
                let current_dir = env::current_dir().unwrap_or_default();
                println!("Can't load level {} in {}: {}", path, current_dir.display(), err);
                process::exit(1);
            });
            (path, level)
        }
        None => {
            let level: Level = DEFAULT_LEVEL.parse().unwrap_or_else(|err| {
                println!("Failed to parse the default level: {}", err);
                process::exit(1);
            });
            ("default level", level)
        }
    };
    debug!(
        "Loaded {}: {}x{}, {} players",
        name,
        level.board.rows(),
        level.board.cols(),
        level.state.players.len()
    );

    if matches.is_present("play") {
        play(level, format);
    } else {
        solve(name, &level, strategy, format, matches.is_present("trace"), matches.is_present("stats"));
    }
}

fn solve(name: &str, level: &Level, strategy: Strategy, format: Format, print_trace: bool, print_stats: bool) {
    println!("Solving {} using {}...", name, strategy);
    let result = level.solve(strategy, print_stats);

    println!("Total nodes visited: {}", result.nodes_visited);
    if print_stats {
        println!("{}", result.stats);
    }

    match (&result.path_states, result.moves()) {
        (Some(path), Some(moves)) => {
            println!("Found solution:");
            print!("{}", level.format_solution(path, format));
            println!("Moves: {}", moves);
            println!("Steps: {}", moves.move_cnt());
        }
        _ => println!("No solution"),
    }

    if print_trace {
        println!("Visited states:");
        for (i, state) in result.trace.iter().enumerate() {
            println!("State {}:", i + 1);
            println!("{}", level.format_state(state, format));
        }
    }
}

fn play(mut level: Level, format: Format) {
    println!("{}", level.format(format));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter your move (WASD): ");
        // the prompt is cosmetic, nothing to do if it can't be shown
        let _ = io::stdout().flush();

        let line = match lines.next() {
            None => {
                println!();
                return;
            }
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                println!("Failed to read input: {}", err);
                process::exit(1);
            }
        };

        let dir = match line.trim().chars().next().and_then(Dir::from_key) {
            Some(dir) if line.trim().len() == 1 => dir,
            _ => {
                println!("Invalid! Enter W, A, S, or D.");
                continue;
            }
        };

        if !level.apply(dir) {
            println!("Nobody can move that way.");
            continue;
        }
        println!("{}", level.format(format));

        if level.is_won() {
            println!("You won!");
            return;
        }
    }
}
