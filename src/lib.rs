// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod board;
pub mod config;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod data;
mod fs;
mod vec2d;

use std::error::Error;

pub use crate::data::{Dir, Pos, DIRECTIONS};

use crate::config::Strategy;
use crate::level::Level;
use crate::solver::SearchResult;

/// The level shipped with the binary, used when no file is given.
pub const DEFAULT_LEVEL: &str = include_str!("../levels/default.txt");

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<std::path::Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, strategy: Strategy, print_status: bool) -> SearchResult;
}
