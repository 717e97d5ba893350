use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::{Format, Strategy};
use crate::data::{Dir, Pos};
use crate::map_formatter::MapFormatter;
use crate::moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::SearchResult;
use crate::state::State;
use crate::Solve;

/// A board together with the state being played.
#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    pub fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn is_valid_move(&self, pos: Pos, player: usize) -> bool {
        self.board.is_valid_cell(&self.state, pos, player)
    }

    pub fn simulate(&self, state: &State, dir: Dir) -> Vec<State> {
        moves::simulate(&self.board, state, dir)
    }

    /// Manual play - moves to the first successor in `dir`.
    ///
    /// Returns `false` and leaves the state alone when nobody can move that way.
    pub fn apply(&mut self, dir: Dir) -> bool {
        match self.simulate(&self.state, dir).into_iter().next() {
            Some(new_state) => {
                self.state = new_state;
                true
            }
            None => false,
        }
    }

    pub fn run_depth_first(&self) -> SearchResult {
        self.solve(Strategy::DepthFirst, false)
    }

    pub fn run_breadth_first(&self) -> SearchResult {
        self.solve(Strategy::BreadthFirst, false)
    }

    pub fn run_uniform_cost(&self) -> SearchResult {
        self.solve(Strategy::UniformCost, false)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.board, Some(&self.state), format)
    }

    pub fn format_state<'a>(&'a self, state: &'a State, format: Format) -> MapFormatter<'a> {
        MapFormatter::new(&self.board, Some(state), format)
    }

    pub fn format_solution<'a>(&'a self, states: &'a [State], format: Format) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.board, states, format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Letters))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
