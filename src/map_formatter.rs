use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::data::{Contents, MapCell, Pos};
use crate::state::State;

pub struct MapFormatter<'a> {
    board: &'a Board,
    state: Option<&'a State>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub fn new(board: &'a Board, state: Option<&'a State>, format: Format) -> Self {
        Self {
            board,
            state,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.board.grid;

        let mut state_grid = grid.scratchpad(Contents::Empty);
        if let Some(state) = self.state {
            for (i, &pos) in state.players.iter().enumerate() {
                if grid.contains(pos) {
                    state_grid[pos] = Contents::Player(i);
                }
            }
        }

        let mut goal_grid = grid.scratchpad(None);
        for (i, &goal) in self.board.goals().iter().enumerate() {
            if grid.contains(goal) {
                goal_grid[goal] = Some(i);
            }
        }

        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let pos = Pos::new(r as i32, c as i32);
                match self.format {
                    Format::Letters => Self::write_cell_letters(grid[pos], state_grid[pos], goal_grid[pos], f)?,
                    Format::Classic => {
                        if c > 0 {
                            write!(f, " ")?;
                        }
                        Self::write_cell_classic(grid[pos], state_grid[pos], f)?
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_letters(
        cell: MapCell,
        contents: Contents,
        goal: Option<usize>,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        match (cell, contents, goal) {
            (MapCell::Wall, _, _) => write!(f, "#"),
            (_, Contents::Player(i), _) => write!(f, "{}", letter(i, b'A')),
            (_, Contents::Empty, Some(i)) => write!(f, "{}", letter(i, b'a')),
            (_, Contents::Empty, None) => write!(f, "."),
        }
    }

    fn write_cell_classic(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        // goals are drawn over players
        match (cell, contents) {
            (MapCell::Wall, _) => write!(f, "X"),
            (MapCell::Goal, _) => write!(f, "G"),
            (MapCell::Empty, Contents::Player(_)) => write!(f, "P"),
            (MapCell::Empty, Contents::Empty) => write!(f, "."),
        }
    }
}

fn letter(i: usize, base: u8) -> char {
    if i < 26 {
        (base + i as u8) as char
    } else {
        '?'
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
