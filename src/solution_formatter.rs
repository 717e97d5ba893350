use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::map_formatter::MapFormatter;
use crate::state::State;

/// Prints a sequence of states (a solution path or a search trace), one board after another.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    states: &'a [State],
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(board: &'a Board, states: &'a [State], format: Format) -> Self {
        Self {
            board,
            states,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in self.states {
            writeln!(f, "{}", MapFormatter::new(self.board, Some(state), self.format))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
