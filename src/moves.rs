use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Dir;
use crate::state::State;

/// Slides every unfinished player in `dir`, one after another.
///
/// All players move on the same working copy so a player processed later
/// collides with the already moved earlier ones. A snapshot is taken after
/// each player that actually moved, which means only the first successor
/// is guaranteed to differ from `state` by a single player.
pub fn simulate(board: &Board, state: &State, dir: Dir) -> Vec<State> {
    let mut working = state.clone();
    let mut new_states = Vec::new();

    for i in 0..working.players.len() {
        if working.reached_goal[i] {
            continue;
        }

        let start = working.players[i];
        let mut cur = start;
        loop {
            let next = cur + dir;
            if !board.is_valid_cell(&working, next, i) {
                break;
            }
            cur = next;
            if cur == board.goal(i) {
                working.reached_goal[i] = true;
                break;
            }
        }

        if cur != start {
            working.players[i] = cur;
            new_states.push(working.clone());
        }
    }

    new_states
}

/// One step of a solution - the direction and the first player it moved.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) dir: Dir,
    pub(crate) player: usize,
}

impl Move {
    pub(crate) fn new(dir: Dir, player: usize) -> Self {
        Move { dir, player }
    }

    pub fn player(self) -> usize {
        self.player
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dir, self.player)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
