use crate::data::{MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level - dimensions, walls and each player's goal.
///
/// Never changes once created, everything that moves lives in [`State`].
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) grid: Vec2d<MapCell>,
    goals: Vec<Pos>,
}

impl Board {
    /// `goals[i]` belongs to player `i`.
    ///
    /// Nothing is validated here - walls outside the grid are simply ignored
    /// and the caller is responsible for not putting goals or players on walls.
    pub fn new(rows: usize, cols: usize, walls: &[Pos], goals: Vec<Pos>) -> Board {
        let mut grid = Vec2d::new(rows, cols, MapCell::Empty);
        for &goal in &goals {
            if grid.contains(goal) {
                grid[goal] = MapCell::Goal;
            }
        }
        for &wall in walls {
            if grid.contains(wall) {
                grid[wall] = MapCell::Wall;
            }
        }
        Board { grid, goals }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn goal(&self, player: usize) -> Pos {
        self.goals[player]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.grid[pos] == MapCell::Wall
    }

    pub fn is_occupied_by_other(&self, state: &State, pos: Pos, player: usize) -> bool {
        state
            .players
            .iter()
            .enumerate()
            .any(|(i, &p)| i != player && p == pos)
    }

    /// Whether `player` may enter `pos` in `state`.
    pub fn is_valid_cell(&self, state: &State, pos: Pos, player: usize) -> bool {
        if !self.in_bounds(pos) || self.is_wall(pos) || self.is_occupied_by_other(state, pos, player) {
            return false;
        }
        // finished players are never moved so this never triggers during a search
        if state.reached_goal[player] && pos != self.goal(player) {
            return false;
        }
        true
    }
}
