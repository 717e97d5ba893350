use crate::data::Pos;

/// One configuration of the board.
///
/// Equality and hashing cover both the positions and the reached flags,
/// so a state is its own deduplication key no matter how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub players: Vec<Pos>,
    pub reached_goal: Vec<bool>,
}

impl State {
    /// Starting configuration - nobody has reached their goal yet.
    pub fn new(players: Vec<Pos>) -> State {
        let reached_goal = vec![false; players.len()];
        State {
            players,
            reached_goal,
        }
    }

    pub fn is_won(&self) -> bool {
        self.reached_goal.iter().all(|&reached| reached)
    }

    pub fn reached_cnt(&self) -> usize {
        self.reached_goal.iter().filter(|&&reached| reached).count()
    }
}
