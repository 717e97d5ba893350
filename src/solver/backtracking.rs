use crate::moves::{Move, Moves};
use crate::solver::frontier::SearchNode;
use crate::state::State;

/// Follows the links back to the initial node, returns the states starting with the initial one.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<State> {
    let mut states = Vec::new();
    let mut cur = Some(final_node);
    while let Some(node) = cur {
        states.push(node.state.clone());
        cur = node.prev;
    }
    states.reverse();
    states
}

/// Recovers the direction of each step of a path.
///
/// Every player that moved in one step moved the same way,
/// so the first one that changed position is enough to tell the direction.
/// Returns `None` if some pair of consecutive states is not connected by a slide.
pub(crate) fn reconstruct_moves(states: &[State]) -> Option<Moves> {
    let mut moves = Moves::default();
    for pair in states.windows(2) {
        let (old, new) = (&pair[0], &pair[1]);
        let (player, dir) = old
            .players
            .iter()
            .zip(&new.players)
            .enumerate()
            .find_map(|(i, (&from, &to))| from.dir_to(to).map(|dir| (i, dir)))?;
        moves.add(Move::new(dir, player));
    }
    Some(moves)
}

#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use super::*;
    use crate::data::Pos;

    #[test]
    fn backtracking() {
        let arena = Arena::new();
        let s0 = State::new(vec![Pos::new(0, 0), Pos::new(2, 0)]);
        let mut s1 = s0.clone();
        s1.players[1] = Pos::new(2, 4);
        let mut s2 = s1.clone();
        s2.players[0] = Pos::new(0, 4);

        let n0 = &*arena.alloc(SearchNode::new(s0.clone(), None, 0, 0));
        let n1 = &*arena.alloc(SearchNode::new(s1.clone(), Some(n0), 1, 1));
        let _sibling = &*arena.alloc(SearchNode::new(s0.clone(), Some(n0), 1, 2));
        let n2 = &*arena.alloc(SearchNode::new(s2.clone(), Some(n1), 2, 3));

        let path = backtrack_path(n2);
        assert_eq!(path, vec![s0.clone(), s1, s2]);
        assert_eq!(backtrack_path(n0), vec![s0]);

        let moves = reconstruct_moves(&path).unwrap();
        assert_eq!(moves.to_string(), "rr");
        let players: Vec<_> = moves.iter().map(|m| m.player()).collect();
        assert_eq!(players, vec![1, 0]);
    }

    #[test]
    fn no_moves_for_single_state() {
        let s0 = State::new(vec![Pos::new(0, 0)]);
        assert_eq!(reconstruct_moves(&[s0]).unwrap().move_cnt(), 0);
    }

    #[test]
    fn unconnected_states_have_no_moves() {
        let s0 = State::new(vec![Pos::new(0, 0)]);
        // diagonal jump
        let s1 = State::new(vec![Pos::new(1, 1)]);
        assert!(reconstruct_moves(&[s0.clone(), s1]).is_none());
        // nobody moved
        assert!(reconstruct_moves(&[s0.clone(), s0]).is_none());
    }
}
