mod backtracking;
mod frontier;
#[cfg(feature = "graph")]
mod graph;
mod stats;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::board::Board;
use crate::config::Strategy;
use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::moves::{self, Moves};
use crate::state::State;
use crate::Solve;

#[cfg(feature = "graph")]
use self::graph::{Graph, Type};

use self::backtracking::{backtrack_path, reconstruct_moves};
use self::frontier::{CostQueue, Frontier, Queue, SearchNode, Stack};

pub use self::stats::Stats;

/// Outcome of a search - finding no solution is not an error.
pub struct SearchResult {
    /// From the initial state to the won one, both included.
    pub path_states: Option<Vec<State>>,
    pub nodes_visited: usize,
    /// Every state popped from the frontier, in order, duplicates included.
    pub trace: Vec<State>,
    pub stats: Stats,
    pub strategy: Strategy,
}

impl SearchResult {
    fn new(
        path_states: Option<Vec<State>>,
        nodes_visited: usize,
        trace: Vec<State>,
        stats: Stats,
        strategy: Strategy,
    ) -> Self {
        Self {
            path_states,
            nodes_visited,
            trace,
            stats,
            strategy,
        }
    }

    /// `None` when there is no solution.
    pub fn moves(&self) -> Option<Moves> {
        self.path_states.as_ref().and_then(|states| reconstruct_moves(states))
    }
}

impl Debug for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "{}: {}", self.strategy, states.len() - 1)?,
        }
        writeln!(f, "nodes visited: {}", self.nodes_visited)?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, strategy: Strategy, print_status: bool) -> SearchResult {
        search(&self.board, &self.state, strategy, print_status)
    }
}

pub fn search(board: &Board, initial: &State, strategy: Strategy, print_status: bool) -> SearchResult {
    debug!("Searching using {}", strategy);

    let arena = Arena::new();
    match strategy {
        Strategy::DepthFirst => traverse(board, initial, strategy, &arena, Stack::default(), print_status),
        Strategy::BreadthFirst => traverse(board, initial, strategy, &arena, Queue::default(), print_status),
        Strategy::UniformCost => traverse(board, initial, strategy, &arena, CostQueue::default(), print_status),
    }
}

/// The loop shared by all strategies, only the frontier differs.
fn traverse<'a, F: Frontier<'a>>(
    board: &Board,
    initial: &State,
    strategy: Strategy,
    arena: &'a Arena<SearchNode<'a>>,
    mut frontier: F,
    print_status: bool,
) -> SearchResult {
    let mut stats = Stats::new();
    let mut visited: FnvHashSet<&'a State> = FnvHashSet::default();
    let mut trace = Vec::new();
    let mut nodes_visited = 0;
    let mut created = 0;

    #[cfg(feature = "graph")]
    let mut graph = Graph::new(board);

    let start: &'a SearchNode<'a> = arena.alloc(SearchNode::new(initial.clone(), None, 0, created));
    created += 1;
    stats.add_created(start);
    #[cfg(feature = "graph")]
    graph.add(start);
    frontier.push(start);

    let solution = loop {
        let cur_node = match frontier.pop() {
            Some(node) => node,
            None => break None,
        };

        nodes_visited += 1;
        trace.push(cur_node.state.clone());
        if stats.add_visited(cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        // checked before duplicates - a state that was already expanded still counts as a win
        if cur_node.state.is_won() {
            #[cfg(feature = "graph")]
            graph.mark(cur_node, Type::Solution);
            break Some(cur_node);
        }

        if !visited.insert(&cur_node.state) {
            stats.add_duplicate(cur_node);
            #[cfg(feature = "graph")]
            graph.mark(cur_node, Type::Duplicate);
            continue;
        }
        #[cfg(feature = "graph")]
        graph.mark(cur_node, Type::Expanded);

        for &dir in &DIRECTIONS {
            for new_state in moves::simulate(board, &cur_node.state, dir) {
                if F::SKIP_VISITED && visited.contains(&new_state) {
                    continue;
                }
                let next_node: &'a SearchNode<'a> = arena.alloc(SearchNode::new(
                    new_state,
                    Some(cur_node),
                    cur_node.dist + 1,
                    created,
                ));
                created += 1;
                stats.add_created(next_node);
                #[cfg(feature = "graph")]
                graph.add(next_node);
                frontier.push(next_node);
            }
        }
        trace!("Expanded node {}, frontier size {}", cur_node.id, frontier.len());
    };

    #[cfg(feature = "graph")]
    {
        if let Err(err) = graph.draw_states() {
            warn!("Failed to draw the state space: {}", err);
        }
    }

    match solution {
        Some(node) => {
            debug!("Solved after {} pops, backtracking path", nodes_visited);
            let path = backtrack_path(node);
            SearchResult::new(Some(path), nodes_visited, trace, stats, strategy)
        }
        None => {
            debug!("Frontier exhausted after {} pops, {} unique states", nodes_visited, visited.len());
            SearchResult::new(None, nodes_visited, trace, stats, strategy)
        }
    }
}
