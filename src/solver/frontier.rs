use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::state::State;

/// A search node - the state plus a link to the node it was expanded from.
///
/// Nodes live in an arena for the duration of one search, so the path to any
/// node is shared with all its siblings instead of being copied into each of them.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dist: i32,
    /// Creation order, unique within a search.
    pub(crate) id: usize,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>, dist: i32, id: usize) -> Self {
        Self {
            state,
            prev,
            dist,
            id,
        }
    }
}

/// The order in which nodes are expanded.
pub(crate) trait Frontier<'a> {
    /// Whether successors which were already expanded are dropped before being queued.
    /// Otherwise they're queued and discarded once popped.
    const SKIP_VISITED: bool;

    fn push(&mut self, node: &'a SearchNode<'a>);

    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;

    fn len(&self) -> usize;
}

/// Depth-first
#[derive(Debug, Default)]
pub(crate) struct Stack<'a>(Vec<&'a SearchNode<'a>>);

impl<'a> Frontier<'a> for Stack<'a> {
    const SKIP_VISITED: bool = false;

    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Breadth-first
#[derive(Debug, Default)]
pub(crate) struct Queue<'a>(VecDeque<&'a SearchNode<'a>>);

impl<'a> Frontier<'a> for Queue<'a> {
    const SKIP_VISITED: bool = false;

    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Uniform-cost - cheapest path first, every move costs 1.
#[derive(Debug, Default)]
pub(crate) struct CostQueue<'a>(BinaryHeap<CostEntry<'a>>);

impl<'a> Frontier<'a> for CostQueue<'a> {
    const SKIP_VISITED: bool = true;

    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push(CostEntry::new(node));
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug)]
pub(crate) struct CostEntry<'a> {
    /// cost, then fewer players on their goals, then FIFO
    key: (i32, usize, usize),
    node: &'a SearchNode<'a>,
}

impl<'a> CostEntry<'a> {
    fn new(node: &'a SearchNode<'a>) -> Self {
        let key = (node.dist, node.state.reached_cnt(), node.id);
        CostEntry { key, node }
    }
}

impl PartialOrd for CostEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other.key.cmp(&self.key)
    }
}

impl PartialEq for CostEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CostEntry<'_> {}
