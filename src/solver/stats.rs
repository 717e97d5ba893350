use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::solver::frontier::SearchNode;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    /// Every pop from the frontier, duplicates and the final state included.
    pub fn total_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<i32>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because depth-first search can jump several depths at once
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

fn count_at(counts: &[i32], depth: usize) -> i32 {
    counts.get(depth).cloned().unwrap_or(0)
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_visited().separated_string(),
            self.total_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let duplicates = self.total_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", (created - visited).separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Visited", "Duplicates", "Unknown (not reached)"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        // created_states is the longest, nothing is visited without being created first
        for depth in 0..self.created_states.len() {
            let created = count_at(&self.created_states, depth);
            let visited = count_at(&self.visited_states, depth);
            let duplicates = count_at(&self.duplicate_states, depth);
            table.add_row(Row::new(
                [depth as i32, created, visited, duplicates, created - visited]
                    .iter()
                    .map(|n| Cell::new(&n.separated_string()))
                    .collect(),
            ));
        }
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    #[test]
    fn counting_by_depth() {
        let node = |dist| SearchNode::new(State::new(Vec::new()), None, dist, 0);

        let mut stats = Stats::new();
        assert!(stats.add_created(&node(0)));
        assert!(stats.add_visited(&node(0)));
        assert!(stats.add_created(&node(2)));
        assert!(!stats.add_created(&node(1)));
        assert!(stats.add_visited(&node(2)));
        assert!(stats.add_duplicate(&node(2)));
        assert!(!stats.add_duplicate(&node(2)));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_visited(), 2);
        assert_eq!(stats.total_duplicates(), 2);
        assert_eq!(stats.created_states, vec![1, 1, 1]);
        assert_eq!(stats.duplicate_states, vec![0, 0, 2]);

        let debug = format!("{:?}", stats);
        assert!(debug.starts_with("total created / visited / reached duplicates:\n3"));

        let display = stats.to_string();
        assert!(display.starts_with("States created total: 3\nVisited total: 2\n"));
        assert!(display.contains("Depth"));
        assert!(display.contains("Unknown (not reached)"));
    }

    #[test]
    fn thousands_separators() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(&SearchNode::new(State::new(Vec::new()), None, 0, 0));
        }
        assert!(stats.to_string().starts_with("States created total: 1,234\n"));
    }
}
