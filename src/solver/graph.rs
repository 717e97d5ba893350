use std::borrow::Cow;
use std::fs;
use std::io;
use std::process::Command;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::board::Board;
use crate::config::Format;
use crate::map_formatter::MapFormatter;
use crate::solver::frontier::SearchNode;

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Type {
    Queued,
    Duplicate,
    Expanded,
    Solution,
}

/// The search tree of one run, nodes are indexed by their creation order.
#[derive(Debug)]
pub(crate) struct Graph<'a> {
    board: &'a Board,
    nodes: Vec<(&'a SearchNode<'a>, Type)>,
    edges: Vec<Ed>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, node: &'a SearchNode<'a>) {
        assert_eq!(node.id, self.nodes.len(), "Nodes must be added in creation order");

        self.nodes.push((node, Type::Queued));
        if let Some(prev) = node.prev {
            self.edges.push((prev.id, node.id));
        }
    }

    pub(crate) fn mark(&mut self, node: &SearchNode<'_>, node_type: Type) {
        self.nodes[node.id].1 = node_type;
    }

    pub(crate) fn draw_states(&self) -> io::Result<()> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8_lossy(&writer);
        let s = s.replace(
            "digraph G {",
            "digraph G {\n    graph [fontname = \"monospace\"];\n    node [fontname = \"monospace\"];",
        );
        fs::write("state-space.dot", &s)?;
        debug!("Wrote state-space.dot with {} nodes", self.nodes.len());

        let status = Command::new("dot")
            .args(&["-Tsvg", "-O", "state-space.dot"])
            .status()?;
        if !status.success() {
            return Err(io::Error::new(io::ErrorKind::Other, format!("dot exited with {}", status)));
        }
        Ok(())
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = self.nodes[*n].0;
        let board = MapFormatter::new(self.board, Some(&node.state), Format::Letters);
        LabelText::EscStr(format!("#{} d: {}\n{}", node.id, node.dist, board).into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].1 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].1 {
                Type::Expanded => "red",
                Type::Duplicate => "gray",
                Type::Solution => "green",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
