use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Same as the level files - `#` walls, `A`-`Z` players, `a`-`z` their goals.
    Letters,
    /// `X` walls, `G` goals, `P` players, space separated.
    Classic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::DepthFirst => write!(f, "dfs"),
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::UniformCost => write!(f, "ucs"),
        }
    }
}
