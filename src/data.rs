use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Player(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Direction of a straight line from `self` to `other`, if there is one.
    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        if self == other {
            return None;
        }
        match (other.r - self.r, other.c - self.c) {
            (dr, 0) if dr < 0 => Some(Dir::Up),
            (dr, 0) if dr > 0 => Some(Dir::Down),
            (0, dc) if dc < 0 => Some(Dir::Left),
            (0, _) => Some(Dir::Right),
            _ => None,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// The order in which the solver expands directions.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    /// Maps the usual W/A/S/D keys (either case).
    pub fn from_key(key: char) -> Option<Dir> {
        match key.to_ascii_uppercase() {
            'W' => Some(Dir::Up),
            'S' => Some(Dir::Down),
            'A' => Some(Dir::Left),
            'D' => Some(Dir::Right),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.delta();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let pos = Pos::new(2, 3);
        assert_eq!(pos + Dir::Up, Pos::new(1, 3));
        assert_eq!(pos + Dir::Down, Pos::new(3, 3));
        assert_eq!(pos + Dir::Left, Pos::new(2, 2));
        assert_eq!(pos + Dir::Right, Pos::new(2, 4));
        assert_eq!(Pos::new(0, 0) + Dir::Up, Pos::new(-1, 0));
    }

    #[test]
    fn directions_between_positions() {
        let pos = Pos::new(4, 4);
        assert_eq!(pos.dir_to(Pos::new(0, 4)), Some(Dir::Up));
        assert_eq!(pos.dir_to(Pos::new(9, 4)), Some(Dir::Down));
        assert_eq!(pos.dir_to(Pos::new(4, 1)), Some(Dir::Left));
        assert_eq!(pos.dir_to(Pos::new(4, 5)), Some(Dir::Right));
        assert_eq!(pos.dir_to(pos), None);
        assert_eq!(pos.dir_to(Pos::new(5, 5)), None);
    }

    #[test]
    fn keys() {
        assert_eq!(Dir::from_key('w'), Some(Dir::Up));
        assert_eq!(Dir::from_key('A'), Some(Dir::Left));
        assert_eq!(Dir::from_key('s'), Some(Dir::Down));
        assert_eq!(Dir::from_key('D'), Some(Dir::Right));
        assert_eq!(Dir::from_key('x'), None);
        let s: String = DIRECTIONS.iter().map(|d| d.to_string()).collect();
        assert_eq!(s, "udlr");
    }
}
