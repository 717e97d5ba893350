use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::Pos;
use crate::level::Level;
use crate::state::State;

const MAX_PLAYERS: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    NoPlayer,
    DuplicatePlayer(char),
    DuplicateGoal(char),
    MissingPlayer(char),
    MissingGoal(char),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::DuplicatePlayer(p) => write!(f, "Player {} appears more than once", p),
            ParserErr::DuplicateGoal(g) => write!(f, "Goal {} appears more than once", g),
            ParserErr::MissingPlayer(p) => write!(f, "Player {} is missing", p),
            ParserErr::MissingGoal(g) => write!(f, "Goal {} is missing", g),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches(|c| c == '\n' || c == '\r');

    let mut walls = Vec::new();
    let mut players = [None; MAX_PLAYERS];
    let mut goals = [None; MAX_PLAYERS];
    let mut rows = 0;
    let mut cols = 0;

    for (r, line) in level.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        rows += 1;
        cols = cols.max(line.chars().count());

        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            match cur_char {
                '#' => walls.push(pos),
                '.' | ' ' | '-' => {}
                'A'..='Z' => {
                    let i = index(cur_char, 'A');
                    if players[i].is_some() {
                        return Err(ParserErr::DuplicatePlayer(cur_char));
                    }
                    players[i] = Some(pos);
                }
                'a'..='z' => {
                    let i = index(cur_char, 'a');
                    if goals[i].is_some() {
                        return Err(ParserErr::DuplicateGoal(cur_char));
                    }
                    goals[i] = Some(pos);
                }
                _ => return Err(ParserErr::Pos(r, c)),
            }
        }
    }

    // players must be A, B, C, ... without gaps, each with a goal
    let cnt = players
        .iter()
        .zip(goals.iter())
        .rposition(|(p, g)| p.is_some() || g.is_some())
        .map_or(0, |last| last + 1);
    if cnt == 0 {
        return Err(ParserErr::NoPlayer);
    }

    let mut player_positions = Vec::with_capacity(cnt);
    let mut goal_positions = Vec::with_capacity(cnt);
    for i in 0..cnt {
        player_positions.push(players[i].ok_or_else(|| ParserErr::MissingPlayer(letter(i, 'A')))?);
        goal_positions.push(goals[i].ok_or_else(|| ParserErr::MissingGoal(letter(i, 'a')))?);
    }

    let board = Board::new(rows, cols, &walls, goal_positions);
    Ok(Level::new(board, State::new(player_positions)))
}

fn index(c: char, base: char) -> usize {
    c as usize - base as usize
}

fn letter(i: usize, base: char) -> char {
    (base as u8 + i as u8) as char
}
