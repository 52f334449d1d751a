use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{is_anchor, ANCHOR, BLANK, CELLS};
use crate::state::State;
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Length(usize),
    Anchor(usize),
    Symbol(usize, char),
    NoBlank,
    MultipleBlanks,
    MissingEnd,
    TrailingInput,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Length(len) => write!(f, "Expected {} symbols, got {}", CELLS, len),
            ParserErr::Anchor(i) => write!(f, "Expected '+' at pos {}", i),
            ParserErr::Symbol(i, c) => write!(f, "Invalid symbol '{}' at pos {}", c, i),
            ParserErr::NoBlank => write!(f, "No blank"),
            ParserErr::MultipleBlanks => write!(f, "More than one blank"),
            ParserErr::MissingEnd => write!(f, "Task needs both a start and an end state"),
            ParserErr::TrailingInput => write!(f, "Unexpected input after the end state"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for State {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_state(s)
    }
}

impl FromStr for Task {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_task(s)
    }
}

pub(crate) fn parse_state(s: &str) -> Result<State, ParserErr> {
    let s = s.trim();
    let len = s.chars().count();
    if len != CELLS {
        return Err(ParserErr::Length(len));
    }

    let mut blank = None;
    for (i, c) in s.chars().enumerate() {
        if is_anchor(i) {
            if c != ANCHOR as char {
                return Err(ParserErr::Anchor(i));
            }
        } else if c == BLANK as char {
            if blank.is_some() {
                return Err(ParserErr::MultipleBlanks);
            }
            blank = Some(i);
        } else if !c.is_ascii_lowercase() {
            // includes '+' outside of anchor positions
            return Err(ParserErr::Symbol(i, c));
        }
    }
    if blank.is_none() {
        return Err(ParserErr::NoBlank);
    }

    // all chars are ASCII at this point
    Ok(State::from_symbols_unchecked(s.as_bytes()))
}

/// Parses `START END` separated by any whitespace.
pub(crate) fn parse_task(s: &str) -> Result<Task, ParserErr> {
    let mut parts = s.split_whitespace();
    let start = parts.next().ok_or(ParserErr::MissingEnd)?.parse()?;
    let end = parts.next().ok_or(ParserErr::MissingEnd)?.parse()?;
    if parts.next().is_some() {
        return Err(ParserErr::TrailingInput);
    }
    Ok(Task::new(start, end))
}

/// Parses one task per line, ignoring blank lines and `#` comments.
pub(crate) fn parse_tasks(s: &str) -> Result<Vec<Task>, ParserErr> {
    s.lines()
        .map(|line| match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        })
        .filter(|line| !line.trim().is_empty())
        .map(parse_task)
        .collect()
}
