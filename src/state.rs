use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{ANCHOR, ANCHORS, BLANK, CELLS, WIDTH};

// TODO profile with [u8; CELLS] - a Vec is only needed to represent malformed candidates
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct State {
    cells: Vec<u8>,
}

impl State {
    /// Wraps raw symbols without checking anything.
    ///
    /// Use `str::parse` for user input, this exists for move results
    /// and for testing how malformed candidates are treated.
    pub fn from_symbols_unchecked<S: Into<Vec<u8>>>(symbols: S) -> State {
        State {
            cells: symbols.into(),
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the first blank, if there is one.
    pub fn blank(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == BLANK)
    }

    /// Symbols of row `index`, only for well-formed 4x4 states.
    pub fn quadrant(&self, index: usize) -> Option<&[u8]> {
        if self.cells.len() != CELLS || index >= WIDTH {
            return None;
        }
        Some(&self.cells[index * WIDTH..(index + 1) * WIDTH])
    }

    pub(crate) fn swapped(&self, a: usize, b: usize) -> State {
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        State { cells }
    }

    /// Symbols sorted, two states can only be connected if these are equal.
    pub(crate) fn tiles(&self) -> Vec<u8> {
        let mut tiles = self.cells.clone();
        tiles.sort();
        tiles
    }
}

/// Fails closed: missing candidates, short ones and ones with a displaced anchor are invalid.
///
/// Doesn't check the blank or the exact length, a candidate that's too long
/// but has all anchors in place is accepted.
pub fn is_valid(candidate: Option<&State>) -> bool {
    match candidate {
        None => false,
        Some(state) if state.len() < CELLS => false,
        Some(state) => ANCHORS.iter().all(|&i| state.cells[i] == ANCHOR),
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &c in &self.cells {
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
