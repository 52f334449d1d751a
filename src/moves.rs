use std::fmt::{self, Debug, Display, Formatter};

use crate::data::WIDTH;
use crate::state::{is_valid, State};

/// Direction the blank travels.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
    Down,
    Up,
}

/// Order in which neighbors are generated - both searches break ties by it.
pub const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Down, Dir::Up];

impl Dir {
    #[cfg(test)]
    fn inverse(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Up => Dir::Down,
        }
    }

    /// The direction the blank moved from `old` to `new` (indices in a row-major grid).
    pub(crate) fn between(old: usize, new: usize) -> Option<Dir> {
        if new + 1 == old {
            Some(Dir::Left)
        } else if old + 1 == new {
            Some(Dir::Right)
        } else if old + WIDTH == new {
            Some(Dir::Down)
        } else if new + WIDTH == old {
            Some(Dir::Up)
        } else {
            None
        }
    }
}

/// Moves the blank one cell by swapping it with its neighbor.
///
/// Returns `None` if the blank is missing or at the border in that direction.
/// The result is not checked for validity - it might have moved an anchor.
pub fn move_blank(state: &State, dir: Dir) -> Option<State> {
    let pos = state.blank()?;
    let target = match dir {
        Dir::Left if pos % WIDTH > 0 => pos - 1,
        Dir::Right if pos % WIDTH < WIDTH - 1 => pos + 1,
        // bounded by the actual length so malformed candidates never index out of bounds
        Dir::Down if pos + WIDTH < state.len() => pos + WIDTH,
        Dir::Up if pos >= WIDTH => pos - WIDTH,
        _ => return None,
    };
    Some(state.swapped(pos, target))
}

/// All valid neighbors in the order left, right, down, up.
pub fn next_config(state: &State) -> Vec<State> {
    DIRECTIONS
        .iter()
        .filter_map(|&dir| move_blank(state, dir))
        .filter(|next| is_valid(Some(next)))
        .collect()
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Left => 'l',
            Dir::Right => 'r',
            Dir::Down => 'd',
            Dir::Up => 'u',
        };
        write!(f, "{}", c)
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub(crate) fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// Replays the moves, `None` as soon as one of them is impossible or invalid.
    pub fn apply(&self, start: &State) -> Option<Vec<State>> {
        let mut states = vec![start.clone()];
        for &dir in self {
            let last = states.last()?;
            let next = move_blank(last, dir).filter(|next| is_valid(Some(next)))?;
            states.push(next);
        }
        Some(states)
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use fnv::FnvHashSet;

    use super::*;
    use crate::data::{ANCHOR, ANCHORS, BLANK};

    fn state(s: &str) -> State {
        s.parse().unwrap()
    }

    fn strings(states: &[State]) -> Vec<String> {
        states.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn moving_blank() {
        let s = state("+dd+b_cb+dda+abd");
        assert_eq!(move_blank(&s, Dir::Left).unwrap(), state("+dd+_bcb+dda+abd"));
        assert_eq!(move_blank(&s, Dir::Right).unwrap(), state("+dd+bc_b+dda+abd"));
        assert_eq!(move_blank(&s, Dir::Down).unwrap(), state("+dd+bdcb+_da+abd"));
        assert_eq!(move_blank(&s, Dir::Up).unwrap().to_string(), "+_d+bdcb+dda+abd");
    }

    #[test]
    fn moving_blank_at_borders() {
        // left column
        let s = state("+dd+_bcb+dda+abd");
        assert_eq!(move_blank(&s, Dir::Left), None);
        // right column
        let s = state("+dd+bcb_+dda+abd");
        assert_eq!(move_blank(&s, Dir::Right), None);
        // top row
        let s = state("+_d+bdcb+dda+abd");
        assert_eq!(move_blank(&s, Dir::Up), None);
        // bottom row
        let s = state("+dd+bacb+dda+_bd");
        assert_eq!(move_blank(&s, Dir::Down), None);
        // no blank at all
        let s = State::from_symbols_unchecked("+dd+bdcb+dda+abd");
        assert_eq!(move_blank(&s, Dir::Left), None);
        assert_eq!(next_config(&s), vec![]);
    }

    #[test]
    fn moving_blank_raw_swap_ignores_anchors() {
        // geometrically possible, only next_config filters it out
        let s = state("+dd+_bcb+dda+abd");
        let up = move_blank(&s, Dir::Up).unwrap();
        assert_eq!(up.to_string(), "_dd++bcb+dda+abd");
        assert!(!is_valid(Some(&up)));
    }

    #[test]
    fn next_config_order() {
        assert_eq!(
            strings(&next_config(&state("+dd+b_cb+dda+abd"))),
            vec![
                "+dd+_bcb+dda+abd",
                "+dd+bc_b+dda+abd",
                "+dd+bdcb+_da+abd",
                "+_d+bdcb+dda+abd",
            ]
        );
    }

    #[test]
    fn anchors_are_walls() {
        // 4 is only connected to 5
        assert_eq!(
            strings(&next_config(&state("+dd+_bcb+dda+abd"))),
            vec!["+dd+b_cb+dda+abd"]
        );
        // 1 is connected to 2 and 5
        assert_eq!(
            strings(&next_config(&state("+_d+bdcb+dda+abd"))),
            vec!["+d_+bdcb+dda+abd", "+dd+b_cb+dda+abd"]
        );
        // 13 is connected to 14 and 9
        assert_eq!(
            strings(&next_config(&state("+dd+bdcb+ada+_bd"))),
            vec!["+dd+bdcb+ada+b_d", "+dd+bdcb+_da+abd"]
        );
        // 7 is connected to 6 and 11
        assert_eq!(
            strings(&next_config(&state("+dd+bdc_+dda+abd"))),
            vec!["+dd+bd_c+dda+abd", "+dd+bdca+dd_+abd"]
        );
    }

    #[test]
    fn moves_are_reversible() {
        let mut to_visit = vec![state("+dd+b_cb+dda+abd")];
        let mut seen = FnvHashSet::default();
        while let Some(cur) = to_visit.pop() {
            if seen.len() > 2_000 {
                break;
            }
            if !seen.insert(cur.clone()) {
                continue;
            }
            for &dir in &DIRECTIONS {
                if let Some(next) = move_blank(&cur, dir) {
                    assert_eq!(move_blank(&next, dir.inverse()).as_ref(), Some(&cur));
                }
            }
            to_visit.extend(next_config(&cur));
        }
    }

    #[test]
    fn invariants_preserved() {
        let mut to_visit = vec![state("+_d+bbdd+daa+cdb")];
        let mut seen = FnvHashSet::default();
        while let Some(cur) = to_visit.pop() {
            if seen.len() > 5_000 {
                break;
            }
            if !seen.insert(cur.clone()) {
                continue;
            }
            for next in next_config(&cur) {
                assert_eq!(next.len(), 16);
                for &i in &ANCHORS {
                    assert_eq!(next.cells()[i], ANCHOR);
                }
                assert_eq!(next.cells().iter().filter(|&&c| c == BLANK).count(), 1);
                assert_eq!(next.tiles(), cur.tiles());
                to_visit.push(next);
            }
        }
    }

    #[test]
    fn dirs_between() {
        assert_eq!(Dir::between(5, 4), Some(Dir::Left));
        assert_eq!(Dir::between(5, 6), Some(Dir::Right));
        assert_eq!(Dir::between(5, 9), Some(Dir::Down));
        assert_eq!(Dir::between(5, 1), Some(Dir::Up));
        assert_eq!(Dir::between(5, 5), None);
        assert_eq!(Dir::between(5, 10), None);
    }

    #[test]
    fn formatting_and_replaying_moves() {
        let moves = Moves::new(vec![Dir::Left, Dir::Right, Dir::Down, Dir::Up]);
        assert_eq!(moves.to_string(), "lrdu");
        assert_eq!(moves.move_cnt(), 4);

        let start = state("+dd+b_cb+dda+abd");
        let states = moves.apply(&start).unwrap();
        assert_eq!(
            strings(&states),
            vec![
                "+dd+b_cb+dda+abd",
                "+dd+_bcb+dda+abd",
                "+dd+b_cb+dda+abd",
                "+dd+bdcb+_da+abd",
                "+dd+b_cb+dda+abd",
            ]
        );

        // the second left is at the border
        let moves = Moves::new(vec![Dir::Left, Dir::Left]);
        assert_eq!(moves.apply(&start), None);
        // the second up is at the border
        let moves = Moves::new(vec![Dir::Up, Dir::Up]);
        assert_eq!(moves.apply(&start), None);
        // up then left would swap with the anchor at 0
        let moves = Moves::new(vec![Dir::Up, Dir::Left]);
        assert_eq!(moves.apply(&start), None);
    }
}
