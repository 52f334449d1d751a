use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::{Dir, Moves};
use crate::state::State;

/// States connected by single moves, starting with the initial state.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Route {
    states: Vec<State>,
}

impl Route {
    pub(crate) fn new(states: Vec<State>) -> Self {
        debug_assert!(!states.is_empty(), "A route always contains its start");
        Route { states }
    }

    /// Number of states, including the start.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn move_cnt(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn first(&self) -> &State {
        &self.states[0]
    }

    pub fn last(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn contains(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, State> {
        self.states.iter()
    }

    /// The direction of each move of the blank.
    pub fn moves(&self) -> Moves {
        let dirs = self
            .states
            .windows(2)
            .filter_map(|pair| match (pair[0].blank(), pair[1].blank()) {
                (Some(old), Some(new)) => Dir::between(old, new),
                _ => None,
            })
            .collect();
        Moves::new(dirs)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a State;
    type IntoIter = ::std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for state in self {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}

impl Debug for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(states: &[&str]) -> Route {
        Route::new(states.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn lengths_and_ends() {
        let r = route(&["+dd+b_cb+dda+abd"]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.move_cnt(), 0);
        assert_eq!(r.first(), r.last());
        assert_eq!(r.moves().to_string(), "");

        let r = route(&[
            "+dd+b_cb+dda+abd",
            "+dd+bdcb+_da+abd",
            "+dd+bdcb+d_a+abd",
        ]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.move_cnt(), 2);
        assert_eq!(r.first().to_string(), "+dd+b_cb+dda+abd");
        assert_eq!(r.last().to_string(), "+dd+bdcb+d_a+abd");
        assert!(r.contains(&"+dd+bdcb+_da+abd".parse().unwrap()));
        assert!(!r.contains(&"+dd+_bcb+dda+abd".parse().unwrap()));
    }

    #[test]
    fn moves_of_route() {
        let r = route(&[
            "+ad+bd_c+bdd+bda",
            "+ad+b_dc+bdd+bda",
            "+ad+bbdc+_dd+bda",
            "+ad+bbdc+d_d+bda",
            "+ad+bbdc+dd_+bda",
            "+ad+bbd_+ddc+bda",
            "+ad+bb_d+ddc+bda",
            "+a_+bbdd+ddc+bda",
            "+_a+bbdd+ddc+bda",
        ]);
        assert_eq!(r.moves().to_string(), "ldrrulul");
        assert_eq!(r.moves().move_cnt(), r.move_cnt());
    }

    #[test]
    fn formatting_route() {
        let r = route(&["+ad+bd_c+bdd+bda", "+ad+b_dc+bdd+bda"]);
        assert_eq!(r.to_string(), "+ad+bd_c+bdd+bda +ad+b_dc+bdd+bda");
    }
}
