use std::fmt::{self, Debug, Display, Formatter};

use crate::data::WIDTH;
use crate::route::Route;

/// Lays out a route as 4 lines, one per grid row,
/// each listing that row of every state in order.
///
/// States which are not exactly 4x4 are skipped.
/// There's no newline after the last line.
pub struct RouteFormatter<'a> {
    route: &'a Route,
}

impl<'a> RouteFormatter<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }
}

impl Display for RouteFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..WIDTH {
            if row > 0 {
                writeln!(f)?;
            }
            let mut first = true;
            for quadrant in self.route.iter().filter_map(|s| s.quadrant(row)) {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                for &c in quadrant {
                    write!(f, "{}", c as char)?;
                }
            }
        }
        Ok(())
    }
}

impl Debug for RouteFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Route {
    pub fn matrix(&self) -> RouteFormatter<'_> {
        RouteFormatter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    #[test]
    fn formatting_single_state() {
        let route = Route::new(vec!["+dd+b_cb+dda+abd".parse().unwrap()]);
        assert_eq!(route.matrix().to_string(), "+dd+\nb_cb\n+dda\n+abd");
    }

    #[test]
    fn formatting_route() {
        let route = Route::new(vec![
            "+dd+b_cb+dda+abd".parse().unwrap(),
            "+dd+bdcb+_da+abd".parse().unwrap(),
            "+dd+bdcb+d_a+abd".parse().unwrap(),
        ]);
        let expected = r"
+dd+ +dd+ +dd+
b_cb bdcb bdcb
+dda +_da +d_a
+abd +abd +abd"
            .trim_start_matches('\n');
        assert_eq!(route.matrix().to_string(), expected);
    }

    #[test]
    fn formatting_keeps_token_counts() {
        let tasks = crate::task::Task::literal_tasks();
        let states: Vec<State> = tasks.iter().map(|t| t.start.clone()).collect();
        let route = Route::new(states);
        let out = route.matrix().to_string();
        let lines: Vec<_> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.split(' ').count(), route.len());
            assert!(line.split(' ').all(|token| token.len() == 4));
        }
    }

    #[test]
    fn formatting_skips_malformed_states() {
        let route = Route::new(vec![
            "+ad+bd_c+bdd+bda".parse().unwrap(),
            State::from_symbols_unchecked("+ad+bd_c+bdd+bd"),
            State::from_symbols_unchecked("+ad+bd_c+bdd+bdaa"),
            "+ad+b_dc+bdd+bda".parse().unwrap(),
        ]);
        assert_eq!(
            route.matrix().to_string(),
            "+ad+ +ad+\nbd_c b_dc\n+bdd +bdd\n+bda +bda"
        );
    }
}
