pub(crate) mod a_star;
pub(crate) mod iterative_deepening;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Method;
use crate::route::Route;
use crate::state::State;
use crate::task::Task;
use crate::Solve;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    DifferentLengths,
    DifferentTiles,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::DifferentLengths => write!(f, "Start and end have different lengths"),
            SolverErr::DifferentTiles => write!(
                f,
                "Start and end have different tiles - iterative deepening would never finish without a move limit"
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub route: Option<Route>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(route: Option<Route>, stats: Stats, method: Method) -> Self {
        Self {
            route,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.route {
            None => writeln!(f, "No route")?,
            Some(ref route) => writeln!(f, "{}: {}", self.method, route.move_cnt())?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Task {
    fn solve(
        &self,
        method: Method,
        max_moves: Option<usize>,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr> {
        solve(self, method, max_moves, print_status)
    }
}

fn solve(
    task: &Task,
    method: Method,
    max_moves: Option<usize>,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    if task.start.len() != task.end.len() {
        return Err(SolverErr::DifferentLengths);
    }

    let (route, stats) = match method {
        Method::AStar => a_star::search(&task.start, &task.end, max_moves, print_status),
        Method::IterativeDeepening => {
            // necessary but not sufficient, the rest is up to the caller
            if max_moves.is_none() && task.start.tiles() != task.end.tiles() {
                return Err(SolverErr::DifferentTiles);
            }
            iterative_deepening::search(&task.start, &task.end, max_moves, print_status)
        }
    };
    debug!("{} solved {}: {:?}", method, task, route.as_ref().map(Route::move_cnt));
    Ok(SolverOk::new(route, stats, method))
}

/// Shortest route from `start` to `end` or `None` once every route was tried.
pub fn a_star(start: &State, end: &State) -> Option<Route> {
    a_star::search(start, end, None, false).0
}

/// Shortest route from `start` to `end`.
///
/// Never returns if there is no route, the caller has to make sure one exists
/// (or use `iterative_deepening_bounded`).
pub fn iterative_deepening(start: &State, end: &State) -> Route {
    match iterative_deepening::search(start, end, None, false) {
        (Some(route), _) => route,
        (None, _) => unreachable!("Unbounded iterative deepening only returns with a route"),
    }
}

/// Shortest route with at most `max_moves` moves.
pub fn iterative_deepening_bounded(start: &State, end: &State, max_moves: usize) -> Option<Route> {
    iterative_deepening::search(start, end, Some(max_moves), false).0
}

/// Number of differing positions minus 1, never more than the actual number of moves needed.
///
/// Every cell with a wrong symbol needs the blank to enter it and leave it again,
/// except the cell where the blank ends up - that one is fixed by the last move.
/// If the blank starts where it should end, it has to leave first which makes
/// one more cell wrong so the bound still holds.
pub fn estimate_distance(s: &State, t: &State) -> i32 {
    let differing = s
        .cells()
        .iter()
        .zip(t.cells())
        .filter(|&(a, b)| a != b)
        .count();
    differing as i32 - 1
}
