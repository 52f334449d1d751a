use fnv::FnvHashSet;

use crate::moves::next_config;
use crate::route::Route;
use crate::solver::Stats;
use crate::state::State;

/// Depth-first searches with a move bound growing from 0, each starting from scratch.
///
/// Without `max_moves` this never returns if `end` can't be reached from `start`.
pub(crate) fn search(
    start: &State,
    end: &State,
    max_moves: Option<usize>,
    print_status: bool,
) -> (Option<Route>, Stats) {
    debug!("Iterative deepening from {} to {}", start, end);

    let mut stats = Stats::new();

    let mut path = vec![start.clone()];
    let mut on_path = FnvHashSet::default();
    on_path.insert(start.clone());

    let mut bound = 0;
    while max_moves.map_or(true, |max| bound <= max) {
        debug!("Trying routes of up to {} moves", bound);
        if print_status {
            println!("Depth bound: {}", bound);
        }
        stats.add_bound();

        if depth_first(&mut path, &mut on_path, end, bound, &mut stats) {
            debug!("Found route with {} moves", path.len() - 1);
            return (Some(Route::new(path)), stats);
        }
        bound += 1;
    }

    debug!("No route within {} moves", bound - 1);
    (None, stats)
}

/// Extends `path` until it ends in `end` or `remaining` runs out.
///
/// On success `path` is the whole route, otherwise it's left as it was.
fn depth_first(
    path: &mut Vec<State>,
    on_path: &mut FnvHashSet<State>,
    end: &State,
    remaining: usize,
    stats: &mut Stats,
) -> bool {
    let depth = path.len() - 1;
    stats.add_visited(depth);

    if path[depth] == *end {
        return true;
    }
    if remaining == 0 {
        return false;
    }

    for next in next_config(&path[depth]) {
        if on_path.contains(&next) {
            stats.add_rejected(depth + 1);
            continue;
        }
        stats.add_created(depth + 1);

        on_path.insert(next.clone());
        path.push(next);
        if depth_first(path, on_path, end, remaining - 1, stats) {
            return true;
        }
        if let Some(next) = path.pop() {
            on_path.remove(&next);
        }
    }
    false
}
