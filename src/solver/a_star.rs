use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use typed_arena::Arena;

use crate::moves::next_config;
use crate::route::Route;
use crate::solver::{estimate_distance, Stats};
use crate::state::State;

/// A route stored backwards - every route extended from it shares it as a prefix.
#[derive(Debug)]
pub(crate) struct RouteNode<'a> {
    state: State,
    prev: Option<&'a RouteNode<'a>>,
    dist: usize,
}

impl<'a> RouteNode<'a> {
    fn contains(&self, state: &State) -> bool {
        let mut cur = Some(self);
        while let Some(node) = cur {
            if node.state == *state {
                return true;
            }
            cur = node.prev;
        }
        false
    }

    fn to_route(&self) -> Route {
        let mut states = Vec::with_capacity(self.dist + 1);
        let mut cur = Some(self);
        while let Some(node) = cur {
            states.push(node.state.clone());
            cur = node.prev;
        }
        states.reverse();
        Route::new(states)
    }
}

/// A route in the frontier, ordered by rank and then by insertion
/// so equally ranked routes are explored first come first served.
#[derive(Debug)]
pub(crate) struct RankedRoute<'a> {
    pub(crate) rank: i32,
    seq: u64,
    node: &'a RouteNode<'a>,
}

impl<'a> RankedRoute<'a> {
    fn new(rank: i32, seq: u64, node: &'a RouteNode<'a>) -> Self {
        RankedRoute { rank, seq, node }
    }
}

impl PartialOrd for RankedRoute<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedRoute<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialEq for RankedRoute<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl Eq for RankedRoute<'_> {}

/// Rank is moves so far + estimate, the start is ranked by the estimate alone.
///
/// Only states already on the same route are excluded so a state can be reached
/// by many routes. With `max_moves`, longer routes are never queued.
pub(crate) fn search(
    start: &State,
    end: &State,
    max_moves: Option<usize>,
    print_status: bool,
) -> (Option<Route>, Stats) {
    debug!("A* from {} to {}", start, end);

    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut to_visit = BinaryHeap::new();
    let mut seq = 0;

    let root: &RouteNode<'_> = arena.alloc(RouteNode {
        state: start.clone(),
        prev: None,
        dist: 0,
    });
    stats.add_created(0);
    to_visit.push(Reverse(RankedRoute::new(
        estimate_distance(start, end),
        seq,
        root,
    )));

    while let Some(Reverse(cur)) = to_visit.pop() {
        let node = cur.node;
        if stats.add_visited(node.dist) {
            trace!("Visited new depth: {}", node.dist);
            if print_status {
                println!("Visited new depth: {}", node.dist);
                println!("{:?}", stats);
                println!();
            }
        }

        if node.state == *end {
            debug!("Found route with {} moves", node.dist);
            return (Some(node.to_route()), stats);
        }

        if max_moves.map_or(false, |max| node.dist >= max) {
            continue;
        }

        for next in next_config(&node.state) {
            if node.contains(&next) {
                stats.add_rejected(node.dist + 1);
                continue;
            }

            let rank = (node.dist + 1) as i32 + estimate_distance(&next, end);
            let next_node: &RouteNode<'_> = arena.alloc(RouteNode {
                state: next,
                prev: Some(node),
                dist: node.dist + 1,
            });
            seq += 1;
            stats.add_created(next_node.dist);
            to_visit.push(Reverse(RankedRoute::new(rank, seq, next_node)));
        }
    }

    debug!("Frontier exhausted, no route");
    (None, stats)
}
