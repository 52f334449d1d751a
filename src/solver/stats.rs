use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counters indexed by the number of moves of the route they were recorded for.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created: Vec<usize>,
    visited: Vec<usize>,
    rejected: Vec<usize>,
    bounds: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created.iter().sum()
    }

    pub fn total_visited(&self) -> usize {
        self.visited.iter().sum()
    }

    /// Next states skipped because they were already on the route.
    pub fn total_rejected(&self) -> usize {
        self.rejected.iter().sum()
    }

    /// How many depth bounds iterative deepening went through, 0 for A*.
    pub fn bounds_tried(&self) -> usize {
        self.bounds
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created, depth)
    }

    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited, depth)
    }

    pub(crate) fn add_rejected(&mut self, depth: usize) -> bool {
        Self::add(&mut self.rejected, depth)
    }

    pub(crate) fn add_bound(&mut self) {
        self.bounds += 1;
    }

    /// Returns true if this is the first time the depth was reached.
    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

fn sep(n: usize) -> String {
    (n as u64).separated_string()
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "visited by depth: {:?}", self.visited)?;
        writeln!(f, "rejected repeats by depth: {:?}", self.rejected)?;
        writeln!(f, "total created: {}", sep(self.total_created()))?;
        writeln!(f, "total visited: {}", sep(self.total_visited()))?;
        write!(f, "total rejected repeats: {}", sep(self.total_rejected()))
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.bounds > 0 {
            writeln!(f, "Depth bounds tried: {}", self.bounds)?;
        }
        writeln!(f, "Routes created total: {}", sep(self.total_created()))?;
        writeln!(f, "Routes visited total: {}", sep(self.total_visited()))?;
        writeln!(f, "Rejected repeats total: {}", sep(self.total_rejected()))?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{:<15}{}", "Depth", "Created", "Visited", "Rejected")?;
        let depths = self
            .created
            .len()
            .max(self.visited.len())
            .max(self.rejected.len());
        for i in 0..depths {
            let get = |counts: &Vec<usize>| counts.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                sep(get(&self.created)),
                sep(get(&self.visited)),
                sep(get(&self.rejected)),
            )?;
        }
        Ok(())
    }
}
