use std::fmt::{self, Debug, Display, Formatter};

use crate::data::LITERAL_TASKS;
use crate::state::State;

/// Move the puzzle from `start` to `end`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub start: State,
    pub end: State,
}

impl Task {
    pub fn new(start: State, end: State) -> Self {
        Task { start, end }
    }

    /// Name of the file the route for this task is saved to.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self)
    }

    pub fn literal_tasks() -> Vec<Task> {
        LITERAL_TASKS
            .iter()
            .map(|&(start, end)| {
                // the literals are known to be well-formed
                Task::new(
                    State::from_symbols_unchecked(start),
                    State::from_symbols_unchecked(end),
                )
            })
            .collect()
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}2{}", self.start, self.end)
    }
}

impl Debug for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
