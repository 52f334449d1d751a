// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod fs;
pub mod moves;
pub mod parser;
pub mod route;
pub mod route_formatter;
pub mod solver;
pub mod state;
pub mod task;

use std::error::Error;

use crate::config::Method;
use crate::solver::{SolverErr, SolverOk};
use crate::task::Task;

pub trait LoadTasks {
    fn load_tasks(&self) -> Result<Vec<Task>, Box<dyn Error>>;
}

impl<P: AsRef<std::path::Path>> LoadTasks for P {
    fn load_tasks(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(parser::parse_tasks(&text)?)
    }
}

pub trait Solve {
    /// `max_moves` limits the length of the route, without it iterative deepening
    /// never returns for pairs that aren't connected.
    fn solve(
        &self,
        method: Method,
        max_moves: Option<usize>,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr>;
}
