use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How found routes are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// 4 lines, each showing one row of every state.
    Matrix,
    /// One letter per move of the blank.
    Moves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    AStar,
    IterativeDeepening,
}

impl Method {
    pub const NAMES: [&'static str; 2] = ["a-star", "iterative-deepening"];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::AStar => write!(f, "a-star"),
            Method::IterativeDeepening => write!(f, "iterative-deepening"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(String);

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown method {}, expected one of: {}",
            self.0,
            Method::NAMES.join(", ")
        )
    }
}

impl Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a-star" | "astar" => Ok(Method::AStar),
            "iterative-deepening" | "id" => Ok(Method::IterativeDeepening),
            _ => Err(UnknownMethod(s.to_owned())),
        }
    }
}
