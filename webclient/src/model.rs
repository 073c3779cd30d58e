use async_trait::async_trait;
use std::{fmt, num::ParseIntError, str::FromStr};

use crate::error::*;

pub use reqwest::Url;

/// Numeric problem identification on the judge. (e.g.) 1000, 2557
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProblemId(pub u32);

impl ProblemId {
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl FromStr for ProblemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProblemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One official input/output example pair.
/// `None` means the element was absent or had no text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Sample {
    pub ord: u32,
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProblemInfo {
    pub id: ProblemId,
    pub url: Url,
    pub title: Option<String>,
    pub time_limit: Option<String>,
    pub memory_limit: Option<String>,
    pub samples: Vec<Sample>,
}

#[async_trait]
pub trait Client {
    fn problem_url(&self, id: ProblemId) -> Result<Url>;

    /// Issue exactly one request for the problem page and scrape it.
    async fn fetch_problem_info(&self, id: ProblemId) -> Result<ProblemInfo>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_problem_id() {
        assert_eq!("1000".parse::<ProblemId>().unwrap(), ProblemId(1000));
        assert_eq!(" 2557\n".parse::<ProblemId>().unwrap(), ProblemId(2557));

        assert!("abc".parse::<ProblemId>().is_err());
        assert!("10.5".parse::<ProblemId>().is_err());
        assert!("-1".parse::<ProblemId>().is_err());
        assert!("".parse::<ProblemId>().is_err());
    }

    #[test]
    fn display_problem_id() {
        assert_eq!(ProblemId(1000).to_string(), "1000");
    }
}
