//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP types here; adapters map response bodies into these.

use super::errors::ReportError;
use std::fmt;
use std::str::FromStr;

/// Positive integer employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// Accepts any integer; rejects zero and negatives.
    pub fn new(raw: i64) -> Result<Self, ReportError> {
        if raw <= 0 {
            return Err(ReportError::not_positive());
        }
        Ok(Self(raw as u64))
    }

    /// Parse from a command-line argument.
    ///
    /// Non-integer text and integers that are not positive are reported with
    /// different messages. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::new(n),
            // Too large for i64 but still a valid positive integer.
            Err(_) => trimmed
                .strip_prefix('+')
                .unwrap_or(trimmed)
                .parse::<u64>()
                .map(Self)
                .map_err(|_| ReportError::not_an_integer()),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A user record in the external directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

/// A task belonging to an employee. Ownership is by fetch, not a stored key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}
