//! Test case identifiers.
//!
//! A test case is addressed by its zero-based column index inside a matrix
//! and displayed as `UTCID<NN>` (1-based, zero-padded to at least two digits).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "UTCID";

/// Identifier of one test case column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TestCaseId(usize);

impl TestCaseId {
    /// Create an id from a zero-based column index.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Create an id from its 1-based number (`UTCID01` is number 1).
    ///
    /// Returns `None` for 0.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// Zero-based column index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based number as shown in the label.
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", PREFIX, self.number())
    }
}

impl FromStr for TestCaseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| format!("test case id must start with {}: {}", PREFIX, s))?;
        if digits.len() < 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("malformed test case id: {}", s));
        }
        let number: usize = digits
            .parse()
            .map_err(|_| format!("malformed test case id: {}", s))?;
        Self::from_number(number).ok_or_else(|| format!("test case ids start at 01: {}", s))
    }
}

impl Serialize for TestCaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TestCaseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
