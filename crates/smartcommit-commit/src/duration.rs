//! Time-spent duration grammar.
//!
//! A duration is one or more whitespace-separated components, each a
//! positive integer followed by a unit: `h` (hours), `d` (days) or
//! `m` (minutes). Examples: `2h`, `1d 2h`, `30m`.
//!
//! The grammar is lenient: component count, magnitude and unit repetition
//! (`1h 2h`) are not restricted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ValueError, ValueResult};

/// Unit of a duration component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    /// `d`
    Day,
    /// `h`
    Hour,
    /// `m`
    Minute,
}

impl DurationUnit {
    /// Returns the unit for a suffix character.
    #[must_use]
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'd' => Some(Self::Day),
            'h' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            _ => None,
        }
    }

    /// Returns the suffix character.
    #[must_use]
    pub fn suffix(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Hour => 'h',
            Self::Minute => 'm',
        }
    }
}

/// A validated time-spent expression.
///
/// The text is kept exactly as written (including inner whitespace),
/// so `2h 30m` stays `2h 30m`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSpent(String);

impl TimeSpent {
    /// Parses a duration expression.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidDuration`] if the value is empty or any
    /// component is not `<positive integer><h|d|m>`.
    pub fn parse(raw: &str) -> ValueResult<Self> {
        let value = raw.trim();
        if value.is_empty() || !value.split_whitespace().all(Self::is_component) {
            return Err(ValueError::InvalidDuration(raw.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns true if `word` is a single `<positive integer><unit>` component.
    #[must_use]
    pub fn is_component(word: &str) -> bool {
        split_component(word).is_some()
    }

    /// Returns the duration text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the components as `(magnitude, unit)` pairs.
    ///
    /// Magnitudes are returned as text since the grammar puts no upper bound
    /// on them.
    pub fn components(&self) -> impl Iterator<Item = (&str, DurationUnit)> {
        self.0.split_whitespace().filter_map(split_component)
    }
}

fn split_component(word: &str) -> Option<(&str, DurationUnit)> {
    let unit = DurationUnit::from_suffix(word.chars().last()?)?;
    let digits = &word[..word.len() - 1];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.bytes().all(|b| b == b'0') {
        return None;
    }
    Some((digits, unit))
}

impl fmt::Display for TimeSpent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TimeSpent {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSpent {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSpent> for String {
    fn from(time: TimeSpent) -> Self {
        time.0
    }
}
