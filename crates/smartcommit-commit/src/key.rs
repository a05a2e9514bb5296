//! Issue key type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ValueError, ValueResult};

/// A work item identifier of the form `<PROJECT>-<number>`.
///
/// Input is accepted in any case and always stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueKey(String);

impl IssueKey {
    /// Parses and canonicalizes an issue key.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not `<PROJECT>-<digits>` with an
    /// alphanumeric project part starting with a letter.
    pub fn parse(raw: &str) -> ValueResult<Self> {
        let invalid = || ValueError::InvalidIssueKey(raw.to_string());

        let (project, number) = raw.rsplit_once('-').ok_or_else(invalid)?;
        let starts_with_letter = project
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !project.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid());
        }
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Returns the canonical key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the project part (`CCPD1` in `CCPD1-42`).
    #[must_use]
    pub fn project(&self) -> &str {
        self.0.rsplit_once('-').map_or("", |(project, _)| project)
    }

    /// Returns the issue number part (`42` in `CCPD1-42`).
    #[must_use]
    pub fn number(&self) -> &str {
        self.0.rsplit_once('-').map_or("", |(_, number)| number)
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IssueKey {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IssueKey {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let key = IssueKey::parse("proj-12").unwrap();
        assert_eq!(key.as_str(), "PROJ-12");
    }

    #[test]
    fn test_parse_project_with_digits() {
        let key = IssueKey::parse("ccpd1-42").unwrap();
        assert_eq!(key.as_str(), "CCPD1-42");
        assert_eq!(key.project(), "CCPD1");
        assert_eq!(key.number(), "42");
    }

    #[test]
    fn test_parse_rejects_missing_number() {
        assert!(IssueKey::parse("PROJ-").is_err());
        assert!(IssueKey::parse("PROJ").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digit_number() {
        assert!(IssueKey::parse("PROJ-12a").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_project() {
        assert!(IssueKey::parse("-12").is_err());
        assert!(IssueKey::parse("1PROJ-12").is_err());
        assert!(IssueKey::parse("PR_OJ-12").is_err());
    }

    #[test]
    fn test_display() {
        let key: IssueKey = "Proj-7".parse().unwrap();
        assert_eq!(key.to_string(), "PROJ-7");
    }

    #[test]
    fn test_serde_validates() {
        let key: IssueKey = serde_json::from_str("\"proj-3\"").unwrap();
        assert_eq!(key.as_str(), "PROJ-3");

        let bad: Result<IssueKey, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }
}
