//! The set of usernames whose messages are kept.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{ChatcleanseError, Result};

/// Usernames whose messages survive filtering.
///
/// Matching is exact and case-sensitive. Names keep their first-seen order
/// so the set can be written back as the same whitespace-separated string
/// the user typed; duplicates are dropped.
///
/// # Example
///
/// ```rust
/// use chatcleanse::core::allow::AllowSet;
///
/// let allow: AllowSet = "alice  bob alice".parse()?;
/// assert_eq!(allow.len(), 2);
/// assert!(allow.contains("bob"));
/// assert!(!allow.contains("Bob"));
/// assert_eq!(allow.to_input_string(), "alice bob");
/// # Ok::<(), chatcleanse::ChatcleanseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowSet {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl AllowSet {
    /// Parses whitespace-separated usernames.
    ///
    /// # Errors
    ///
    /// Returns [`ChatcleanseError::MissingInput`] if no username is given.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_names(input.split_whitespace())
    }

    /// Builds an allow-set from individual names.
    ///
    /// Names are taken verbatim; blank names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChatcleanseError::MissingInput`] if no usable name remains.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name.into());
        }
        if set.is_empty() {
            return Err(ChatcleanseError::missing_input("usernames"));
        }
        Ok(set)
    }

    fn insert(&mut self, name: String) {
        if name.trim().is_empty() || self.lookup.contains(&name) {
            return;
        }
        self.lookup.insert(name.clone());
        self.names.push(name);
    }

    /// Returns `true` if `username` is allowed.
    pub fn contains(&self, username: &str) -> bool {
        self.lookup.contains(username)
    }

    /// Number of distinct usernames.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the set has no usernames.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates usernames in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Joins the usernames with single spaces.
    pub fn to_input_string(&self) -> String {
        self.names.join(" ")
    }
}

impl FromStr for AllowSet {
    type Err = ChatcleanseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AllowSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_input_string())
    }
}
