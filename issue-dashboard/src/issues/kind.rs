//! Derived issue categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue type derived from labels.
///
/// Variant order is the classification precedence and the tie-break order
/// used when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Bug,
    Enhancement,
    Task,
    Other,
}

impl IssueType {
    /// Returns the serialized key (e.g. `"bug"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Enhancement => "enhancement",
            Self::Task => "task",
            Self::Other => "other",
        }
    }

    /// Returns the human readable name used in reports and charts.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Enhancement => "Feature Request",
            Self::Task => "Task",
            Self::Other => "Other",
        }
    }
}

/// Issue priority derived from labels or body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    Unset,
}

impl Priority {
    /// Returns the serialized key (e.g. `"high"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unset => "unset",
        }
    }

    /// Returns the human readable name used in reports and charts.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unset => "Not Set",
        }
    }
}

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// Returns the serialized key (e.g. `"open"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the human readable name used in reports and charts.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

/// Common view over the category enums, used by the aggregator and charts.
pub trait Category: Copy + Ord {
    /// Serialized key.
    fn key(self) -> &'static str;

    /// Display name.
    fn label(self) -> &'static str;
}

impl Category for IssueType {
    fn key(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        self.display_name()
    }
}

impl Category for Priority {
    fn key(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        self.display_name()
    }
}

impl Category for IssueState {
    fn key(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        self.display_name()
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
