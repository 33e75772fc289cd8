//! Label and keyword sets used to classify issues.

use serde::Deserialize;

/// Labels mapped to each issue type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TypeLabels {
    /// Labels that mark an issue as a bug.
    pub bug: Vec<String>,

    /// Labels that mark an issue as a feature request.
    pub enhancement: Vec<String>,

    /// Labels that mark an issue as a task.
    pub task: Vec<String>,
}

impl Default for TypeLabels {
    fn default() -> Self {
        Self {
            bug: strings(&["bug"]),
            enhancement: strings(&["enhancement"]),
            task: strings(&["task"]),
        }
    }
}

/// Keywords mapped to each priority level.
///
/// Checked as exact label names by the label strategy and as substrings
/// of the body by the body-text strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PriorityKeywords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for PriorityKeywords {
    fn default() -> Self {
        Self {
            high: strings(&["高", "緊急", "high", "critical"]),
            medium: strings(&["中", "medium"]),
            low: strings(&["低", "low"]),
        }
    }
}

/// Complete set of classification rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClassificationRules {
    /// Type label sets.
    pub type_labels: TypeLabels,

    /// Priority keyword sets.
    pub priority_keywords: PriorityKeywords,
}

impl ClassificationRules {
    /// Returns the first empty keyword or label found, if any.
    pub(crate) fn find_blank(&self) -> Option<&'static str> {
        let groups: [(&'static str, &Vec<String>); 6] = [
            ("type-labels.bug", &self.type_labels.bug),
            ("type-labels.enhancement", &self.type_labels.enhancement),
            ("type-labels.task", &self.type_labels.task),
            ("priority-keywords.high", &self.priority_keywords.high),
            ("priority-keywords.medium", &self.priority_keywords.medium),
            ("priority-keywords.low", &self.priority_keywords.low),
        ];

        groups
            .into_iter()
            .find(|(_, values)| values.iter().any(|value| value.trim().is_empty()))
            .map(|(name, _)| name)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_multilingual_keywords() {
        let rules = ClassificationRules::default();
        assert_eq!(rules.priority_keywords.high, ["高", "緊急", "high", "critical"]);
        assert_eq!(rules.priority_keywords.medium, ["中", "medium"]);
        assert_eq!(rules.priority_keywords.low, ["低", "low"]);
        assert_eq!(rules.type_labels.bug, ["bug"]);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let rules: ClassificationRules = toml::from_str(
            r#"
[priority-keywords]
high = ["p0"]
"#,
        )
        .unwrap();

        assert_eq!(rules.priority_keywords.high, ["p0"]);
        assert_eq!(rules.priority_keywords.low, ["低", "low"]);
        assert_eq!(rules.type_labels, TypeLabels::default());
    }

    #[test]
    fn can_find_blank_keyword() {
        let mut rules = ClassificationRules::default();
        assert_eq!(rules.find_blank(), None);

        rules.priority_keywords.medium.push("  ".to_string());
        assert_eq!(rules.find_blank(), Some("priority-keywords.medium"));
    }
}
