//! The deletion deny-list.
//!
//! Titles are loaded once from configuration at process start and the list
//! is read-only for the lifetime of the process. It is passed by reference
//! into the query service rather than living in a global.

use std::collections::HashSet;

/// The set of event titles whose past occurrences are eligible for deletion.
///
/// Matching is exact and case-sensitive on the full summary string.
#[derive(Debug, Clone, Default)]
pub struct SummaryDenyList {
    titles: HashSet<String>,
}

impl SummaryDenyList {
    /// Creates a deny-list from the configured titles.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `summary` is a member of the deny-list.
    pub fn contains(&self, summary: &str) -> bool {
        self.titles.contains(summary)
    }

    /// Returns true if no titles are configured.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Number of configured titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        let list = SummaryDenyList::new(["Standup", "Daily sync"]);

        assert!(list.contains("Standup"));
        assert!(list.contains("Daily sync"));
        assert!(!list.contains("standup"));
        assert!(!list.contains("Standup "));
        assert!(!list.contains("1:1"));
    }

    #[test]
    fn duplicates_collapse() {
        let list = SummaryDenyList::new(["Standup", "Standup"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn empty_list() {
        let list = SummaryDenyList::default();
        assert!(list.is_empty());
        assert!(!list.contains("anything"));
    }
}
