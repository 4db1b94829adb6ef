//! Insertion-ordered, duplicate-free keyword set

use std::collections::HashSet;

/// Keyword set that remembers insertion order for listing
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword; returns false if it was already present
    pub fn insert(&mut self, keyword: &str) -> bool {
        if self.members.contains(keyword) {
            return false;
        }
        self.members.insert(keyword.to_string());
        self.ordered.push(keyword.to_string());
        true
    }

    /// Insert every keyword, skipping those already present
    pub fn extend<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.insert(keyword.as_ref());
        }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.members.contains(keyword)
    }

    /// True if every given keyword is a member
    pub fn contains_all<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().all(|k| self.contains(k.as_ref()))
    }

    /// Keywords in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Unordered view for set algebra
    pub fn as_set(&self) -> &HashSet<String> {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        set.extend(iter);
        set
    }
}
