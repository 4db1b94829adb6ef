//! Author entity

use super::ArticleKey;

/// An author, identified by given name and surname
#[derive(Debug, Clone)]
pub struct Author {
    name: String,
    surname: String,
    full_name: String,

    /// Articles attributed to this author, in attribution order
    pub(crate) articles: Vec<ArticleKey>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        let name = name.into();
        let surname = surname.into();
        let full_name = format!("{} {}", name, surname);
        Self {
            name,
            surname,
            full_name,
            articles: Vec::new(),
        }
    }

    /// Given name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// `"{name} {surname}"`
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Articles written by this author
    pub fn articles(&self) -> &[ArticleKey] {
        &self.articles
    }
}
