//! Article entity

use super::{AuthorKey, KeywordSet, VenueRef};

/// A published article
///
/// Title, year and venue are fixed at creation. Authors and keywords only grow.
/// Citation edges are kept in the store's citation graph.
#[derive(Debug, Clone)]
pub struct Article {
    id: String,
    title: String,
    year: u16,
    venue: VenueRef,

    /// Authors in authorship order
    pub(crate) authors: Vec<AuthorKey>,

    pub(crate) keywords: KeywordSet,
}

impl Article {
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: u16,
        venue: VenueRef,
        keywords: KeywordSet,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            venue,
            authors: Vec::new(),
            keywords,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Publish year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Owning journal or conference
    pub fn venue(&self) -> VenueRef {
        self.venue
    }

    pub fn authors(&self) -> &[AuthorKey] {
        &self.authors
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// An article without authors cannot be cited in a bibliography
    pub fn is_invalid(&self) -> bool {
        self.authors.is_empty()
    }
}
