//! Analytic query engine
//!
//! Read-only queries over a [`KnowledgeStore`]. Every id listing is
//! deduplicated and returned in canonical id order. Queries take keys that
//! the [`Validator`](crate::validation::Validator) has already resolved, so
//! none of them fail.

mod authorship;
mod gindex;
mod ordering;
mod similarity;

pub use authorship::{co_authors, foreign_citations};
pub use gindex::g_index;
pub use ordering::{sort_articles, sort_ids, ArticleSortKey};
pub use similarity::jaccard;

use crate::model::{ArticleKey, AuthorKey, SeriesKey};
use crate::store::KnowledgeStore;
use tracing::debug;

/// Query engine borrowing a store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    /// Ids of every article
    pub fn all_publications(&self) -> Vec<String> {
        self.sorted_ids(self.store.all_articles())
    }

    /// Ids of articles without authors
    pub fn invalid_publications(&self) -> Vec<String> {
        self.sorted_ids(
            self.store
                .all_articles()
                .into_iter()
                .filter(|&key| self.store.article(key).is_invalid()),
        )
    }

    /// Ids of articles written by at least one of the given authors
    pub fn publications_by(&self, authors: &[AuthorKey]) -> Vec<String> {
        self.sorted_ids(
            authors
                .iter()
                .flat_map(|&author| self.store.author(author).articles().iter().copied()),
        )
    }

    /// Ids of the articles a series published in `year`
    pub fn in_proceedings(&self, series: SeriesKey, year: u16) -> Vec<String> {
        self.sorted_ids(
            self.store
                .series_articles(series)
                .into_iter()
                .filter(|&key| self.store.article(key).year() == year),
        )
    }

    /// Ids of articles carrying every given keyword
    pub fn find_by_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<String> {
        self.sorted_ids(
            self.store
                .all_articles()
                .into_iter()
                .filter(|&key| self.store.article(key).keywords().contains_all(keywords)),
        )
    }

    /// g-index over the received-citation counts of the author's articles
    pub fn g_index(&self, author: AuthorKey) -> usize {
        let citations = self.store.citations();
        let counts: Vec<usize> = self
            .store
            .author(author)
            .articles()
            .iter()
            .map(|&article| citations.citation_count(article))
            .collect();

        let g = g_index(counts);
        debug!(author = self.store.author(author).full_name(), g, "g-index computed");
        g
    }

    /// Full names of the author's co-authors, first-encountered order
    pub fn co_authors(&self, author: AuthorKey) -> Vec<String> {
        co_authors(self.store, author)
            .into_iter()
            .map(|key| self.store.author(key).full_name().to_string())
            .collect()
    }

    /// Ids of articles citing the author from outside the author's circle
    pub fn foreign_citations(&self, author: AuthorKey) -> Vec<String> {
        self.sorted_ids(foreign_citations(self.store, author))
    }

    /// Jaccard index of two articles' keyword sets
    pub fn similarity(&self, a: ArticleKey, b: ArticleKey) -> f64 {
        jaccard(
            self.store.article(a).keywords().as_set(),
            self.store.article(b).keywords().as_set(),
        )
    }

    fn sorted_ids(&self, keys: impl IntoIterator<Item = ArticleKey>) -> Vec<String> {
        sort_ids(keys.into_iter().map(|key| self.store.article(key).id()))
    }
}
