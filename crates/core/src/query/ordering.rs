//! Deterministic ordering of query results
//!
//! Two orders are used: the canonical id order for every id listing, and the
//! article order used by bibliographies.

use crate::model::ArticleKey;
use crate::store::KnowledgeStore;
use std::collections::HashSet;

/// Deduplicate ids and sort them by ordinal (byte) order
pub fn sort_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let unique: HashSet<String> = ids.into_iter().map(Into::into).collect();
    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Sort key realising the article total order
///
/// Field order is significant: authors by (surname, name) element-wise with
/// shorter prefixes first, then title, year and id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArticleSortKey<'a> {
    authors: Vec<(&'a str, &'a str)>,
    title: &'a str,
    year: u16,
    id: &'a str,
}

impl<'a> ArticleSortKey<'a> {
    pub fn new(store: &'a KnowledgeStore, key: ArticleKey) -> Self {
        let article = store.article(key);
        Self {
            authors: article
                .authors()
                .iter()
                .map(|&a| {
                    let author = store.author(a);
                    (author.surname(), author.name())
                })
                .collect(),
            title: article.title(),
            year: article.year(),
            id: article.id(),
        }
    }
}

/// Sort articles by the bibliography order
pub fn sort_articles(store: &KnowledgeStore, articles: &mut [ArticleKey]) {
    articles.sort_by_cached_key(|&key| ArticleSortKey::new(store, key));
}
