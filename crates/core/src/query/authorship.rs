//! Co-authorship and foreign citations

use crate::model::{ArticleKey, AuthorKey};
use crate::store::KnowledgeStore;
use std::collections::HashSet;

/// Distinct co-authors across the author's articles, first-encountered order
///
/// Authors are told apart by full name; the author is never its own co-author.
pub fn co_authors(store: &KnowledgeStore, author: AuthorKey) -> Vec<AuthorKey> {
    let own_name = store.author(author).full_name();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut result = Vec::new();

    for &article in store.author(author).articles() {
        for &other in store.article(article).authors() {
            let name = store.author(other).full_name();
            if name != own_name && seen.insert(name) {
                result.push(other);
            }
        }
    }

    result
}

/// Articles citing the author's work that share no author with the author's circle
///
/// The circle is the author plus co-authors. Authorless citing articles are dropped.
/// Result is in first-seen order; callers sort.
pub fn foreign_citations(store: &KnowledgeStore, author: AuthorKey) -> Vec<ArticleKey> {
    let mut circle: HashSet<&str> = co_authors(store, author)
        .into_iter()
        .map(|a| store.author(a).full_name())
        .collect();
    circle.insert(store.author(author).full_name());

    store
        .citations()
        .citing_any(store.author(author).articles())
        .into_iter()
        .filter(|&citing| !store.article(citing).is_invalid())
        .filter(|&citing| store.author_names(citing).all(|name| !circle.contains(name)))
        .collect()
}
