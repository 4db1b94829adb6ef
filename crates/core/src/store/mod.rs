//! Knowledge store
//!
//! Owns every entity in insertion-ordered arenas and is the single source of
//! truth for lookups. Lookups return `Option`; a missing entity is never
//! replaced by a default one.

mod mutation;

use crate::citation::CitationGraph;
use crate::model::{
    Article, ArticleKey, Author, AuthorKey, Conference, ConferenceKey, Journal, JournalKey,
    Series, SeriesKey, VenueRef,
};

/// In-memory bibliographic knowledge base
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    authors: Vec<Author>,
    journals: Vec<Journal>,
    series: Vec<Series>,
    conferences: Vec<Conference>,
    articles: Vec<Article>,
    citations: CitationGraph,
}

impl KnowledgeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------
    // Entity access by key
    // ---------------------------------------------------------------

    pub fn author(&self, key: AuthorKey) -> &Author {
        &self.authors[key.0]
    }

    pub fn journal(&self, key: JournalKey) -> &Journal {
        &self.journals[key.0]
    }

    pub fn series(&self, key: SeriesKey) -> &Series {
        &self.series[key.0]
    }

    pub fn conference(&self, key: ConferenceKey) -> &Conference {
        &self.conferences[key.0]
    }

    pub fn article(&self, key: ArticleKey) -> &Article {
        &self.articles[key.0]
    }

    pub fn citations(&self) -> &CitationGraph {
        &self.citations
    }

    // ---------------------------------------------------------------
    // Ordered collections
    // ---------------------------------------------------------------

    /// Authors in creation order
    pub fn authors(&self) -> impl Iterator<Item = (AuthorKey, &Author)> {
        self.authors.iter().enumerate().map(|(i, a)| (AuthorKey(i), a))
    }

    /// Journals in creation order
    pub fn journals(&self) -> impl Iterator<Item = (JournalKey, &Journal)> {
        self.journals.iter().enumerate().map(|(i, j)| (JournalKey(i), j))
    }

    /// Series in creation order
    pub fn all_series(&self) -> impl Iterator<Item = (SeriesKey, &Series)> {
        self.series.iter().enumerate().map(|(i, s)| (SeriesKey(i), s))
    }

    /// Articles of a series, conference by conference
    pub fn series_articles(&self, key: SeriesKey) -> Vec<ArticleKey> {
        self.series(key)
            .conferences
            .iter()
            .flat_map(|&c| self.conference(c).articles.iter().copied())
            .collect()
    }

    /// Every article: journals first, then series, each in insertion order
    pub fn all_articles(&self) -> Vec<ArticleKey> {
        let mut articles: Vec<ArticleKey> = self
            .journals
            .iter()
            .flat_map(|j| j.articles.iter().copied())
            .collect();

        for (key, _) in self.all_series() {
            articles.extend(self.series_articles(key));
        }

        articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    // ---------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------

    /// Find an author by `"{name} {surname}"`
    pub fn find_author(&self, full_name: &str) -> Option<AuthorKey> {
        self.authors()
            .find(|(_, a)| a.full_name() == full_name)
            .map(|(key, _)| key)
    }

    pub fn find_journal(&self, name: &str) -> Option<JournalKey> {
        self.journals()
            .find(|(_, j)| j.name() == name)
            .map(|(key, _)| key)
    }

    pub fn find_series(&self, name: &str) -> Option<SeriesKey> {
        self.all_series()
            .find(|(_, s)| s.name() == name)
            .map(|(key, _)| key)
    }

    /// The conference a series held in `year`
    pub fn find_conference(&self, series: SeriesKey, year: u16) -> Option<ConferenceKey> {
        self.series(series)
            .conferences
            .iter()
            .copied()
            .find(|&c| self.conference(c).year() == year)
    }

    /// Find an article by id; the first match in venue order wins
    pub fn find_article(&self, id: &str) -> Option<ArticleKey> {
        self.all_articles()
            .into_iter()
            .find(|&key| self.article(key).id() == id)
    }

    // ---------------------------------------------------------------
    // Derived views
    // ---------------------------------------------------------------

    /// Name of the journal or of the conference's series
    pub fn venue_name(&self, venue: VenueRef) -> &str {
        match venue {
            VenueRef::Journal(key) => self.journal(key).name(),
            VenueRef::Conference(key) => self.series(self.conference(key).series()).name(),
        }
    }

    /// Articles the given article cites
    pub fn given_cites(&self, key: ArticleKey) -> &[ArticleKey] {
        self.citations.get_references(key)
    }

    /// Articles citing the given article
    pub fn received_cites(&self, key: ArticleKey) -> &[ArticleKey] {
        self.citations.get_citations(key)
    }

    /// Full names of an article's authors, in authorship order
    pub fn author_names(&self, key: ArticleKey) -> impl Iterator<Item = &str> {
        self.article(key)
            .authors()
            .iter()
            .map(move |&a| self.author(a).full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VenueKind;

    fn sample_store() -> KnowledgeStore {
        let mut store = KnowledgeStore::new();
        store.add_series("ICSE");
        store.add_conference("ICSE", 2019, "Montreal");
        store.add_journal("TSE", "IEEE");
        store.add_article_to(VenueKind::Series, "ICSE", "c1", 2019, "Conference Paper");
        store.add_article_to(VenueKind::Journal, "TSE", "j1", 2018, "Journal Paper");
        store.add_article_to(VenueKind::Journal, "TSE", "j2", 2020, "Another");
        store
    }

    #[test]
    fn test_all_articles_venue_order() {
        let store = sample_store();

        let ids: Vec<&str> = store
            .all_articles()
            .into_iter()
            .map(|k| store.article(k).id())
            .collect();

        // Journals before series regardless of creation order
        assert_eq!(ids, vec!["j1", "j2", "c1"]);
    }

    #[test]
    fn test_lookups_return_none_when_absent() {
        let store = sample_store();

        assert!(store.find_article("missing").is_none());
        assert!(store.find_author("No Body").is_none());
        assert!(store.find_journal("ICSE").is_none());
        assert!(store.find_series("TSE").is_none());

        let icse = store.find_series("ICSE").unwrap();
        assert!(store.find_conference(icse, 2020).is_none());
        assert!(store.find_conference(icse, 2019).is_some());
    }

    #[test]
    fn test_venue_name_resolves_series_for_conference_articles() {
        let store = sample_store();

        let c1 = store.find_article("c1").unwrap();
        let j1 = store.find_article("j1").unwrap();
        assert_eq!(store.venue_name(store.article(c1).venue()), "ICSE");
        assert_eq!(store.venue_name(store.article(j1).venue()), "TSE");
    }
}
