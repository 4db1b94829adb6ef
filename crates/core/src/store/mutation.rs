//! Mutation operations
//!
//! Mutations assume the caller has run the matching check in
//! [`Validator`](crate::validation::Validator). They never reject a request;
//! a name or id that does not resolve leaves the store untouched and is logged.

use super::KnowledgeStore;
use crate::citation::CitationEdge;
use crate::model::{
    Article, ArticleKey, Author, AuthorKey, Conference, ConferenceKey, Journal, JournalKey,
    KeywordTarget, Series, SeriesKey, VenueKind, VenueRef,
};
use citeforge_common::metrics::record_mutation;
use tracing::{debug, warn};

impl KnowledgeStore {
    /// Append a new author
    pub fn add_author(&mut self, name: &str, surname: &str) -> AuthorKey {
        let key = AuthorKey(self.authors.len());
        self.authors.push(Author::new(name, surname));

        debug!(given_name = name, surname, "Author added");
        record_mutation("add_author");
        key
    }

    /// Append a new, empty journal
    pub fn add_journal(&mut self, name: &str, publisher: &str) -> JournalKey {
        let key = JournalKey(self.journals.len());
        self.journals.push(Journal::new(name, publisher));

        debug!(journal = name, publisher, "Journal added");
        record_mutation("add_journal");
        key
    }

    /// Append a new, empty conference series
    pub fn add_series(&mut self, name: &str) -> SeriesKey {
        let key = SeriesKey(self.series.len());
        self.series.push(Series::new(name));

        debug!(series = name, "Series added");
        record_mutation("add_series");
        key
    }

    /// Append a conference to the named series
    pub fn add_conference(
        &mut self,
        series_name: &str,
        year: u16,
        location: &str,
    ) -> Option<ConferenceKey> {
        let Some(series) = self.find_series(series_name) else {
            warn!(series = series_name, "add_conference on unknown series ignored");
            return None;
        };

        let key = ConferenceKey(self.conferences.len());
        self.conferences.push(Conference::new(series, year, location));
        self.series[series.0].conferences.push(key);

        debug!(series = series_name, year, location, "Conference added");
        record_mutation("add_conference");
        Some(key)
    }

    /// Create an article in a journal, or in the series' conference of `year`
    ///
    /// The article starts with the keywords its venue carries at this point.
    pub fn add_article_to(
        &mut self,
        kind: VenueKind,
        venue_name: &str,
        id: &str,
        year: u16,
        title: &str,
    ) -> Option<ArticleKey> {
        let (venue, seed) = match kind {
            VenueKind::Journal => {
                let journal = self.find_journal(venue_name);
                journal.map(|j| (VenueRef::Journal(j), self.journal(j).keywords.clone()))
            }
            VenueKind::Series => self.find_series(venue_name).and_then(|s| {
                let conference = self.find_conference(s, year)?;
                let mut seed = self.series(s).keywords.clone();
                seed.extend(self.conference(conference).keywords.iter());
                Some((VenueRef::Conference(conference), seed))
            }),
        }
        .or_else(|| {
            warn!(venue = venue_name, kind = %kind, year, "add_article_to on unknown venue ignored");
            None
        })?;

        let key = ArticleKey(self.articles.len());
        self.articles.push(Article::new(id, title, year, venue, seed));

        match venue {
            VenueRef::Journal(j) => self.journals[j.0].articles.push(key),
            VenueRef::Conference(c) => self.conferences[c.0].articles.push(key),
        }

        debug!(article_id = id, venue = venue_name, year, "Article added");
        record_mutation("add_article");
        Some(key)
    }

    /// Append authors to an article, in the given order
    ///
    /// Each author also records the article. Names that do not resolve are skipped.
    pub fn attribute_authors<S: AsRef<str>>(
        &mut self,
        article_id: &str,
        author_names: &[S],
    ) -> Option<ArticleKey> {
        let Some(article) = self.find_article(article_id) else {
            warn!(article_id, "attribute_authors on unknown article ignored");
            return None;
        };

        let authors: Vec<AuthorKey> = author_names
            .iter()
            .filter_map(|name| {
                let found = self.find_author(name.as_ref());
                if found.is_none() {
                    warn!(article_id, author = name.as_ref(), "Unknown author skipped");
                }
                found
            })
            .collect();

        for &author in &authors {
            self.authors[author.0].articles.push(article);
        }
        self.articles[article.0].authors.extend_from_slice(&authors);

        debug!(article_id, author_count = authors.len(), "Authors attributed");
        record_mutation("attribute_authors");
        Some(article)
    }

    /// Record that `giver_id` cites `receiver_id`
    pub fn cite(&mut self, giver_id: &str, receiver_id: &str) -> Option<CitationEdge> {
        let (Some(giver), Some(receiver)) =
            (self.find_article(giver_id), self.find_article(receiver_id))
        else {
            warn!(giver = giver_id, receiver = receiver_id, "cite on unknown article ignored");
            return None;
        };

        let edge = CitationEdge { giver, receiver };
        self.citations.add_edge(edge);

        debug!(giver = giver_id, receiver = receiver_id, "Citation added");
        record_mutation("cite");
        Some(edge)
    }

    /// Add keywords to a venue (propagating to its articles) or to a single article
    pub fn add_keywords<S: AsRef<str>>(&mut self, target: &KeywordTarget, keywords: &[S]) -> bool {
        match target {
            KeywordTarget::Journal(name) => {
                let Some(journal) = self.find_journal(name) else {
                    warn!(journal = %name, "add_keywords on unknown journal ignored");
                    return false;
                };
                self.journals[journal.0].keywords.extend(keywords);
                let articles = self.journal(journal).articles.clone();
                self.extend_article_keywords(&articles, keywords);
            }
            KeywordTarget::Series(name) => {
                let Some(series) = self.find_series(name) else {
                    warn!(series = %name, "add_keywords on unknown series ignored");
                    return false;
                };
                self.series[series.0].keywords.extend(keywords);
                for conference in self.series(series).conferences.clone() {
                    self.conferences[conference.0].keywords.extend(keywords);
                    let articles = self.conference(conference).articles.clone();
                    self.extend_article_keywords(&articles, keywords);
                }
            }
            KeywordTarget::Article(id) => {
                let Some(article) = self.find_article(id) else {
                    warn!(article_id = %id, "add_keywords on unknown article ignored");
                    return false;
                };
                self.articles[article.0].keywords.extend(keywords);
            }
        }

        debug!(keyword_target = ?target, count = keywords.len(), "Keywords added");
        record_mutation("add_keywords");
        true
    }

    fn extend_article_keywords<S: AsRef<str>>(&mut self, articles: &[ArticleKey], keywords: &[S]) {
        for article in articles {
            self.articles[article.0].keywords.extend(keywords);
        }
    }
}
