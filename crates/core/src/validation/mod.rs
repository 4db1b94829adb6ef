//! Pre-flight checks
//!
//! Every mutating or parameterised command is checked here before the store is
//! touched. Checks run in a fixed order and the first failing one decides the
//! error, so a rejected request never leaves a partial effect. Successful checks
//! hand back the keys they resolved.

use crate::model::{ArticleKey, AuthorKey, KeywordTarget, SeriesKey, VenueKind};
use crate::store::KnowledgeStore;
use citeforge_common::errors::{AppError, Result};
use citeforge_common::{MAX_YEAR, MIN_YEAR};
use std::collections::HashSet;

/// Parse a year and check it lies in `[MIN_YEAR, MAX_YEAR]`
pub fn parse_year(raw: &str) -> Result<u16> {
    let invalid = || AppError::InvalidYear {
        year: raw.to_string(),
    };

    let year: u32 = raw.trim().parse().map_err(|_| invalid())?;
    if !(u32::from(MIN_YEAR)..=u32::from(MAX_YEAR)).contains(&year) {
        return Err(invalid());
    }
    u16::try_from(year).map_err(|_| invalid())
}

/// Read-only checks against a store
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> Validator<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    pub fn check_new_author(&self, full_name: &str) -> Result<()> {
        if self.store.find_author(full_name).is_some() {
            return Err(AppError::DuplicateAuthor {
                name: full_name.to_string(),
            });
        }
        Ok(())
    }

    pub fn check_new_journal(&self, name: &str) -> Result<()> {
        if self.store.find_journal(name).is_some() {
            return Err(AppError::DuplicateJournal {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn check_new_series(&self, name: &str) -> Result<()> {
        if self.store.find_series(name).is_some() {
            return Err(AppError::DuplicateSeries {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Series exists, year is valid, and the series has no conference that year
    pub fn check_new_conference(&self, series_name: &str, raw_year: &str) -> Result<u16> {
        let series = self.require_series(series_name)?;
        let year = parse_year(raw_year)?;

        if self.store.find_conference(series, year).is_some() {
            return Err(AppError::ConferenceExists {
                series: series_name.to_string(),
                year,
            });
        }
        Ok(year)
    }

    /// Venue exists, year is valid, id is unused, and (for a series) the
    /// conference of that year exists
    pub fn check_add_article(
        &self,
        kind: VenueKind,
        venue_name: &str,
        id: &str,
        raw_year: &str,
    ) -> Result<u16> {
        let venue_exists = match kind {
            VenueKind::Journal => self.store.find_journal(venue_name).is_some(),
            VenueKind::Series => self.store.find_series(venue_name).is_some(),
        };
        if !venue_exists {
            return Err(AppError::VenueNotFound {
                name: venue_name.to_string(),
            });
        }

        let year = parse_year(raw_year)?;

        if self.store.find_article(id).is_some() {
            return Err(AppError::ArticleHasVenue { id: id.to_string() });
        }

        if kind == VenueKind::Series {
            let series = self.require_series(venue_name)?;
            if self.store.find_conference(series, year).is_none() {
                return Err(AppError::ConferenceNotFound {
                    series: venue_name.to_string(),
                    year,
                });
            }
        }

        Ok(year)
    }

    /// Article exists, every author exists, and no author is named twice or
    /// already attributed
    pub fn check_written_by<S: AsRef<str>>(
        &self,
        article_id: &str,
        author_names: &[S],
    ) -> Result<ArticleKey> {
        let article = self.require_article(article_id)?;

        let authors = author_names
            .iter()
            .map(|name| self.require_author(name.as_ref()))
            .collect::<Result<Vec<AuthorKey>>>()?;

        let unique: HashSet<AuthorKey> = authors.iter().copied().collect();
        let already_attributed = self
            .store
            .article(article)
            .authors()
            .iter()
            .any(|existing| unique.contains(existing));

        if unique.len() < authors.len() || already_attributed {
            return Err(AppError::AuthorAlreadyAttributed {
                article_id: article_id.to_string(),
            });
        }
        Ok(article)
    }

    /// Not a self-citation, both articles exist, and the giver is strictly newer
    pub fn check_citation(
        &self,
        giver_id: &str,
        receiver_id: &str,
    ) -> Result<(ArticleKey, ArticleKey)> {
        if giver_id == receiver_id {
            return Err(AppError::SelfCitation {
                id: giver_id.to_string(),
            });
        }

        let giver = self.require_article(giver_id)?;
        let receiver = self.require_article(receiver_id)?;

        if self.store.article(giver).year() <= self.store.article(receiver).year() {
            return Err(AppError::CitationOrder {
                giver: giver_id.to_string(),
                receiver: receiver_id.to_string(),
            });
        }
        Ok((giver, receiver))
    }

    pub fn check_keyword_target(&self, target: &KeywordTarget) -> Result<()> {
        let venue_not_found = |name: &String| AppError::VenueNotFound { name: name.clone() };

        match target {
            KeywordTarget::Journal(name) => self
                .store
                .find_journal(name)
                .map(|_| ())
                .ok_or_else(|| venue_not_found(name)),
            KeywordTarget::Series(name) => self
                .store
                .find_series(name)
                .map(|_| ())
                .ok_or_else(|| venue_not_found(name)),
            KeywordTarget::Article(id) => self.require_article(id).map(|_| ()),
        }
    }

    pub fn require_author(&self, full_name: &str) -> Result<AuthorKey> {
        self.store
            .find_author(full_name)
            .ok_or_else(|| AppError::AuthorNotFound {
                name: full_name.to_string(),
            })
    }

    pub fn require_article(&self, id: &str) -> Result<ArticleKey> {
        self.store
            .find_article(id)
            .ok_or_else(|| AppError::ArticleNotFound { id: id.to_string() })
    }

    fn require_series(&self, name: &str) -> Result<SeriesKey> {
        self.store
            .find_series(name)
            .ok_or_else(|| AppError::SeriesNotFound {
                name: name.to_string(),
            })
    }

    /// Every listed author exists; the error names the first missing one
    pub fn check_publications_by<S: AsRef<str>>(&self, author_names: &[S]) -> Result<Vec<AuthorKey>> {
        author_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.store
                    .find_author(name)
                    .ok_or_else(|| AppError::not_found("author", name))
            })
            .collect()
    }

    /// Series exists and held a conference in the year
    pub fn check_proceedings(&self, series_name: &str, raw_year: &str) -> Result<(SeriesKey, u16)> {
        let series = self
            .store
            .find_series(series_name)
            .ok_or_else(|| AppError::not_found("series", series_name))?;
        let year = parse_year(raw_year)?;

        if self.store.find_conference(series, year).is_none() {
            return Err(AppError::ConferenceNotFound {
                series: series_name.to_string(),
                year,
            });
        }
        Ok((series, year))
    }

    /// Both articles exist
    pub fn check_similarity(&self, first: &str, second: &str) -> Result<(ArticleKey, ArticleKey)> {
        Ok((self.require_article(first)?, self.require_article(second)?))
    }

    /// Every id names an article with at least one author
    pub fn check_bibliography<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<ArticleKey>> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                let article = self.require_article(id)?;
                if self.store.article(article).is_invalid() {
                    return Err(AppError::InvalidPublication { id: id.to_string() });
                }
                Ok(article)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citeforge_common::ErrorCode;

    fn store() -> KnowledgeStore {
        let mut store = KnowledgeStore::new();
        store.add_journal("TSE", "IEEE");
        store.add_series("ICSE");
        store.add_conference("ICSE", 2019, "Montreal");
        store.add_author("John", "Doe");
        store.add_author("Jane", "Roe");
        store.add_article_to(VenueKind::Journal, "TSE", "a1", 2020, "T1");
        store.add_article_to(VenueKind::Journal, "TSE", "a2", 2020, "T2");
        store.add_article_to(VenueKind::Series, "ICSE", "c1", 2019, "C1");
        store.attribute_authors("a1", &["John Doe"]);
        store
    }

    fn code<T: std::fmt::Debug>(result: Result<T>) -> ErrorCode {
        result.unwrap_err().code()
    }

    #[test]
    fn test_parse_year_bounds() {
        assert_eq!(parse_year("0").unwrap(), 0);
        assert_eq!(parse_year("9999").unwrap(), 9999);
        assert_eq!(parse_year("0042").unwrap(), 42);
        assert_eq!(code(parse_year("10000")), ErrorCode::InvalidYear);
        assert_eq!(code(parse_year("19x")), ErrorCode::InvalidYear);
    }

    #[test]
    fn test_duplicate_entities() {
        let store = store();
        let validator = Validator::new(&store);

        assert_eq!(code(validator.check_new_author("John Doe")), ErrorCode::DuplicateAuthor);
        assert_eq!(code(validator.check_new_journal("TSE")), ErrorCode::DuplicateJournal);
        assert_eq!(code(validator.check_new_series("ICSE")), ErrorCode::DuplicateSeries);
        assert!(validator.check_new_author("Max Mustermann").is_ok());
        // Journals and series live in separate namespaces
        assert!(validator.check_new_journal("ICSE").is_ok());
    }

    #[test]
    fn test_conference_check_order() {
        let store = store();
        let validator = Validator::new(&store);

        // Unknown series wins over an invalid year
        assert_eq!(
            code(validator.check_new_conference("FSE", "12345")),
            ErrorCode::SeriesNotFound
        );
        assert_eq!(
            code(validator.check_new_conference("ICSE", "12345")),
            ErrorCode::InvalidYear
        );
        assert_eq!(
            code(validator.check_new_conference("ICSE", "2019")),
            ErrorCode::ConferenceExists
        );
        assert_eq!(validator.check_new_conference("ICSE", "2020").unwrap(), 2020);
    }

    #[test]
    fn test_add_article_check_order() {
        let store = store();
        let validator = Validator::new(&store);

        assert_eq!(
            code(validator.check_add_article(VenueKind::Journal, "ICSE", "x", "2020")),
            ErrorCode::VenueNotFound
        );
        assert_eq!(
            code(validator.check_add_article(VenueKind::Journal, "TSE", "a1", "99999")),
            ErrorCode::InvalidYear
        );
        assert_eq!(
            code(validator.check_add_article(VenueKind::Series, "ICSE", "a1", "2030")),
            ErrorCode::ArticleHasVenue
        );
        assert_eq!(
            code(validator.check_add_article(VenueKind::Series, "ICSE", "x", "2030")),
            ErrorCode::ConferenceNotFound
        );
        assert_eq!(
            validator
                .check_add_article(VenueKind::Series, "ICSE", "x", "2019")
                .unwrap(),
            2019
        );
    }

    #[test]
    fn test_written_by() {
        let store = store();
        let validator = Validator::new(&store);

        assert_eq!(
            code(validator.check_written_by("zz", &["John Doe"])),
            ErrorCode::ArticleNotFound
        );
        assert_eq!(
            code(validator.check_written_by("a2", &["John Doe", "No Body"])),
            ErrorCode::AuthorNotFound
        );
        assert_eq!(
            code(validator.check_written_by("a2", &["John Doe", "John Doe"])),
            ErrorCode::AuthorAlreadyAttributed
        );
        assert_eq!(
            code(validator.check_written_by("a1", &["Jane Roe", "John Doe"])),
            ErrorCode::AuthorAlreadyAttributed
        );
        assert!(validator.check_written_by("a1", &["Jane Roe"]).is_ok());
    }

    #[test]
    fn test_citation_rules() {
        let store = store();
        let validator = Validator::new(&store);

        assert_eq!(code(validator.check_citation("a1", "a1")), ErrorCode::SelfCitation);
        assert_eq!(code(validator.check_citation("a1", "zz")), ErrorCode::ArticleNotFound);
        // Same year is rejected
        assert_eq!(code(validator.check_citation("a2", "a1")), ErrorCode::CitationOrder);
        assert_eq!(code(validator.check_citation("c1", "a1")), ErrorCode::CitationOrder);

        let (giver, receiver) = validator.check_citation("a1", "c1").unwrap();
        assert_eq!(store.article(giver).id(), "a1");
        assert_eq!(store.article(receiver).id(), "c1");
    }

    #[test]
    fn test_rejected_citation_leaves_no_edge() {
        let mut store = store();
        let checked = Validator::new(&store).check_citation("c1", "a1").map(|_| ());
        if checked.is_ok() {
            store.cite("c1", "a1");
        }

        assert!(checked.is_err());
        assert_eq!(store.citations().edge_count(), 0);
    }

    #[test]
    fn test_keyword_targets() {
        let store = store();
        let validator = Validator::new(&store);

        assert!(validator.check_keyword_target(&KeywordTarget::Series("ICSE".into())).is_ok());
        assert_eq!(
            code(validator.check_keyword_target(&KeywordTarget::Journal("ICSE".into()))),
            ErrorCode::VenueNotFound
        );
        assert_eq!(
            code(validator.check_keyword_target(&KeywordTarget::Article("zz".into()))),
            ErrorCode::ArticleNotFound
        );
    }

    #[test]
    fn test_query_preconditions_name_the_missing_resource() {
        let store = store();
        let validator = Validator::new(&store);

        let err = validator
            .check_publications_by(&["John Doe", "No Body"])
            .unwrap_err();
        assert_eq!(err.to_string(), "author \"No Body\" not found.");

        let err = validator.check_proceedings("FSE", "2019").unwrap_err();
        assert_eq!(err.to_string(), "series \"FSE\" not found.");
        assert_eq!(
            code(validator.check_proceedings("ICSE", "2020")),
            ErrorCode::ConferenceNotFound
        );
        assert_eq!(validator.check_proceedings("ICSE", "2019").unwrap().1, 2019);
    }

    #[test]
    fn test_bibliography_requires_authors() {
        let store = store();
        let validator = Validator::new(&store);

        assert_eq!(
            code(validator.check_bibliography(&["a1", "zz"])),
            ErrorCode::ArticleNotFound
        );
        assert_eq!(
            code(validator.check_bibliography(&["a1", "a2"])),
            ErrorCode::InvalidPublication
        );
        assert_eq!(validator.check_bibliography(&["a1", "a1"]).unwrap().len(), 2);
    }
}
