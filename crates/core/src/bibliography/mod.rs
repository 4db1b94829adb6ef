//! Bibliography resolution and rendering
//!
//! Articles are resolved into self-contained [`BibliographyEntry`] values in
//! bibliography order; the style modules turn entries into lines.

pub mod acm;
pub mod apa;

use crate::model::{ArticleKey, VenueRef};
use crate::query::sort_articles;
use crate::store::KnowledgeStore;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Citation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Acm,
    Apa,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Acm => "acm",
            Style::Apa => "apa",
        }
    }

    /// Format one entry in this style
    pub fn format(&self, entry: &BibliographyEntry) -> String {
        match self {
            Style::Acm => acm::format_entry(entry),
            Style::Apa => apa::format_entry(entry),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acm" => Ok(Style::Acm),
            "apa" => Ok(Style::Apa),
            other => Err(format!("unknown bibliography style: {}", other)),
        }
    }
}

/// Author as printed in a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryAuthor {
    pub name: String,
    pub surname: String,
}

impl EntryAuthor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Conference details of a conference article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceInfo {
    pub year: u16,
    pub location: String,
}

/// Everything a style needs to print one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibliographyEntry {
    pub id: String,
    /// Authors in authorship order; never empty for a valid article
    pub authors: Vec<EntryAuthor>,
    pub title: String,
    pub year: u16,
    /// Journal name, or series name for conference articles
    pub venue_name: String,
    /// Present for conference articles only
    pub conference: Option<ConferenceInfo>,
}

impl BibliographyEntry {
    fn from_store(store: &KnowledgeStore, key: ArticleKey) -> Self {
        let article = store.article(key);

        let authors = article
            .authors()
            .iter()
            .map(|&a| {
                let author = store.author(a);
                EntryAuthor {
                    name: author.name().to_string(),
                    surname: author.surname().to_string(),
                }
            })
            .collect();

        let conference = match article.venue() {
            VenueRef::Journal(_) => None,
            VenueRef::Conference(c) => {
                let conference = store.conference(c);
                Some(ConferenceInfo {
                    year: conference.year(),
                    location: conference.location().to_string(),
                })
            }
        };

        Self {
            id: article.id().to_string(),
            authors,
            title: article.title().to_string(),
            year: article.year(),
            venue_name: store.venue_name(article.venue()).to_string(),
            conference,
        }
    }
}

/// Resolve articles into entries sorted by the bibliography order
///
/// Keys are expected to have passed
/// [`Validator::check_bibliography`](crate::validation::Validator::check_bibliography).
pub fn resolve(store: &KnowledgeStore, articles: &[ArticleKey]) -> Vec<BibliographyEntry> {
    let mut sorted = articles.to_vec();
    sort_articles(store, &mut sorted);

    sorted
        .into_iter()
        .map(|key| BibliographyEntry::from_store(store, key))
        .collect()
}

/// Render entries, dropping repeated lines
pub fn render(style: Style, entries: &[BibliographyEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|entry| style.format(entry))
        .filter(|line| seen.insert(line.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VenueKind;

    fn store() -> KnowledgeStore {
        let mut store = KnowledgeStore::new();
        store.add_journal("TSE", "IEEE");
        store.add_series("ICSE");
        store.add_conference("ICSE", 2019, "Montreal");
        store.add_author("John", "Doe");
        store.add_author("ada", "Lovelace");
        store.add_article_to(VenueKind::Journal, "TSE", "j1", 2020, "Graphs");
        store.add_article_to(VenueKind::Series, "ICSE", "c1", 2019, "Fuzzing");
        store.attribute_authors("j1", &["John Doe"]);
        store.attribute_authors("c1", &["ada Lovelace", "John Doe"]);
        store
    }

    fn keys(store: &KnowledgeStore, ids: &[&str]) -> Vec<ArticleKey> {
        ids.iter().map(|id| store.find_article(id).unwrap()).collect()
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("acm".parse::<Style>(), Ok(Style::Acm));
        assert_eq!("apa".parse::<Style>(), Ok(Style::Apa));
        assert!("mla".parse::<Style>().is_err());
    }

    #[test]
    fn test_resolve_sorts_and_carries_conference() {
        let store = store();
        let entries = resolve(&store, &keys(&store, &["j1", "c1"]));

        // "Doe" sorts before "Lovelace"
        assert_eq!(entries[0].id, "j1");
        assert_eq!(entries[0].conference, None);
        assert_eq!(entries[1].id, "c1");
        assert_eq!(entries[1].venue_name, "ICSE");
        assert_eq!(
            entries[1].conference,
            Some(ConferenceInfo {
                year: 2019,
                location: "Montreal".into()
            })
        );
    }

    #[test]
    fn test_render_deduplicates_in_order() {
        let store = store();
        let entries = resolve(&store, &keys(&store, &["c1", "j1", "c1"]));

        assert_eq!(
            render(Style::Acm, &entries),
            vec![
                "John Doe. 2020. Graphs. TSE.",
                "ada Lovelace and John Doe. Fuzzing. In Proceedings of ICSE, 2019, Montreal.",
            ]
        );
        assert_eq!(
            render(Style::Apa, &entries),
            vec![
                "Doe, J. (2020). Graphs. TSE",
                "Lovelace, A., & Doe, J. (2019). Fuzzing. ICSE, Montreal",
            ]
        );
    }

    #[test]
    fn test_journal_entry_has_no_conference() {
        let store = store();
        let entries = resolve(&store, &keys(&store, &["j1"]));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].authors[0].full_name(), "John Doe");
        assert_eq!(entries[0].venue_name, "TSE");
        assert!(entries[0].conference.is_none());
    }
}
