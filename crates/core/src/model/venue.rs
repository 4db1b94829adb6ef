//! Publication venues: journals, conference series and their yearly conferences

use super::{ArticleKey, ConferenceKey, JournalKey, KeywordSet, SeriesKey};
use std::fmt;
use std::str::FromStr;

/// Kind of venue named in a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueKind {
    Journal,
    Series,
}

impl VenueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueKind::Journal => "journal",
            VenueKind::Series => "series",
        }
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journal" => Ok(VenueKind::Journal),
            "series" => Ok(VenueKind::Series),
            other => Err(format!("unknown venue kind: {}", other)),
        }
    }
}

/// The venue that owns an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueRef {
    Journal(JournalKey),
    Conference(ConferenceKey),
}

/// A journal with a publisher; owns its articles directly
#[derive(Debug, Clone)]
pub struct Journal {
    name: String,
    publisher: String,
    pub(crate) articles: Vec<ArticleKey>,
    pub(crate) keywords: KeywordSet,
}

impl Journal {
    pub(crate) fn new(name: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            publisher: publisher.into(),
            articles: Vec::new(),
            keywords: KeywordSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn articles(&self) -> &[ArticleKey] {
        &self.articles
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }
}

/// A recurring conference series; articles live in its conferences
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    pub(crate) conferences: Vec<ConferenceKey>,
    pub(crate) keywords: KeywordSet,
}

impl Series {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conferences: Vec::new(),
            keywords: KeywordSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conferences in creation order
    pub fn conferences(&self) -> &[ConferenceKey] {
        &self.conferences
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }
}

/// One yearly occurrence of a series
#[derive(Debug, Clone)]
pub struct Conference {
    series: SeriesKey,
    year: u16,
    location: String,
    pub(crate) articles: Vec<ArticleKey>,
    pub(crate) keywords: KeywordSet,
}

impl Conference {
    pub(crate) fn new(series: SeriesKey, year: u16, location: impl Into<String>) -> Self {
        Self {
            series,
            year,
            location: location.into(),
            articles: Vec::new(),
            keywords: KeywordSet::new(),
        }
    }

    /// Owning series
    pub fn series(&self) -> SeriesKey {
        self.series
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn articles(&self) -> &[ArticleKey] {
        &self.articles
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }
}
