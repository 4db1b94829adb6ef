//! Entity model
//!
//! Entities live in arenas owned by the [`KnowledgeStore`](crate::store::KnowledgeStore)
//! and refer to each other through typed keys. A key is only meaningful for the
//! store that issued it.

mod article;
mod author;
mod keywords;
mod venue;

pub use article::Article;
pub use author::Author;
pub use keywords::KeywordSet;
pub use venue::{Conference, Journal, Series, VenueKind, VenueRef};

macro_rules! arena_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);
    };
}

arena_key!(
    /// Handle to an [`Author`]
    AuthorKey
);
arena_key!(
    /// Handle to a [`Journal`]
    JournalKey
);
arena_key!(
    /// Handle to a [`Series`]
    SeriesKey
);
arena_key!(
    /// Handle to a [`Conference`]
    ConferenceKey
);
arena_key!(
    /// Handle to an [`Article`]
    ArticleKey
);

/// Target of an add-keywords request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordTarget {
    /// Journal by name; propagates to its articles
    Journal(String),
    /// Series by name; propagates to its conferences and their articles
    Series(String),
    /// Article by id; never propagates
    Article(String),
}

impl KeywordTarget {
    /// Build a target from an optional venue kind and a name or id
    pub fn new(kind: Option<VenueKind>, name_or_id: impl Into<String>) -> Self {
        let name_or_id = name_or_id.into();
        match kind {
            Some(VenueKind::Journal) => KeywordTarget::Journal(name_or_id),
            Some(VenueKind::Series) => KeywordTarget::Series(name_or_id),
            None => KeywordTarget::Article(name_or_id),
        }
    }
}
