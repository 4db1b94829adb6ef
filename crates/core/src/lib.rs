//! CiteForge Core
//!
//! In-memory bibliographic knowledge base:
//! - Entity model and keyed store for authors, venues and articles
//! - Citation graph
//! - Mutations with keyword propagation
//! - Validation run before every mutation
//! - Analytic queries (g-index, co-authors, foreign citations, similarity)
//! - Bibliography resolution with APA and ACM rendering

pub mod bibliography;
pub mod citation;
pub mod model;
pub mod query;
pub mod store;
pub mod validation;

pub use bibliography::{BibliographyEntry, Style};
pub use model::{ArticleKey, AuthorKey, KeywordTarget, VenueKind, VenueRef};
pub use query::QueryEngine;
pub use store::KnowledgeStore;
pub use validation::Validator;
