//! Error types for CiteForge
//!
//! Provides the error handling system shared by the core and the shell:
//! - Distinct error variants for every validation failure
//! - Machine-readable error codes
//! - Coarse classification (not-found, duplicate, domain rule, input)
//!
//! The `Display` text of each variant is the message shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input errors (1xxx)
    InvalidCommand,
    InvalidYear,

    // Resource errors (4xxx)
    NotFound,
    AuthorNotFound,
    ArticleNotFound,
    SeriesNotFound,
    VenueNotFound,
    ConferenceNotFound,

    // Conflict errors (5xxx)
    DuplicateAuthor,
    DuplicateJournal,
    DuplicateSeries,
    ConferenceExists,
    ArticleHasVenue,
    AuthorAlreadyAttributed,

    // Domain rule errors (6xxx)
    SelfCitation,
    CitationOrder,
    InvalidPublication,

    // Internal errors (9xxx)
    ConfigurationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Input (1xxx)
            ErrorCode::InvalidCommand => 1001,
            ErrorCode::InvalidYear => 1002,

            // Resources (4xxx)
            ErrorCode::NotFound => 4001,
            ErrorCode::AuthorNotFound => 4002,
            ErrorCode::ArticleNotFound => 4003,
            ErrorCode::SeriesNotFound => 4004,
            ErrorCode::VenueNotFound => 4005,
            ErrorCode::ConferenceNotFound => 4006,

            // Conflicts (5xxx)
            ErrorCode::DuplicateAuthor => 5001,
            ErrorCode::DuplicateJournal => 5002,
            ErrorCode::DuplicateSeries => 5003,
            ErrorCode::ConferenceExists => 5004,
            ErrorCode::ArticleHasVenue => 5005,
            ErrorCode::AuthorAlreadyAttributed => 5006,

            // Domain rules (6xxx)
            ErrorCode::SelfCitation => 6001,
            ErrorCode::CitationOrder => 6002,
            ErrorCode::InvalidPublication => 6003,

            // Internal (9xxx)
            ErrorCode::ConfigurationError => 9001,
        }
    }

    /// Stable snake_case label, used for metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCommand => "invalid_command",
            ErrorCode::InvalidYear => "invalid_year",
            ErrorCode::NotFound => "not_found",
            ErrorCode::AuthorNotFound => "author_not_found",
            ErrorCode::ArticleNotFound => "article_not_found",
            ErrorCode::SeriesNotFound => "series_not_found",
            ErrorCode::VenueNotFound => "venue_not_found",
            ErrorCode::ConferenceNotFound => "conference_not_found",
            ErrorCode::DuplicateAuthor => "duplicate_author",
            ErrorCode::DuplicateJournal => "duplicate_journal",
            ErrorCode::DuplicateSeries => "duplicate_series",
            ErrorCode::ConferenceExists => "conference_exists",
            ErrorCode::ArticleHasVenue => "article_has_venue",
            ErrorCode::AuthorAlreadyAttributed => "author_already_attributed",
            ErrorCode::SelfCitation => "self_citation",
            ErrorCode::CitationOrder => "citation_order",
            ErrorCode::InvalidPublication => "invalid_publication",
            ErrorCode::ConfigurationError => "configuration_error",
        }
    }
}

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity is absent
    NotFound,
    /// An entity or relationship already exists
    Duplicate,
    /// The request breaks a rule of the bibliographic domain
    DomainRule,
    /// The request could not be understood
    Input,
    /// Failure outside the knowledge base
    Internal,
}

impl ErrorKind {
    /// Stable snake_case label, used for metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Duplicate => "duplicate",
            ErrorKind::DomainRule => "domain_rule",
            ErrorKind::Input => "input",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("not a valid command")]
    InvalidCommand,

    #[error("year is not valid")]
    InvalidYear { year: String },

    // Resource errors
    #[error("{resource_type} \"{id}\" not found.")]
    NotFound { resource_type: String, id: String },

    #[error("author not found")]
    AuthorNotFound { name: String },

    #[error("article not found")]
    ArticleNotFound { id: String },

    #[error("conference series not found.")]
    SeriesNotFound { name: String },

    #[error("venue not found")]
    VenueNotFound { name: String },

    #[error("conference in this year does not exist.")]
    ConferenceNotFound { series: String, year: u16 },

    // Conflict errors
    #[error("author with same name already added.")]
    DuplicateAuthor { name: String },

    #[error("journal is already added")]
    DuplicateJournal { name: String },

    #[error("serie is already added")]
    DuplicateSeries { name: String },

    #[error("a conference is already added to this series in this year.")]
    ConferenceExists { series: String, year: u16 },

    #[error("an article can be published in exactly one venue.")]
    ArticleHasVenue { id: String },

    #[error("you can add an author maximum one time to an article")]
    AuthorAlreadyAttributed { article_id: String },

    // Domain rule errors
    #[error("publications cannot cite themselves")]
    SelfCitation { id: String },

    #[error("an article can only cite articles published before it.")]
    CitationOrder { giver: String, receiver: String },

    #[error("you entered an invalid publication")]
    InvalidPublication { id: String },

    // Internal errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidCommand => ErrorCode::InvalidCommand,
            AppError::InvalidYear { .. } => ErrorCode::InvalidYear,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::AuthorNotFound { .. } => ErrorCode::AuthorNotFound,
            AppError::ArticleNotFound { .. } => ErrorCode::ArticleNotFound,
            AppError::SeriesNotFound { .. } => ErrorCode::SeriesNotFound,
            AppError::VenueNotFound { .. } => ErrorCode::VenueNotFound,
            AppError::ConferenceNotFound { .. } => ErrorCode::ConferenceNotFound,
            AppError::DuplicateAuthor { .. } => ErrorCode::DuplicateAuthor,
            AppError::DuplicateJournal { .. } => ErrorCode::DuplicateJournal,
            AppError::DuplicateSeries { .. } => ErrorCode::DuplicateSeries,
            AppError::ConferenceExists { .. } => ErrorCode::ConferenceExists,
            AppError::ArticleHasVenue { .. } => ErrorCode::ArticleHasVenue,
            AppError::AuthorAlreadyAttributed { .. } => ErrorCode::AuthorAlreadyAttributed,
            AppError::SelfCitation { .. } => ErrorCode::SelfCitation,
            AppError::CitationOrder { .. } => ErrorCode::CitationOrder,
            AppError::InvalidPublication { .. } => ErrorCode::InvalidPublication,
            AppError::Configuration { .. } => ErrorCode::ConfigurationError,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidCommand | AppError::InvalidYear { .. } => ErrorKind::Input,

            AppError::NotFound { .. }
            | AppError::AuthorNotFound { .. }
            | AppError::ArticleNotFound { .. }
            | AppError::SeriesNotFound { .. }
            | AppError::VenueNotFound { .. }
            | AppError::ConferenceNotFound { .. } => ErrorKind::NotFound,

            AppError::DuplicateAuthor { .. }
            | AppError::DuplicateJournal { .. }
            | AppError::DuplicateSeries { .. }
            | AppError::ConferenceExists { .. }
            | AppError::ArticleHasVenue { .. }
            | AppError::AuthorAlreadyAttributed { .. } => ErrorKind::Duplicate,

            AppError::SelfCitation { .. }
            | AppError::CitationOrder { .. }
            | AppError::InvalidPublication { .. } => ErrorKind::DomainRule,

            AppError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Shorthand for a named-resource lookup failure
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        AppError::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let err = AppError::ArticleNotFound { id: "a1".into() };
        assert_eq!(err.code(), ErrorCode::ArticleNotFound);
        assert_eq!(err.code().as_code(), 4003);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            AppError::SelfCitation { id: "a1".into() }.to_string(),
            "publications cannot cite themselves"
        );
        assert_eq!(
            AppError::not_found("author", "John Doe").to_string(),
            "author \"John Doe\" not found."
        );
        assert_eq!(
            AppError::DuplicateJournal { name: "TSE".into() }.to_string(),
            "journal is already added"
        );
        assert_eq!(
            AppError::DuplicateSeries { name: "ICSE".into() }.to_string(),
            "serie is already added"
        );
        assert_eq!(AppError::InvalidCommand.to_string(), "not a valid command");
    }

    #[test]
    fn test_domain_rule_errors() {
        let err = AppError::CitationOrder {
            giver: "a1".into(),
            receiver: "a2".into(),
        };
        assert_eq!(err.kind(), ErrorKind::DomainRule);
        assert_eq!(err.kind().as_str(), "domain_rule");
    }

    #[test]
    fn test_internal_error() {
        let err = AppError::Configuration {
            message: "bad log level".into(),
        };
        assert_eq!(err.code(), ErrorCode::ConfigurationError);
        assert_eq!(err.code().as_code(), 9001);
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::AuthorAlreadyAttributed).unwrap();
        assert_eq!(json, "\"AUTHOR_ALREADY_ATTRIBUTED\"");
        assert_eq!(ErrorCode::AuthorAlreadyAttributed.as_str(), "author_already_attributed");
    }
}
