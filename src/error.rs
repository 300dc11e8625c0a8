// src/error.rs
//! Error taxonomy for the whole pipeline.
//!
//! Nothing inside the library recovers from these; every variant aborts the run.

use crate::data::RegistrantId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sign-in did not produce an authenticated session.
    #[error("Sign-in failed: {0}")]
    Authentication(String),

    /// A page could not be fetched (transport error or HTTP status).
    #[error("Navigation to {url} failed")]
    Navigation {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An expected element, row, cell or link was not on the page.
    #[error("Extraction failed at {url}: {reason}")]
    Extraction { url: String, reason: String },

    /// A merge step referenced an id the roster never created.
    #[error("Unknown registrant {id} referenced by {source_page}")]
    UnknownRegistrant { id: RegistrantId, source_page: String },

    /// A competition heading matched none of the known category prefixes.
    #[error("Competition '{title}' at {url} matches no known category")]
    ClassificationMiss { title: String, url: String },

    #[error("Cannot parse registrant id from '{text}'")]
    IdParse { text: String },

    #[error("Registrant {0} appears twice in the roster")]
    DuplicateRegistrant(RegistrantId),

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Merge task did not finish: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn extraction(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Extraction { url: url.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
