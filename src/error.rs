use std::path::PathBuf;

/// Errors surfaced by the library.
///
/// A data-point response with the wrong JSON shape is *not* an error: it is
/// normalised to an empty series (see [`crate::api::data_points_from_json`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Frequency index or code outside the fixed set of four.
    #[error("invalid frequency choice: {choice}")]
    InvalidChoice { choice: String },

    /// Network/transport failure reaching the API.
    #[error("GET {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status where a well-formed body is required.
    #[error("GET {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be decoded.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Chart rendering failed (plotters errors are backend-generic, so they are stringified).
    #[error("plot error: {0}")]
    Plot(String),
}

impl Error {
    pub(crate) fn invalid_choice(choice: impl ToString) -> Self {
        Error::InvalidChoice {
            choice: choice.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
