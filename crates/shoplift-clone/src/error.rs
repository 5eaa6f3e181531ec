use thiserror::Error;

/// Why the remote storefront product could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("product URL is empty")]
    EmptyUrl,

    #[error("invalid product URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty product body from {url}")]
    EmptyBody { url: String },

    #[error("product body from {url} is not a JSON object")]
    NotAnObject { url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why the backend did not create the product.
#[derive(Debug, Error)]
pub enum SubmitFailure {
    #[error("invalid app URL \"{app_url}\": {reason}")]
    InvalidAppUrl { app_url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("backend reported failure (HTTP {status})")]
    Rejected { status: u16 },

    #[error("backend response is missing `{field}`")]
    MissingField { field: &'static str },
}

/// Which half of the clone sequence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStage {
    Fetch,
    Submit,
}

/// Error surfaced at the workflow boundary.
///
/// The `Display` text of the stage variants is what the user sees in the
/// error toast; the precise cause stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum CloneError {
    #[error("product URL is empty")]
    EmptyUrl,

    #[error("a clone is already in progress")]
    InFlight,

    #[error("Failed to fetch product data")]
    Fetch(#[source] FetchFailure),

    #[error("Product creation failed")]
    Submit(#[source] SubmitFailure),
}

impl CloneError {
    /// The stage that failed, if the attempt got as far as the network.
    #[must_use]
    pub fn stage(&self) -> Option<CloneStage> {
        match self {
            CloneError::Fetch(_) => Some(CloneStage::Fetch),
            CloneError::Submit(_) => Some(CloneStage::Submit),
            CloneError::EmptyUrl | CloneError::InFlight => None,
        }
    }
}

impl From<FetchFailure> for CloneError {
    fn from(failure: FetchFailure) -> Self {
        CloneError::Fetch(failure)
    }
}

impl From<SubmitFailure> for CloneError {
    fn from(failure: SubmitFailure) -> Self {
        CloneError::Submit(failure)
    }
}
