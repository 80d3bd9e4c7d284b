use ::scraper::error::SelectorErrorKind;

/// Why a profile or stats lookup produced no data.
#[derive(thiserror::Error, Debug)]
pub enum UniteError {
    /// Upstream never answered: connection, TLS or timeout.
    #[error("could not reach {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Upstream answered, but not with a 2xx.
    #[error("{url} answered with {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The connection dropped or the body was not valid text mid-read.
    #[error("body of {url} was cut off or unreadable: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("selector does not parse: {0}")]
    Selector(String),

    /// An element the page is expected to contain was not found.
    #[error("required field not found: {context}")]
    MissingField { context: &'static str },

    /// The page structure no longer matches what the extractor knows.
    #[error("schema mismatch in {context}: expected {expected}, found {found}")]
    SchemaMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// Scraped text could not be coerced into the expected number.
    #[error("failed to coerce {field} from {value:?}")]
    Coercion { field: &'static str, value: String },

    /// The stats document did not match its schema.
    #[error("stats document does not match schema: {0}")]
    StatsSchema(#[from] serde_json::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for UniteError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        UniteError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UniteError>;
