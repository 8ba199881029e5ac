use thiserror::Error;

/// Failure modes of a single page fetch.
///
/// Field-level coercion problems (a non-numeric longitude string, a null
/// population value) never show up here; they are absorbed by the mappers
/// with a documented default. Anything in this enum aborts the *current*
/// page only — pages fetched before it are kept and handed back to the
/// caller (see [`crate::api::Paged`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built or dispatched at all.
    #[error("request error for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a client/server error status, or the body
    /// could not be read to completion.
    #[error("response error for {url}: {reason}")]
    Response { url: String, reason: String },

    /// The payload was not well-formed JSON, or the paginated envelope was
    /// missing its header element.
    #[error("decode error: {0}")]
    Decode(String),
}

impl Error {
    /// True for errors raised after the request was dispatched.
    pub fn is_response(&self) -> bool {
        matches!(self, Error::Response { .. })
    }
}
