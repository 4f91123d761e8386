use thiserror::Error;

/// Errors surfaced by the resume-generation pipeline.
///
/// Parse degradation (missing or malformed blocks in the model reply) is
/// deliberately not represented here; it shows up as null fields on
/// [`ParsedReply`](crate::ParsedReply) instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Required API credential missing or empty. Raised at construction,
    /// never per request.
    #[error("missing API key for {0}: set GROQ_API_KEY")]
    MissingApiKey(&'static str),

    /// The completion endpoint answered with a non-success status.
    #[error("completion API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The completion request hit the configured timeout.
    #[error("completion request timed out after {0}s")]
    Timeout(u64),

    /// The response envelope lacked `choices[0].message.content`.
    #[error("malformed completion envelope: {0}")]
    MalformedReply(String),

    #[error("unknown prompt template: {0}")]
    TemplateNotFound(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
