/// Errors surfaced by configuration calls.
///
/// Parsing and suggestion generation never fail: unrecognized input degrades
/// to a partial interpretation and, ultimately, to default suggestions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A custom phrase that is empty after trimming would match every input.
    #[error("custom phrase must not be empty")]
    EmptyPhrase,

    /// Reference timestamp could not be parsed.
    #[error("invalid reference '{0}' (expected YYYY-MM-DDTHH:MM:SS)")]
    InvalidReference(String),
}
