use thiserror::Error;

/// Failures reported by external collaborators (identity provider, blob store,
/// text completion service) after the HTTP exchange itself succeeded.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The service answered with a non-success status code.
    #[error("{service} responded with status {status}: {body}")]
    Status {
        /// Short name of the collaborator
        service: &'static str,
        /// HTTP status code returned
        status: u16,
        /// Response body, kept for the server log only
        body: String,
    },

    /// The service answered successfully but the body did not have the expected shape.
    #[error("{service} returned an unexpected response: {reason}")]
    MalformedResponse {
        /// Short name of the collaborator
        service: &'static str,
        /// What was missing or malformed
        reason: String,
    },
}
