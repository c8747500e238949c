//! Clients for the external collaborators the backend depends on.
//!
//! Each collaborator sits behind a narrow `async-trait` seam so services can be exercised
//! against in-crate stubs:
//!
//! - `identity` - bearer token verification, sign up, sign in and sign out
//! - `blob` - object upload returning a public URL
//! - `completion` - text completion for the auto-responder

pub mod blob;
pub mod completion;
pub mod identity;

use serde_json::Value;

/// Extracts a human readable message from an error body.
///
/// Providers report errors under different keys; the first string found among `msg`,
/// `error_description`, `message` and `error` wins, otherwise the raw body is returned.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
pub mod stub;
