//! Request guards.
//!
//! - `bearer` - Extraction of the `Authorization: Bearer` credential
//! - `auth` - `AuthGuard` resolving the credential to the caller's identity and profile

pub mod auth;
pub mod bearer;
