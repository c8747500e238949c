use thiserror::Error;
use uuid::Uuid;

use crate::server::{model::server::PermissionFlag, policy::Viewer};

/// Why a permission was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// The server owner bypasses every flag check.
    Owner,
    /// The first held role with the flag set.
    Role(Uuid),
}

/// Why a permission was refused. The display text is the client-facing reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("Not a member")]
    NotMember,
    #[error("Missing permission: {0}")]
    MissingFlag(PermissionFlag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted(Grant),
    Denied(Denial),
}

impl PermissionDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionDecision::Granted(_))
    }

    pub fn into_result(self) -> Result<Grant, Denial> {
        match self {
            PermissionDecision::Granted(grant) => Ok(grant),
            PermissionDecision::Denied(denial) => Err(denial),
        }
    }
}

/// Resolves whether `viewer` holds `flag` in the server the viewer was built for.
///
/// The owner always passes. A non-owner without a membership always fails. A member
/// passes when any held role sets the flag; roles are OR-ed with no deny overrides and no
/// hierarchy.
///
/// # Arguments
/// - `viewer` - The caller's standing in the server
/// - `flag` - Permission being checked
///
/// # Returns
/// - `PermissionDecision::Granted` - With the reason the flag is held
/// - `PermissionDecision::Denied` - With the reason it is not
pub fn resolve_permission(viewer: &Viewer, flag: PermissionFlag) -> PermissionDecision {
    if viewer.is_owner {
        return PermissionDecision::Granted(Grant::Owner);
    }

    let Some(membership) = viewer.membership.as_ref() else {
        return PermissionDecision::Denied(Denial::NotMember);
    };

    membership
        .roles
        .iter()
        .find(|role| role.permissions.has(flag))
        .map(|role| PermissionDecision::Granted(Grant::Role(role.id)))
        .unwrap_or(PermissionDecision::Denied(Denial::MissingFlag(flag)))
}
