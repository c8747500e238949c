//! Friendship state machine.
//!
//! States are none, pending (requester to recipient) and accepted. A request is only
//! allowed from none; an accept is only allowed by the recipient and is a no-op once
//! accepted. There is no reject, cancel or unfriend transition.

use thiserror::Error;
use uuid::Uuid;

use crate::server::model::friendship::{Friendship, FriendshipStatus};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestRejection {
    #[error("Cannot friend yourself")]
    SelfTarget,
    #[error("Request already pending")]
    AlreadyPending,
    #[error("Already friends")]
    AlreadyFriends,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptRejection {
    #[error("Not authorized to accept this request")]
    NotRecipient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// Pending request moves to accepted.
    Accept,
    /// Already accepted; nothing to write.
    AlreadyAccepted,
}

/// Checks whether `requester` may send a friend request to `target`.
///
/// # Arguments
/// - `requester` - Profile sending the request
/// - `target` - Profile receiving the request
/// - `existing` - Any record for the unordered pair, in either direction
///
/// # Returns
/// - `Ok(())` - No record exists and the target is someone else
/// - `Err(RequestRejection)` - Self request or a record already exists
pub fn check_request(
    requester: Uuid,
    target: Uuid,
    existing: Option<&Friendship>,
) -> Result<(), RequestRejection> {
    if requester == target {
        return Err(RequestRejection::SelfTarget);
    }

    match existing.map(|f| f.status) {
        None => Ok(()),
        Some(FriendshipStatus::Pending) => Err(RequestRejection::AlreadyPending),
        Some(FriendshipStatus::Accepted) => Err(RequestRejection::AlreadyFriends),
    }
}

/// Checks whether `actor` may accept `friendship`.
///
/// # Returns
/// - `Ok(AcceptOutcome::Accept)` - Actor is the recipient of a pending request
/// - `Ok(AcceptOutcome::AlreadyAccepted)` - Actor is the recipient, already accepted
/// - `Err(AcceptRejection::NotRecipient)` - Actor is the requester or unrelated
pub fn check_accept(
    actor: Uuid,
    friendship: &Friendship,
) -> Result<AcceptOutcome, AcceptRejection> {
    if friendship.recipient_id != actor {
        return Err(AcceptRejection::NotRecipient);
    }

    Ok(match friendship.status {
        FriendshipStatus::Pending => AcceptOutcome::Accept,
        FriendshipStatus::Accepted => AcceptOutcome::AlreadyAccepted,
    })
}
