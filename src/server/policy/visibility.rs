use crate::server::{model::channel::Channel, policy::Viewer};

/// Returns whether `viewer` may see `channel`.
///
/// Public channels are visible to everyone who can reach the server. A private channel is
/// visible to the owner and to holders of any listed role; with no listed roles it is
/// visible to the owner only.
pub fn channel_visible(channel: &Channel, viewer: &Viewer) -> bool {
    if !channel.is_private || viewer.is_owner {
        return true;
    }

    channel
        .allowed_roles
        .iter()
        .any(|role_id| viewer.holds_role(*role_id))
}

/// Filters `channels` down to those visible to `viewer`, preserving order.
pub fn visible_channels(channels: Vec<Channel>, viewer: &Viewer) -> Vec<Channel> {
    channels
        .into_iter()
        .filter(|channel| channel_visible(channel, viewer))
        .collect()
}
