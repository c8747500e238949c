use uuid::Uuid;

/// Mention token that triggers an automatic reply, matched case-insensitively.
pub const MENTION_TOKEN: &str = "@ai";

/// Work item for the auto-responder worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoReplyJob {
    pub channel_id: Uuid,
    /// The triggering message's content, unchanged.
    pub content: String,
}

/// Returns a job when `content` mentions the assistant.
pub fn auto_reply_for(channel_id: Uuid, content: &str) -> Option<AutoReplyJob> {
    if !content.to_lowercase().contains(MENTION_TOKEN) {
        return None;
    }

    Some(AutoReplyJob {
        channel_id,
        content: content.to_string(),
    })
}
