use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::server::model::message::{Reaction, ReactionSummary};

/// Counts reactions per message and emoji.
///
/// Every id in `message_ids` maps to a list, empty when the message has no reactions.
/// Lists are ordered by emoji code point. Rows for messages outside `message_ids` are
/// ignored.
///
/// # Arguments
/// - `message_ids` - Messages to summarize
/// - `rows` - Reaction rows for those messages
///
/// # Returns
/// - Map from message id to its reaction summary
pub fn summarize_reactions(
    message_ids: &[Uuid],
    rows: &[Reaction],
) -> HashMap<Uuid, Vec<ReactionSummary>> {
    let mut counts: HashMap<Uuid, BTreeMap<&str, u64>> = message_ids
        .iter()
        .map(|id| (*id, BTreeMap::new()))
        .collect();

    for row in rows {
        if let Some(per_emoji) = counts.get_mut(&row.message_id) {
            *per_emoji.entry(row.emoji.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(message_id, per_emoji)| {
            let summary = per_emoji
                .into_iter()
                .map(|(emoji, count)| ReactionSummary {
                    emoji: emoji.to_string(),
                    count,
                })
                .collect();
            (message_id, summary)
        })
        .collect()
}
