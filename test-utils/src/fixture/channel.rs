//! Channel fixtures for creating in-memory test data.

use chrono::Utc;
use entity::channel;
use serde_json::Value;
use uuid::Uuid;

/// Default test channel name.
pub const DEFAULT_NAME: &str = "general";

/// Creates a public text channel entity model with a fresh id.
///
/// # Default Values
/// - server_id: random
/// - name: `"general"`
/// - channel_type: `"text"`
/// - position: `0`
/// - is_private: `false`
/// - allowed_roles: `[]`
///
/// # Returns
/// - `channel::Model` - In-memory channel entity
pub fn entity() -> channel::Model {
    entity_builder().build()
}

/// Creates a channel entity builder for customization.
///
/// # Returns
/// - `ChannelEntityBuilder` - Builder with default values
pub fn entity_builder() -> ChannelEntityBuilder {
    ChannelEntityBuilder {
        id: Uuid::new_v4(),
        server_id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
        channel_type: "text".to_string(),
        position: 0,
        is_private: false,
        allowed_roles: Value::Array(Vec::new()),
    }
}

/// Builder for in-memory channel entities.
pub struct ChannelEntityBuilder {
    id: Uuid,
    server_id: Uuid,
    name: String,
    channel_type: String,
    position: i32,
    is_private: bool,
    allowed_roles: Value,
}

impl ChannelEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn server_id(mut self, server_id: Uuid) -> Self {
        self.server_id = server_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn channel_type(mut self, channel_type: impl Into<String>) -> Self {
        self.channel_type = channel_type.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Marks the channel private with the given allowed role ids.
    pub fn private(mut self, allowed_roles: Vec<Uuid>) -> Self {
        self.is_private = true;
        self.allowed_roles = Value::Array(
            allowed_roles
                .into_iter()
                .map(|id| Value::String(id.to_string()))
                .collect(),
        );
        self
    }

    /// Overrides the raw allowed role document.
    pub fn allowed_roles_raw(mut self, allowed_roles: Value) -> Self {
        self.allowed_roles = allowed_roles;
        self
    }

    /// Builds the in-memory channel entity.
    pub fn build(self) -> channel::Model {
        channel::Model {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            channel_type: self.channel_type,
            position: self.position,
            is_private: self.is_private,
            allowed_roles: self.allowed_roles,
            created_at: Utc::now(),
        }
    }
}
