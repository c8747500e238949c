use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Profile, Server};
///
/// let test = TestBuilder::new()
///     .with_table(Profile)
///     .with_table(Server)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for server, role and channel operations.
    ///
    /// Adds in dependency order:
    /// - Profile
    /// - Server
    /// - ServerMember
    /// - ServerRole
    /// - MemberRole
    /// - Channel
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_server_tables(self) -> Self {
        self.with_table(Profile)
            .with_table(Server)
            .with_table(ServerMember)
            .with_table(ServerRole)
            .with_table(MemberRole)
            .with_table(Channel)
    }

    /// Adds every table of the chat schema.
    ///
    /// Equivalent to `with_server_tables()` followed by Friendship, Message and
    /// MessageReaction.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_chat_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_chat_tables(self) -> Self {
        self.with_server_tables()
            .with_table(Friendship)
            .with_table(Message)
            .with_table(MessageReaction)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
