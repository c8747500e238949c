use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Isolated database for one test.
///
/// Every context owns its own `sqlite::memory:` connection, so tests never observe each
/// other's rows. The connection is opened on first use.
pub struct TestContext {
    /// In-memory SQLite connection, `None` until `database()` opens it.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening it on the first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open in-memory connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements produced by `TestBuilder`, parents before children
    ///
    /// # Returns
    /// - `Ok(())` - Schema created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
