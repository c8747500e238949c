//! NotFox Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the NotFox
//! chat backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-backed builders for chat entities
//! - **fixture**: In-memory entity models for unit tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_server_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let owner = test_utils::factory::create_profile(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
