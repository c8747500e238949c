//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod channel;
pub mod friendship;
pub mod member_role;
pub mod message;
pub mod message_reaction;
pub mod profile;
pub mod server;
pub mod server_member;
pub mod server_role;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` was raised by a unique constraint or unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
