use sea_orm::DatabaseConnection;

use crate::server::{data::profile::ProfileRepository, error::AppError, model::profile::Profile};

/// Maximum number of profiles returned by a search.
const SEARCH_LIMIT: u64 = 10;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds up to 10 profiles whose username or display name contains `query`.
    ///
    /// # Returns
    /// - `Ok(Vec<Profile>)` - Matching profiles
    /// - `Err(AppError::BadRequest)` - Blank query
    pub async fn search(&self, query: &str) -> Result<Vec<Profile>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        Ok(ProfileRepository::new(self.db)
            .search(query, SEARCH_LIMIT)
            .await?)
    }
}
