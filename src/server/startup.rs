use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    integration::{
        blob::SupabaseStorage, completion::GeminiClient, completion::TextCompletion,
        identity::SupabaseIdentity,
    },
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by every external collaborator.
///
/// Redirects are disabled so a collaborator URL can never bounce requests elsewhere.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(client)
}

pub fn setup_identity(config: &Config, http: reqwest::Client) -> Arc<SupabaseIdentity> {
    Arc::new(SupabaseIdentity::new(
        http,
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
    ))
}

pub fn setup_storage(config: &Config, http: reqwest::Client) -> Arc<SupabaseStorage> {
    Arc::new(SupabaseStorage::new(
        http,
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
        config.storage_bucket.clone(),
    ))
}

/// Builds the completion client when an API key is configured.
///
/// # Returns
/// - `Some(client)` - `GEMINI_API_KEY` is set
/// - `None` - No key; the auto-responder worker will skip every job
pub fn setup_completion(
    config: &Config,
    http: reqwest::Client,
) -> Option<Arc<dyn TextCompletion>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        tracing::warn!("GEMINI_API_KEY not set, automatic replies are disabled");
        return None;
    };

    Some(Arc::new(GeminiClient::new(
        http,
        config.gemini_api_url.clone(),
        api_key,
        config.gemini_model.clone(),
    )))
}
