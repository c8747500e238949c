use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::profile::ProfileDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub username: String,
    pub redirect_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// User and session objects as issued by the identity provider.
///
/// `session` is `null` when the provider requires email confirmation before issuing one.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AuthSessionDto {
    #[schema(value_type = Object)]
    pub user: Value,
    #[schema(value_type = Option<Object>)]
    pub session: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MeDto {
    #[schema(value_type = Object)]
    pub user: Value,
    pub profile: ProfileDto,
}
