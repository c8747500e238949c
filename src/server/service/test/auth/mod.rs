use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, AppError},
    integration::stub::StubIdentity,
    service::auth::{AuthService, Registration},
};
use test_utils::{builder::TestBuilder, factory};

mod logout;

fn registration(username: &str, password: &str) -> Registration {
    Registration {
        email: format!("{}@example.com", username),
        password: password.to_string(),
        username: username.to_string(),
        redirect_url: None,
    }
}
