use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageResponseDto},
        auth::{AuthSessionDto, LoginDto, MeDto, RegisterDto},
        channel::{ChannelDto, CreateChannelDto},
        friend::{AcceptFriendDto, FriendDto, FriendRequestDto, PendingRequestDto},
        message::{
            AddReactionDto, AttachmentDto, MessageDto, ReactionSummaryDto, SendMessageDto,
        },
        profile::ProfileDto,
        server::{CreateServerDto, JoinServerDto, RolePermissionsDto, ServerDto, ServerRoleDto},
    },
    server::{
        controller::{auth, channel, friend, health, message, server, storage, user},
        state::AppState,
    },
};

/// Largest accepted upload body.
const UPLOAD_BODY_LIMIT: usize = 25 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "NotFox API", description = "Chat backend: servers, channels, messages and friends"),
    modifiers(&BearerSecurity),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        server::get_servers,
        server::create_server,
        server::join_server,
        server::kick_member,
        server::get_server_roles,
        server::assign_role,
        server::remove_role,
        channel::get_server_channels,
        channel::create_channel,
        channel::delete_channel,
        message::get_messages,
        message::send_message,
        message::delete_message,
        message::add_reaction,
        message::remove_reaction,
        friend::send_friend_request,
        friend::accept_friend_request,
        friend::get_friends,
        friend::get_pending_requests,
        user::search_users,
        storage::upload_file,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        MessageResponseDto,
        RegisterDto,
        LoginDto,
        AuthSessionDto,
        MeDto,
        ProfileDto,
        ServerDto,
        CreateServerDto,
        JoinServerDto,
        RolePermissionsDto,
        ServerRoleDto,
        ChannelDto,
        CreateChannelDto,
        MessageDto,
        SendMessageDto,
        AttachmentDto,
        ReactionSummaryDto,
        AddReactionDto,
        FriendRequestDto,
        AcceptFriendDto,
        FriendDto,
        PendingRequestDto,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Accounts and sessions"),
        (name = "server", description = "Servers, membership and roles"),
        (name = "channel", description = "Channels"),
        (name = "message", description = "Messages and reactions"),
        (name = "friend", description = "Friend requests and friends"),
        (name = "user", description = "Profile search"),
        (name = "storage", description = "Attachment uploads"),
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            let scheme = HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("Bearer <token>")
                .build();

            components.add_security_scheme("BearerAuth", SecurityScheme::Http(scheme));
        }
    }
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/servers",
            get(server::get_servers).post(server::create_server),
        )
        .route("/api/servers/join", post(server::join_server))
        .route(
            "/api/servers/{server_id}/channels",
            get(channel::get_server_channels),
        )
        .route("/api/servers/{server_id}/roles", get(server::get_server_roles))
        .route(
            "/api/servers/{server_id}/members/{profile_id}",
            delete(server::kick_member),
        )
        .route(
            "/api/servers/{server_id}/members/{profile_id}/roles/{role_id}",
            put(server::assign_role).delete(server::remove_role),
        )
        .route("/api/channels", post(channel::create_channel))
        .route("/api/channels/{id}", delete(channel::delete_channel))
        .route("/api/messages", post(message::send_message))
        .route(
            "/api/messages/{id}",
            get(message::get_messages).delete(message::delete_message),
        )
        .route("/api/messages/{id}/reactions", post(message::add_reaction))
        .route(
            "/api/messages/{id}/reactions/{emoji}",
            delete(message::remove_reaction),
        )
        .route("/api/friends", get(friend::get_friends))
        .route("/api/friends/pending", get(friend::get_pending_requests))
        .route("/api/friends/request", post(friend::send_friend_request))
        .route("/api/friends/accept", post(friend::accept_friend_request))
        .route("/api/users/search", get(user::search_users))
        .route(
            "/api/storage/upload",
            post(storage::upload_file).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
