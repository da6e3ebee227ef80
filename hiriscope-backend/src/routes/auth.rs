use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{json, Value as JsonValue};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::services::user_service::UserService;
use crate::utils::crypto::{hash_password, verify_password};
use crate::utils::session::{issue_token, SESSION_COOKIE};
use crate::AppState;

fn start_session(jar: CookieJar, user: &User, message: &str) -> Result<(CookieJar, Json<AuthResponse>)> {
    let config = crate::config::get_config();
    let token = issue_token(user.id, &user.name, &config.session_secret, config.session_ttl_hours)?;
    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .path("/");

    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            success: true,
            message: message.to_string(),
            user: SessionUser {
                id: user.id,
                name: user.name.clone(),
            },
            token,
        }),
    ))
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    let payload = payload.normalized();
    payload.validate()?;

    let password_hash = hash_password(&payload.password)?;
    let svc = UserService::new(state.pool.clone());
    let user = svc
        .create_user(&payload.name, &payload.email, &password_hash)
        .await?;

    start_session(jar, &user, "Registration successful! Welcome to HiRiscope AI.")
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    payload.validate()?;
    let email = payload.email.trim().to_lowercase();

    let svc = UserService::new(state.pool.clone());
    let user = match svc.find_by_email(&email).await? {
        Some(user) if verify_password(&payload.password, &user.password_hash) => user,
        _ => {
            tracing::info!("rejected login attempt");
            return Err(Error::Unauthorized("Invalid email or password.".to_string()));
        }
    };

    tracing::info!(user_id = %user.id, "user logged in");
    start_session(jar, &user, "Welcome back!")
}

#[axum::debug_handler]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<JsonValue>) {
    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Json(json!({ "success": true, "message": "You have been logged out." })),
    )
}
