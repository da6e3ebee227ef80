use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::utils::session::{verify_token, SESSION_COOKIE};

/// The logged-in user, resolved from the session token for this request only.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: String,
}

fn session_token(req: &Request) -> Option<String> {
    let jar = CookieJar::from_headers(req.headers());
    if let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) {
        return Some(cookie.value().to_string());
    }
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub async fn require_session(mut req: Request, next: Next) -> Result<Response> {
    let Some(token) = session_token(&req) else {
        tracing::debug!(path = %req.uri().path(), "no session presented");
        return Err(Error::Unauthorized("Please log in first".to_string()));
    };

    let config = crate::config::get_config();
    let claims = verify_token(&token, &config.session_secret)?;
    req.extensions_mut().insert(AuthUser {
        id: claims.sub,
        name: claims.name,
    });
    Ok(next.run(req).await)
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| Error::Unauthorized("Please log in first".to_string()))
    }
}
