use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{
        AuthResponse, LoginRequest, LogoutResponse, PublicUser, RefreshRequest,
        RegisterRequest, RegisteredResponse,
    },
    extractors::AuthUser,
    jwt::JwtKeys,
    services,
};
use crate::{
    error::{AppError, AppResult},
    session::model::{CurrentUser, SessionId},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn issue_tokens(
    state: &AppState,
    user: PublicUser,
    session_id: SessionId,
) -> AppResult<AuthResponse> {
    let keys = JwtKeys::from_ref(state);
    let access_token = keys
        .sign_access(user.id, session_id)
        .map_err(|e| AppError::Internal(format!("jwt sign access: {e}")))?;
    let refresh_token = keys
        .sign_refresh(user.id, session_id)
        .map_err(|e| AppError::Internal(format!("jwt sign refresh: {e}")))?;
    Ok(AuthResponse {
        access_token,
        refresh_token,
        session_id,
        user,
    })
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisteredResponse>)> {
    let user = services::register(state.users.as_ref(), &payload.email, &payload.password).await?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse {
            user: user.into(),
            message: "Registration successful! Please login.",
        }),
    ))
}

/// Verifies credentials and opens a fresh session with an empty cart.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user =
        services::authenticate(state.users.as_ref(), &payload.email, &payload.password).await?;

    let session_id = state
        .sessions
        .open(CurrentUser {
            id: user.id,
            email: user.email.clone(),
        })
        .await;

    info!(user_id = %user.id, email = %user.email, %session_id, "user logged in");
    Ok(Json(issue_tokens(&state, user.into(), session_id)?))
}

/// New token pair for the same session, as long as that session is still open.
#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    let Some(handle) = state.sessions.get(claims.sid).await else {
        warn!(session_id = %claims.sid, "refresh for closed session");
        return Err(AppError::Unauthorized("Session ended, please login again".into()));
    };
    let user = handle.lock().await.user.clone();

    Ok(Json(issue_tokens(
        &state,
        PublicUser {
            id: user.id,
            email: user.email,
        },
        claims.sid,
    )?))
}

/// Ends the session; its cart and navigation state are discarded.
#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<LogoutResponse>> {
    if state.sessions.close(auth.session_id).await {
        info!(user_id = %auth.user_id, session_id = %auth.session_id, "user logged out");
    }
    Ok(Json(LogoutResponse {
        message: "Logged out",
    }))
}

#[instrument(skip(state))]
pub async fn get_me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<PublicUser>> {
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;
    Ok(Json(user.into()))
}
