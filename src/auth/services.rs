use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, warn};

use super::{
    password::{check_strength, hash_password, verify_password},
    repo::UserStore,
    repo_types::User,
};
use crate::{
    db::StoreError,
    error::{AppError, AppResult},
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Create a user unless the email is already registered.
pub async fn register(users: &dyn UserStore, email: &str, password: &str) -> AppResult<User> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        warn!(%email, "invalid email");
        return Err(AppError::BadRequest("Invalid email".into()));
    }
    check_strength(password).map_err(AppError::BadRequest)?;

    if users.find_by_email(&email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    let hash = hash_password(password).map_err(|e| AppError::Internal(e.to_string()))?;

    // A concurrent registration can slip past the pre-check; the unique index catches it.
    users.create(&email, &hash).await.map_err(|e| match e {
        StoreError::Conflict(_) => AppError::DuplicateEmail,
        other => other.into(),
    })
}

/// Check credentials. Unknown email and wrong password are indistinguishable.
pub async fn authenticate(users: &dyn UserStore, email: &str, password: &str) -> AppResult<User> {
    let email = normalize_email(email);
    if email.is_empty() || password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    let Some(user) = users.find_by_email(&email).await? else {
        warn!(%email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };

    let ok = verify_password(password, &user.password_hash).map_err(|e| {
        error!(error = %e, user_id = %user.id, "stored password hash unreadable");
        AppError::Internal(e.to_string())
    })?;
    if !ok {
        warn!(%email, user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }
    Ok(user)
}
