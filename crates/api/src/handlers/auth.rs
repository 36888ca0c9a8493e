//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use unisoc_core::error::CoreError;
use unisoc_core::member::STATUS_PENDING;
use unisoc_core::roles::ROLE_MEMBER;
use unisoc_core::validation::FieldErrors;
use unisoc_db::models::user::{CreateUser, LoginRequest, RegisterUser, UserResponse};
use unisoc_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{check_password, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Payload returned by a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Files a membership request: the account is created `pending` and cannot
/// log in until an admin approves it.
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<RegisterUser>,
) -> AppResult<impl IntoResponse> {
    input.email = input.email.trim().to_lowercase();

    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => FieldErrors::from(&e),
    };
    if let Err(msg) = check_password(&input.password) {
        errors.add("password", msg);
    }
    errors.into_result()?;

    if UserRepo::find_by_email(&state.pool, &input.email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let RegisterUser {
        name,
        email,
        phone,
        faculty,
        batch,
        student_id,
        facebook_url,
        linkedin_url,
        ..
    } = input;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name,
            email,
            password_hash,
            phone,
            faculty,
            batch,
            student_id,
            facebook_url,
            linkedin_url,
            role: ROLE_MEMBER.to_string(),
            status: STATUS_PENDING.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Membership request received");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            "Registration received. An administrator will review your request.",
            UserResponse::from(user),
        )),
    ))
}

/// POST /api/v1/auth/login
///
/// Unknown email and wrong password get the same 401. Accounts still
/// awaiting approval get 403.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Login failed: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    if user.status == STATUS_PENDING {
        return Err(AppError::Core(CoreError::Forbidden(
            "Your membership request is awaiting approval".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(DataResponse::new(
        "Login successful",
        LoginResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.config.jwt.expires_in_secs(),
            user: UserResponse::from(user),
        },
    )))
}

/// GET /api/v1/auth/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    Ok(Json(DataResponse::new(
        "Profile retrieved",
        UserResponse::from(user),
    )))
}
