//! Handlers for the `/contact` resource.
//!
//! Anyone may submit the contact form. Reading, triaging and deleting
//! submissions is admin-only. Opening a submission marks it read; marking it
//! unread again is an explicit `PUT`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use unisoc_core::contact::{SORT_COLUMNS, VALID_STATUSES};
use unisoc_core::pagination::{PageMeta, DEFAULT_LIMIT};
use unisoc_core::types::DbId;
use unisoc_core::validation::validate_input;
use unisoc_db::models::contact::{ContactListParams, CreateContact, UpdateContact};
use unisoc_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{closed_set_filter, page_and_sort};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Contact";

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateContact>,
) -> AppResult<impl IntoResponse> {
    input.email = input.email.trim().to_lowercase();
    validate_input(&input)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(contact_id = contact.id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            "Thank you for your message. We will get back to you soon.",
            contact,
        )),
    ))
}

/// GET /api/v1/contact
pub async fn list_contacts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    let (page, sort) = page_and_sort(
        params.page,
        params.limit,
        params.sort.as_deref(),
        DEFAULT_LIMIT,
        SORT_COLUMNS,
    )?;
    let status = closed_set_filter("status", params.status.as_deref(), VALID_STATUSES)?;

    let contacts = ContactRepo::list(&state.pool, status, page, sort).await?;
    let total = ContactRepo::count(&state.pool, status).await?;
    let meta = PageMeta::new(page, contacts.len(), total);

    Ok(Json(ListResponse::new("Contacts retrieved", contacts, meta)))
}

/// GET /api/v1/contact/{id}
///
/// Returns the submission and marks it read. Reading an already-read
/// submission changes nothing.
pub async fn get_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::read(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::debug!(contact_id = id, user_id = admin.user_id, "Contact opened");

    Ok(Json(DataResponse::new("Contact retrieved", contact)))
}

/// PUT /api/v1/contact/{id}
pub async fn update_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateContact>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(
        contact_id = id,
        status = %contact.status,
        user_id = admin.user_id,
        "Contact updated"
    );

    Ok(Json(DataResponse::new("Contact updated", contact)))
}

/// DELETE /api/v1/contact/{id}
pub async fn delete_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(contact_id = id, user_id = admin.user_id, "Contact deleted");

    Ok(Json(MessageResponse::new("Contact deleted")))
}
