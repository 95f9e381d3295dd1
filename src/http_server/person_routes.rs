//! Person HTTP Routes
//!
//! CRUD endpoints for phonebook entries, nested under `/api`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::store::{Person, PersonDraft, PersonStore};

use super::errors::{ApiError, ApiResult};
use super::server::unknown_endpoint;

// ==================
// Shared State
// ==================

/// Phonebook state shared across handlers
pub struct PhonebookState {
    pub store: Arc<dyn PersonStore>,
}

impl PhonebookState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }
}

// ==================
// Person Routes
// ==================

/// Create person routes
///
/// Unsupported methods on these paths get the unknown endpoint response
/// instead of 405.
pub fn person_routes(state: Arc<PhonebookState>) -> Router {
    Router::new()
        .route(
            "/persons",
            get(list_persons_handler)
                .post(create_person_handler)
                .fallback(unknown_endpoint),
        )
        .route(
            "/persons/:id",
            get(get_person_handler)
                .put(replace_person_handler)
                .delete(delete_person_handler)
                .fallback(unknown_endpoint),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode a person body
///
/// A body sent without a JSON content type, or an empty one, counts as an
/// empty object.
fn read_draft(headers: &HeaderMap, body: &Bytes) -> ApiResult<PersonDraft> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PersonDraft::default());
    }

    let Json(draft) = Json::<PersonDraft>::from_bytes(body)?;
    Ok(draft)
}

/// `application/json` or any `application/*+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

fn person_or_not_found(person: Option<Person>) -> Response {
    match person {
        Some(person) => Json(person).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// ==================
// Handlers
// ==================

async fn list_persons_handler(
    State(state): State<Arc<PhonebookState>>,
) -> ApiResult<Json<Vec<Person>>> {
    let persons = state
        .store
        .find_all()
        .await
        .map_err(ApiError::PhonebookUnavailable)?;

    Ok(Json(persons))
}

async fn get_person_handler(
    State(state): State<Arc<PhonebookState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let person = state.store.find_by_id(&id).await?;
    Ok(person_or_not_found(person))
}

async fn delete_person_handler(
    State(state): State<Arc<PhonebookState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if let Some(deleted) = state.store.delete(&id).await? {
        tracing::debug!(id = %deleted.id, "person deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn create_person_handler(
    State(state): State<Arc<PhonebookState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Person>> {
    let draft = read_draft(&headers, &body)?;
    if !draft.is_complete() {
        return Err(ApiError::MissingFields);
    }

    let person = state.store.insert(draft).await?;
    tracing::debug!(id = %person.id, "person created");
    Ok(Json(person))
}

async fn replace_person_handler(
    State(state): State<Arc<PhonebookState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let draft = read_draft(&headers, &body)?;
    let person = state.store.replace(&id, draft).await?;
    Ok(person_or_not_found(person))
}
