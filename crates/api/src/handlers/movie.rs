//! Handlers for the `/movie` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use movies_core::error::CoreError;
use movies_core::movie::{self, ENTITY};
use movies_core::pagination::PageRequest;
use movies_core::patch::PatchDocument;
use movies_core::types::DbId;
use movies_db::models::movie::{CreateMovie, Movie, ReadMovie, UpdateMovie};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load(state: &AppState, id: DbId) -> AppResult<Movie> {
    state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
}

/// Run the rule table over a raw body, then decode it.
///
/// A mistyped or out-of-range field is a rule violation here, never a
/// decode error.
fn decode_body<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    movie::validate_fields(movie::as_object(&body)?)?;
    serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid movie body: {e}")))
}

/// POST /movie
///
/// Responds 201 with the stored movie and a `Location` pointing at it.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateMovie = decode_body(body)?;

    let created = state.store.create(input.into()).await?;
    tracing::info!(movie_id = created.id, title = %created.title, "Movie created");

    let location = format!("/movie/{}", created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// GET /movie?skip=&take=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ReadMovie>>> {
    let page = PageRequest::new(params.skip, params.take);
    let movies = state.store.list(page.skip, page.take).await?;

    let now = Utc::now();
    let items = movies
        .into_iter()
        .map(|m| ReadMovie::from_movie(m, now))
        .collect();
    Ok(Json(items))
}

/// GET /movie/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReadMovie>> {
    let movie = load(&state, id).await?;
    Ok(Json(ReadMovie::from_movie(movie, Utc::now())))
}

/// PUT /movie/{id}
///
/// Replaces every mutable field. Validation runs before the lookup, so an
/// invalid body is a 400 even for a missing id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<StatusCode> {
    let input: UpdateMovie = decode_body(body)?;

    let mut current = load(&state, id).await?;
    current.apply_update(input);
    save(&state, id, &current).await?;

    tracing::info!(movie_id = id, "Movie updated");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /movie/{id}
///
/// Applies a JSON Patch document to the movie's update shape. The merged
/// result is validated as a whole; nothing is written unless every
/// operation applies and the result is valid.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchDocument>,
) -> AppResult<StatusCode> {
    let mut current = load(&state, id).await?;

    let mut shape = serde_json::to_value(UpdateMovie::from(&current))
        .map_err(|e| AppError::InternalError(format!("Failed to render movie: {e}")))?;
    patch.apply(&mut shape).map_err(CoreError::from)?;

    movie::validate_known_fields(movie::as_object(&shape)?)?;

    let patched: UpdateMovie = serde_json::from_value(shape)
        .map_err(|e| AppError::BadRequest(format!("Invalid patched movie: {e}")))?;
    current.apply_update(patched);
    save(&state, id, &current).await?;

    tracing::info!(movie_id = id, operations = patch.0.len(), "Movie patched");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movie/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.store.delete(id).await? {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// Write back a loaded movie. The row can vanish between load and save.
async fn save(state: &AppState, id: DbId, movie: &Movie) -> AppResult<()> {
    state
        .store
        .update(id, movie)
        .await?
        .map(|_| ())
        .ok_or_else(|| not_found(id))
}
