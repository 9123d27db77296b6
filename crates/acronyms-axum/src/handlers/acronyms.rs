//! Acronym handlers - CRUD, search and sorted listings.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use acronyms_core::{AcronymId, AcronymSort};

use crate::dto::{AcronymDto, AcronymRequest, SearchParams};
use crate::error::HttpError;
use crate::state::AppState;

/// Parse a path identifier.
///
/// A malformed identifier cannot match any row, so it is reported as 404,
/// including segments that are not valid UTF-8.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<AcronymId, HttpError> {
    let Path(raw) = path?;
    AcronymId::parse(&raw).ok_or_else(|| HttpError::NotFound(format!("Acronym with ID {raw}")))
}

fn to_dtos(acronyms: Vec<acronyms_core::Acronym>) -> Json<Vec<AcronymDto>> {
    Json(acronyms.into_iter().map(AcronymDto::from).collect())
}

/// Create a new acronym.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AcronymRequest>, JsonRejection>,
) -> Result<Json<AcronymDto>, HttpError> {
    let Json(req) = payload?;
    let created = state.acronyms.create(req.into()).await?;
    Ok(Json(created.into()))
}

/// List all acronyms.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AcronymDto>>, HttpError> {
    Ok(to_dtos(state.acronyms.list().await?))
}

/// Get a single acronym by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<AcronymDto>, HttpError> {
    let id = parse_id(id)?;
    Ok(Json(state.acronyms.get(id).await?.into()))
}

/// Replace an acronym's short and long forms.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<AcronymRequest>, JsonRejection>,
) -> Result<Json<AcronymDto>, HttpError> {
    let Json(req) = payload?;
    let id = parse_id(id)?;
    Ok(Json(state.acronyms.update(id, req.into()).await?.into()))
}

/// Delete an acronym.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id(id)?;
    state.acronyms.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Exact-match search on either form. `term` is required.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<AcronymDto>>, HttpError> {
    let Query(params) = params?;
    let term = params
        .term
        .ok_or_else(|| HttpError::BadRequest("Missing query parameter: term".to_string()))?;
    Ok(to_dtos(state.acronyms.search(&term).await?))
}

/// First acronym in storage order.
pub async fn first(State(state): State<AppState>) -> Result<Json<AcronymDto>, HttpError> {
    Ok(Json(state.acronyms.first().await?.into()))
}

/// All acronyms sorted by short form, ascending.
pub async fn sorted(State(state): State<AppState>) -> Result<Json<Vec<AcronymDto>>, HttpError> {
    Ok(to_dtos(
        state.acronyms.sorted(AcronymSort::ShortAscending).await?,
    ))
}

/// First acronym by short form, ascending.
pub async fn sorted_first(State(state): State<AppState>) -> Result<Json<AcronymDto>, HttpError> {
    Ok(Json(
        state
            .acronyms
            .sorted_first(AcronymSort::ShortAscending)
            .await?
            .into(),
    ))
}

/// All acronyms sorted by long form, descending.
pub async fn sorted_long_descending(
    State(state): State<AppState>,
) -> Result<Json<Vec<AcronymDto>>, HttpError> {
    Ok(to_dtos(
        state.acronyms.sorted(AcronymSort::LongDescending).await?,
    ))
}

/// All acronyms sorted by long form, ascending.
pub async fn sorted_long_ascending(
    State(state): State<AppState>,
) -> Result<Json<Vec<AcronymDto>>, HttpError> {
    Ok(to_dtos(
        state.acronyms.sorted(AcronymSort::LongAscending).await?,
    ))
}
