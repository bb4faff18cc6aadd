//! Handlers for the `/people` resource.
//!
//! Extractor rejections are taken as `Result`s so that every malformed body,
//! path or query turns into [`ApiError::InvalidInput`] (400) with the same
//! JSON shape as other errors, instead of axum's plain-text defaults.

use crate::api::{ApiError, AppState};
use crate::framework::{Page, StoreClient, DEFAULT_LIMIT};
use crate::model::{NewPerson, Person, PersonFilter, PersonId, PersonUpdate};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, instrument};

/// Query string of `GET /people`.
///
/// Everything is read as text: a `limit` or `offset` that is not a
/// non-negative integer falls back to its default instead of failing the
/// request, and an empty `name` or `gender` means "no filter". When a key is
/// repeated the first occurrence wins.
#[derive(Debug, Default)]
pub struct ListParams {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut params.name,
                "gender" => &mut params.gender,
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn filter(&self) -> PersonFilter {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        PersonFilter {
            name: non_empty(&self.name),
            gender: non_empty(&self.gender),
        }
    }

    pub fn page(&self) -> Page {
        Page {
            limit: parse_or(self.limit.as_deref(), DEFAULT_LIMIT),
            offset: parse_or(self.offset.as_deref(), 0),
        }
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn person_id(path: Result<Path<PersonId>, PathRejection>) -> Result<PersonId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

/// `POST /people`: enrich by first name, then store.
///
/// Enrichment happens before the store is contacted; if any lookup fails
/// nothing is persisted.
#[instrument(skip_all)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let payload = json_body(body)?;
    let demographics = state.enricher.enrich(&payload.name).await?;
    let person = state.people.create_person(payload.enrich(demographics)).await?;
    info!(id = person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// `GET /people`
#[instrument(skip_all)]
pub async fn list_people(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let Query(pairs) =
        query.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    let params = ListParams::from_pairs(pairs);
    let people = state
        .people
        .list_people(params.filter(), params.page())
        .await?;
    Ok(Json(people))
}

/// `GET /people/{id}`
#[instrument(skip_all)]
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<PersonId>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let id = person_id(path)?;
    Ok(Json(state.people.find_person(id).await?))
}

/// `PUT /people/{id}`: partial merge onto the stored record.
///
/// The id is checked before the body, so an unknown id is a 404 even when
/// the body is malformed.
#[instrument(skip_all)]
pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<PersonId>, PathRejection>,
    body: Result<Json<PersonUpdate>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let id = person_id(path)?;
    state.people.find_person(id).await?;
    let update = json_body(body)?;
    let person = state.people.update_person(id, update).await?;
    info!(id, "Person updated");
    Ok(Json(person))
}

/// `DELETE /people/{id}`: succeeds whether or not the id existed.
#[instrument(skip_all)]
pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<PersonId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = person_id(path)?;
    state.people.delete(id).await?;
    info!(id, "Person deleted");
    Ok(Json(json!({ "message": "Person deleted" })))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
