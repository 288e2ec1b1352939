use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use models::{Person, PersonInput, PersonPatch};
use service::resource::{parse_id, ResourceStore};

use crate::errors::JsonApiError;

/// Shared handler state: the resource store behind its trait.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn ResourceStore>,
}

#[utoipa::path(
    get, path = "/api/resources", tag = "resources",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Person>> {
    let all = state.store.list().await;
    info!(count = all.len(), "list resources");
    Json(all)
}

#[utoipa::path(
    post, path = "/api/resources", tag = "resources",
    request_body = crate::openapi::CreatePersonDoc,
    responses((status = 200, description = "Created"))
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<PersonInput>,
) -> Json<Person> {
    let created = state.store.create(input).await;
    info!(id = created.id, name = %created.name, "created resource");
    Json(created)
}

#[utoipa::path(
    get, path = "/api/resources/{id}", tag = "resources",
    params(("id" = String, Path, description = "Resource id")),
    responses(
        (status = 200, description = "OK"),
        (status = 400, description = "Invalid Argument"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, JsonApiError> {
    let id = parse_id(&id)?;
    let rec = state.store.get(id).await?;
    Ok(Json(rec))
}

#[utoipa::path(
    put, path = "/api/resources/{id}", tag = "resources",
    params(("id" = String, Path, description = "Resource id")),
    request_body = crate::openapi::UpdatePersonDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid Argument"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<PersonPatch>,
) -> Result<Json<Person>, JsonApiError> {
    let id = parse_id(&id)?;
    let updated = state.store.update(id, patch).await?;
    info!(id = updated.id, "updated resource");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/resources/{id}", tag = "resources",
    params(("id" = String, Path, description = "Resource id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid Argument"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    if state.store.delete(id).await {
        info!(id, "deleted resource");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
