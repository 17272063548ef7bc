use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use axum::Json;
use serde::Deserialize;
use tracing::{error, info};

use models::driver::{Model, NewDriver};
use service::db::driver_store::DriverFilter;
use service::errors::ServiceError;

use crate::response::{envelope, envelope_without_data};
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Driver name substring
    pub driver: Option<String>,
    /// Team name substring
    pub team: Option<String>,
    pub position: Option<i32>,
    pub year: Option<i32>,
}

impl From<SearchQuery> for DriverFilter {
    fn from(q: SearchQuery) -> Self {
        Self { name: q.driver, team: q.team, position: q.position, year: q.year }
    }
}

#[utoipa::path(
    get, path = "/api/drivers", tag = "drivers",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching drivers"),
        (status = 404, description = "No results found")
    )
)]
pub async fn search(State(state): State<ServerState>, Query(q): Query<SearchQuery>) -> Response {
    let filter: DriverFilter = q.into();
    match state.drivers.search(&filter).await {
        Ok(rows) => {
            info!(count = rows.len(), "drivers_search_ok");
            envelope(StatusCode::OK, "Success", &rows)
        }
        // No rows collapses into not-found; the empty list still travels as data
        Err(ServiceError::NotFound(msg)) => envelope(StatusCode::NOT_FOUND, &msg, Vec::<Model>::new()),
        Err(e) => {
            error!(err = %e, "drivers_search_failed");
            envelope_without_data(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

#[utoipa::path(
    post, path = "/api/drivers", tag = "drivers",
    request_body = Vec<crate::openapi::NewDriverDoc>,
    responses(
        (status = 201, description = "Drivers created"),
        (status = 409, description = "Existing drivers detected")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<Vec<NewDriver>>) -> Response {
    match state.drivers.add(input).await {
        Ok(created) => {
            info!(count = created.len(), "drivers_created");
            envelope(StatusCode::CREATED, "Drivers created successfully", &created)
        }
        Err(ServiceError::Conflict { message, drivers }) => {
            envelope(StatusCode::CONFLICT, &message, &drivers)
        }
        Err(e) => {
            error!(err = %e, "drivers_create_failed");
            envelope_without_data(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

#[utoipa::path(
    put, path = "/api/drivers/{id}", tag = "drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    request_body = crate::openapi::NewDriverDoc,
    responses(
        (status = 200, description = "Driver updated"),
        (status = 404, description = "Driver not found"),
        (status = 409, description = "Driver already exists")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<NewDriver>,
) -> Response {
    match state.drivers.update(id, input).await {
        Ok(m) => {
            info!(id = m.id, "driver_updated");
            envelope(StatusCode::OK, "Driver updated successfully", &m)
        }
        Err(ServiceError::NotFound(msg)) => envelope_without_data(StatusCode::NOT_FOUND, &msg),
        Err(ServiceError::Conflict { message, .. }) => {
            envelope_without_data(StatusCode::CONFLICT, &message)
        }
        Err(e) => {
            error!(err = %e, id, "driver_update_failed");
            envelope_without_data(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

#[utoipa::path(
    delete, path = "/api/drivers/{id}", tag = "drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver deleted"),
        (status = 404, description = "Driver not found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    match state.drivers.delete(id).await {
        Ok(m) => {
            info!(id = m.id, "driver_deleted");
            envelope(StatusCode::OK, "Driver deleted successfully", &m)
        }
        Err(ServiceError::NotFound(msg)) => envelope_without_data(StatusCode::NOT_FOUND, &msg),
        Err(e) => {
            error!(err = %e, id, "driver_delete_failed");
            envelope_without_data(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}
