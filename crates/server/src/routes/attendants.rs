use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use service::attendant_service;
use service::repository::AttendantInput;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/attendants", get(list).post(create))
        .route("/api/attendants/search", get(search))
        .route("/api/attendants/email/:email", get(by_email))
        .route("/api/attendants/:id", get(get_one).put(update).delete(remove))
}

async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::attendant::Model>>, JsonApiError> {
    let attendants = attendant_service::list_attendants(state.attendants.as_ref()).await?;
    Ok(Json(attendants))
}

async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::attendant::Model>, StatusCode> {
    match attendant_service::get_attendant(state.attendants.as_ref(), id).await {
        Ok(Some(a)) => Ok(Json(a)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn create(
    State(state): State<ServerState>,
    Json(input): Json<AttendantInput>,
) -> Result<(StatusCode, Json<models::attendant::Model>), JsonApiError> {
    let created = attendant_service::create_attendant(state.attendants.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<AttendantInput>,
) -> Result<Json<models::attendant::Model>, JsonApiError> {
    let updated =
        attendant_service::update_attendant(state.attendants.as_ref(), id, input).await?;
    Ok(Json(updated))
}

async fn remove(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match attendant_service::delete_attendant(state.attendants.as_ref(), id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<models::attendant::Model>>, JsonApiError> {
    let attendants =
        attendant_service::search_attendants(state.attendants.as_ref(), &q.keyword).await?;
    Ok(Json(attendants))
}

async fn by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> Result<Json<models::attendant::Model>, StatusCode> {
    match attendant_service::attendant_by_email(state.attendants.as_ref(), &email).await {
        Ok(Some(a)) => Ok(Json(a)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
