use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use service::product_service;
use service::repository::ProductInput;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct LowStockQuery {
    #[serde(default = "default_threshold")]
    pub threshold: i32,
}

fn default_threshold() -> i32 {
    10
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/search", get(search))
        .route("/api/products/low-stock", get(low_stock))
        .route("/api/products/category/:category", get(by_category))
        .route("/api/products/:id", get(get_one).put(update).delete(remove))
}

async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    let products = product_service::list_products(state.products.as_ref()).await?;
    Ok(Json(products))
}

async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::product::Model>, StatusCode> {
    match product_service::get_product(state.products.as_ref(), id).await {
        Ok(Some(p)) => Ok(Json(p)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<models::product::Model>), JsonApiError> {
    let created = product_service::create_product(state.products.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<models::product::Model>, JsonApiError> {
    let updated = product_service::update_product(state.products.as_ref(), id, input).await?;
    Ok(Json(updated))
}

async fn remove(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match product_service::delete_product(state.products.as_ref(), id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    let products =
        product_service::products_by_category(state.products.as_ref(), &category).await?;
    Ok(Json(products))
}

async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    let products = product_service::search_products(state.products.as_ref(), &q.keyword).await?;
    Ok(Json(products))
}

async fn low_stock(
    State(state): State<ServerState>,
    Query(q): Query<LowStockQuery>,
) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    let products =
        product_service::low_stock_products(state.products.as_ref(), q.threshold).await?;
    Ok(Json(products))
}
