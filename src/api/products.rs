use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use super::{Admin, ApiError, AppState};
use crate::domain::{Page, PageRequest, Product, ProductId, ProductParams, ProductSearch, DEFAULT_PAGE_SIZE};

/// Query string of `GET /api/products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<Product>>, ApiError> {
    Ok(Json(state.products.list_products(page).await?))
}

#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Page<Product>>, ApiError> {
    let search = ProductSearch {
        name: query.name,
        category: query.category,
    };
    let page = PageRequest::new(query.page, query.size);
    Ok(Json(state.products.search_products(search, page).await?))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get_product(id).await?))
}

#[instrument(skip_all, fields(admin_id = %admin.0.id))]
pub async fn create_product(
    State(state): State<AppState>,
    admin: Admin,
    Json(params): Json<ProductParams>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.products.create_product(params).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip_all, fields(admin_id = %admin.0.id, product_id = %id))]
pub async fn update_product(
    State(state): State<AppState>,
    admin: Admin,
    Path(id): Path<ProductId>,
    Json(params): Json<ProductParams>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.update_product(id, params).await?))
}

#[instrument(skip_all, fields(admin_id = %admin.0.id, product_id = %id))]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: Admin,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    state.products.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
