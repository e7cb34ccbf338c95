use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::api::validation::validate_search_query;
use crate::catalog::{CATEGORIES, Category, FilterOptions, apply_filters};
use crate::models::Product;

/// `GET /api/catalog?search=&category=&availability=&priceRange=&sortBy=`
pub async fn browse_catalog(
    State(state): State<Arc<AppState>>,
    Query(options): Query<FilterOptions>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    validate_search_query(&options.search)?;

    let products = state.catalog().list_products().await?;
    let visible = apply_filters(&products, &options);

    tracing::debug!(
        total = products.len(),
        visible = visible.len(),
        filtered = options.has_active_filters(),
        "Catalog filtered"
    );

    Ok(Json(ApiResponse::success(visible)))
}

pub async fn list_categories() -> Json<ApiResponse<&'static [Category]>> {
    Json(ApiResponse::success(CATEGORIES))
}
