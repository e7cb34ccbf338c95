use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    ApiError, ApiJson, ApiResponse, AppState, CreateProductRequest, EnquiryDto,
    UpdateProductRequest,
};
use crate::api::validation::validate_product_id;
use crate::catalog::{enquiry_message, whatsapp_url};
use crate::models::Product;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let products = state.catalog().list_products().await?;
    Ok(Json(ApiResponse::success(products)))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    let input = payload.into_new_product().map_err(ApiError::validation)?;
    let product = state.catalog().create_product(input).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let id = validate_product_id(&id)?;

    let product = state
        .catalog()
        .get_product(id)
        .await?
        .ok_or_else(ApiError::product_not_found)?;

    Ok(Json(ApiResponse::success(product)))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let id = validate_product_id(&id)?;
    let patch = payload.into_patch().map_err(ApiError::validation)?;

    let product = state
        .catalog()
        .update_product(id, patch)
        .await?
        .ok_or_else(ApiError::product_not_found)?;

    Ok(Json(ApiResponse::success(product)))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validate_product_id(&id)?;

    if !state.catalog().delete_product(id).await? {
        return Err(ApiError::product_not_found());
    }

    Ok(Json(ApiResponse::message("Product deleted")))
}

/// Prefilled WhatsApp link for asking about one product.
pub async fn get_enquiry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EnquiryDto>>, ApiError> {
    let id = validate_product_id(&id)?;

    let product = state
        .catalog()
        .get_product(id)
        .await?
        .ok_or_else(ApiError::product_not_found)?;

    let message = enquiry_message(&product);
    let url = whatsapp_url(&state.config().enquiry.whatsapp_number, &message);

    Ok(Json(ApiResponse::success(EnquiryDto { message, url })))
}
