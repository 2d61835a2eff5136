use crate::api::request::{BulkProductImportRequest, CreateProductRequest, UpdateProductRequest};
use crate::api::response::{Deleted, Envelope, ProductResponse};
use crate::data::models::product::{NewProduct, UpdateProduct};
use crate::services::errors::ProductServiceError;
use crate::services::product_service::ProductService;
use axum::Json;
use axum::extract::{Path, Query};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ProductListQuery {
    pub is_active: Option<bool>,
}

/// Catalog listing; `?is_active=true` is the storefront/checkout view.
pub async fn get_all_products(
    Query(query): Query<ProductListQuery>,
) -> Envelope<Vec<ProductResponse>> {
    let service = ProductService::new();

    match service.get_products(query.is_active).await {
        Ok(products) => {
            Envelope::data(products.into_iter().map(ProductResponse::from).collect())
        }
        Err(e) => {
            tracing::error!("Product listing failed: {e}");
            Envelope::error("Database error")
        }
    }
}

pub async fn create_product(
    Json(payload): Json<CreateProductRequest>,
) -> Envelope<ProductResponse> {
    let service = ProductService::new();

    match service.create_product(NewProduct::from(&payload)).await {
        Ok(product) => Envelope::data(ProductResponse::from(product)),
        Err(e @ ProductServiceError::ProductAlreadyExists) => Envelope::error(e),
        Err(e) => {
            tracing::error!("Product creation failed: {e}");
            Envelope::error("Failed to create product")
        }
    }
}

/// Bulk catalog import: upsert row by row, keyed on product_code. Aborts on
/// the first failing row; rows already written stay written, matching the
/// row-at-a-time semantics of the import it serves.
pub async fn bulk_import_products(
    Json(payload): Json<BulkProductImportRequest>,
) -> Envelope<Vec<ProductResponse>> {
    let service = ProductService::new();
    let mut imported = Vec::with_capacity(payload.products.len());

    for entry in &payload.products {
        match service
            .upsert_by_code(
                &entry.product_code,
                NewProduct::from(entry),
                UpdateProduct::from(entry),
            )
            .await
        {
            Ok(product) => imported.push(ProductResponse::from(product)),
            Err(e) => {
                tracing::error!("Bulk import failed at {}: {e}", entry.product_code);
                return Envelope::error(format!("Import failed at {}", entry.product_code));
            }
        }
    }

    Envelope::data(imported)
}

pub async fn update_product(
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Envelope<ProductResponse> {
    let service = ProductService::new();

    match service
        .update_product(product_id, UpdateProduct::from(&payload))
        .await
    {
        Ok(product) => Envelope::data(ProductResponse::from(product)),
        Err(e @ ProductServiceError::ProductNotFound) => Envelope::error(e),
        Err(e) => {
            tracing::error!("Product update failed: {e}");
            Envelope::error("Failed to update product")
        }
    }
}

pub async fn delete_product(Path(product_id): Path<i32>) -> Envelope<Deleted> {
    let service = ProductService::new();

    match service.delete_product(product_id).await {
        Ok(_) => Envelope::data(Deleted::ok()),
        Err(e @ ProductServiceError::ProductNotFound) => Envelope::error(e),
        Err(e) => {
            tracing::error!("Product deletion failed: {e}");
            Envelope::error("Failed to delete product")
        }
    }
}
