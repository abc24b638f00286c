use contracts::domain::a001_product::{Product, ProductSeries};

use crate::shared::error::ApiError;
use crate::shared::http::get_json;
use crate::system::auth::Session;

/// Path of the single-product series endpoint
pub fn product_path(id: &str) -> String {
    format!("/product/{}", urlencoding::encode(id))
}

/// Path of the batched compare endpoint; ids are joined with a literal comma
pub fn compare_path(ids: &[String]) -> String {
    let encoded: Vec<String> = ids
        .iter()
        .map(|id| urlencoding::encode(id).into_owned())
        .collect();
    format!("/products/compare?product_ids={}", encoded.join(","))
}

/// Fetch the product catalog
pub async fn list_products(session: &Session) -> Result<Vec<Product>, ApiError> {
    get_json(session, "/products").await
}

/// Fetch one product's day-series
pub async fn get_product(session: &Session, id: &str) -> Result<ProductSeries, ApiError> {
    let series: ProductSeries = get_json(session, &product_path(id)).await?;
    Ok(series.normalized())
}

/// Fetch the day-series of every id in one batched request
pub async fn compare_products(
    session: &Session,
    ids: &[String],
) -> Result<Vec<ProductSeries>, ApiError> {
    if ids.is_empty() {
        return Err(ApiError::ValidationRejected(
            "No products selected for comparison".to_string(),
        ));
    }
    let series: Vec<ProductSeries> = get_json(session, &compare_path(ids)).await?;
    Ok(series.into_iter().map(ProductSeries::normalized).collect())
}
