//! Product and category read endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::CommerceError;

use crate::error::ApiError;
use crate::state::SharedState;

/// Optional narrowing parameters for the product list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// `GET /api/products?search=&category=&minPrice=&maxPrice=`
pub async fn list(
    State(state): State<SharedState>,
    filter: Result<Query<ProductFilter>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(filter) =
        filter.map_err(|_| ApiError::bad_request("Invalid filter parameters"))?;

    let mut products = state.catalog.get_all();
    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        products = state.catalog.get_by_category(category);
    }
    // A non-empty search re-queries the whole catalog, replacing any
    // category narrowing above; only the price bounds compose with either.
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        products = state.catalog.search(search);
    }
    if let Some(min) = filter.min_price {
        products.retain(|p| p.price.to_decimal() >= min);
    }
    if let Some(max) = filter.max_price {
        products.retain(|p| p.price.to_decimal() <= max);
    }

    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

/// `GET /api/products/featured`
pub async fn featured(State(state): State<SharedState>) -> Json<Vec<Product>> {
    Json(state.catalog.get_featured())
}

/// `GET /api/products/{id}`
pub async fn by_id(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog
        .get_by_id(&ProductId::new(id.clone()))
        .cloned()
        .ok_or(CommerceError::ProductNotFound(id))?;
    Ok(Json(product))
}

/// `GET /api/categories`
pub async fn categories(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}

/// `GET /api/categories/{category}/products`
pub async fn by_category(
    State(state): State<SharedState>,
    Path(category): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog.get_by_category(&category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::Arc;

    fn state() -> SharedState {
        Arc::new(AppState::with_sample_catalog())
    }

    fn filter(filter: ProductFilter) -> Result<Query<ProductFilter>, QueryRejection> {
        Ok(Query(filter))
    }

    #[tokio::test]
    async fn test_list_without_filters_returns_all() {
        let state = state();
        let total = state.catalog.len();
        let Json(products) = list(State(state), filter(ProductFilter::default()))
            .await
            .unwrap();
        assert_eq!(products.len(), total);
    }

    #[tokio::test]
    async fn test_search_overrides_category() {
        // Supplying both category and search makes the search result win
        // outright, even across categories.
        let Json(products) = list(
            State(state()),
            filter(ProductFilter {
                category: Some("ebooks".to_string()),
                search: Some("web".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert!(!products.is_empty());
        assert!(products
            .iter()
            .any(|p| p.category.as_str() != "ebooks"));
    }

    #[tokio::test]
    async fn test_price_bounds_apply_last() {
        let Json(products) = list(
            State(state()),
            filter(ProductFilter {
                category: Some("courses".to_string()),
                min_price: Some(200.0),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert!(!products.is_empty());
        assert!(products
            .iter()
            .all(|p| p.category.as_str() == "courses" && p.price.to_decimal() >= 200.0));
    }

    #[tokio::test]
    async fn test_empty_filter_strings_are_ignored() {
        let state = state();
        let total = state.catalog.len();
        let Json(products) = list(
            State(state),
            filter(ProductFilter {
                search: Some(String::new()),
                category: Some(String::new()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(products.len(), total);
    }

    #[tokio::test]
    async fn test_by_id_not_found() {
        let err = by_id(State(state()), Path("no-such-id".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_featured_only() {
        let Json(products) = featured(State(state())).await;
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn test_categories_listing() {
        let Json(categories) = categories(State(state())).await;
        assert!(categories.contains(&"courses".to_string()));
        assert!(categories.contains(&"software".to_string()));
    }
}
