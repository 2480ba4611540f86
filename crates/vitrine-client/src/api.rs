//! HTTP client for the storefront API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::contact::ContactForm;
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::order::{Order, OrderDraft};

use crate::error::ClientError;

/// Read access to the remote catalog.
///
/// Trait-backed so the checkout flow can be exercised without a server.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch a product by id. A 404 maps to `None`.
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, ClientError>;
}

/// Order submission.
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Submit a draft, returning the stored order.
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ClientError>;
}

/// Acknowledgement of a contact submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

/// Error body as the API serializes it.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Thin reqwest wrapper over the storefront API.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    http: reqwest::Client,
}

impl StoreClient {
    /// Create a client against a base URL (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full product list.
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Api(error_message(response).await));
        }
        Ok(response.json().await?)
    }

    /// Submit a contact form.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactAck, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/contact", self.base_url))
            .json(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Api(error_message(response).await));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogClient for StoreClient {
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/products/{}", self.base_url, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::Api(error_message(response).await));
        }
        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl OrderClient for StoreClient {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/orders", self.base_url))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Api(error_message(response).await));
        }
        Ok(response.json().await?)
    }
}

/// Pull the `error` field out of an error response, falling back to the
/// status code when the body is not the expected shape.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    }
}
