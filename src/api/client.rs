//! REST client for the restaurant API.
//!
//! `RestaurantApi` is the seam the TUI talks to; `HttpRestaurantApi` is the
//! reqwest-backed implementation. Tests substitute a stub.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    DetailResponse, ListResponse, NewReview, Restaurant, RestaurantDetail, Review, ReviewResponse,
};

/// Errors that can occur while talking to the restaurant API.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Timeout, DNS, connection refused.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx HTTP status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// Body was not the JSON we expected.
    #[error("parse error: {0}")]
    Parse(String),
    /// 2xx response whose body carried `"error": true`.
    #[error("request rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// `GET /list`
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError>;

    /// `GET /detail/{id}`
    async fn restaurant_detail(&self, id: &str) -> Result<RestaurantDetail, ApiError>;

    /// `POST /review`. Returns the restaurant's updated review list.
    async fn post_review(&self, review: &NewReview) -> Result<Vec<Review>, ApiError>;
}

pub struct HttpRestaurantApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRestaurantApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Checks the status and decodes the body, keeping the raw text around for logs.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        warn!("Restaurant API error: {} - {}", status.as_u16(), body);
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to decode response ({} bytes): {}", body.len(), e);
        ApiError::Parse(e.to_string())
    })
}

#[async_trait]
impl RestaurantApi for HttpRestaurantApi {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let url = self.url("list");
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: ListResponse = decode(response).await?;
        if body.error {
            return Err(ApiError::Rejected(body.message));
        }
        debug!(
            "Received {} restaurants (count field: {})",
            body.restaurants.len(),
            body.count
        );
        Ok(body.restaurants)
    }

    async fn restaurant_detail(&self, id: &str) -> Result<RestaurantDetail, ApiError> {
        let url = self.url(&format!("detail/{id}"));
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: DetailResponse = decode(response).await?;
        if body.error {
            return Err(ApiError::Rejected(body.message));
        }
        let detail = body
            .restaurant
            .ok_or_else(|| ApiError::Parse("response has no restaurant".to_string()))?;
        debug!(
            "Detail {}: {} reviews, {} foods, {} drinks",
            detail.id,
            detail.customer_reviews.len(),
            detail.menus.foods.len(),
            detail.menus.drinks.len()
        );
        Ok(detail)
    }

    async fn post_review(&self, review: &NewReview) -> Result<Vec<Review>, ApiError> {
        let url = self.url("review");
        info!("POST {} (restaurant={})", url, review.id);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(review)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: ReviewResponse = decode(response).await?;
        if body.error {
            return Err(ApiError::Rejected(body.message));
        }
        Ok(body.customer_reviews)
    }
}

/// Builds the full image URL for a `pictureId`.
pub fn picture_url(image_base_url: &str, picture_id: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), picture_id)
}
