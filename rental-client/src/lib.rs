//! # Movie Rental Client SDK
//!
//! A typed Rust client for the Movie Rental API.

use rental_types::{
    CreateCustomerRequest, CreateMovieRequest, CreateRentalRequest, Customer, Movie, Rental,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Movie Rental API client.
pub struct MovieRentalClient {
    base_url: String,
    http: Client,
}

impl MovieRentalClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(self.url(&["health"])?).send().await?;
        Ok(resp.status().is_success())
    }

    /// Lists all customers.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        self.get(&["customer"]).await
    }

    /// Stores a customer.
    pub async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<Customer, ClientError> {
        self.post(&["customer"], req).await
    }

    /// Lists all movies.
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        self.get(&["movie"]).await
    }

    /// Stores a movie.
    pub async fn create_movie(&self, req: &CreateMovieRequest) -> Result<Movie, ClientError> {
        self.post(&["movie"], req).await
    }

    /// Rents a movie. A declined payment comes back as
    /// `ClientError::Api { status: 400, .. }`.
    pub async fn rent_movie(&self, req: &CreateRentalRequest) -> Result<Rental, ClientError> {
        self.post(&["rental"], req).await
    }

    /// Lists rentals recorded under exactly `customer_name`.
    pub async fn rentals_for_customer(
        &self,
        customer_name: &str,
    ) -> Result<Vec<Rental>, ClientError> {
        self.get(&["rental", customer_name]).await
    }

    /// Joins percent-encoded path segments onto the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let resp = self.http.get(self.url(segments)?).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(self.url(segments)?)
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
