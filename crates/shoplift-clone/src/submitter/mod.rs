//! Clone Submitter: asks the app backend to recreate a product locally.

mod auth;

use std::future::Future;

use reqwest::{Client, Url};

use crate::error::SubmitFailure;
use crate::fetcher::build_http_client;
use crate::types::{CloneResult, CreatedProduct, RemoteProductPayload};

pub use auth::{BearerToken, RequestAuthenticator, Unauthenticated};

/// Route on the app backend that performs the product creation.
pub const CREATE_PRODUCT_PATH: &str = "api/products/create";

/// Destination for fetched product payloads.
pub trait CloneTarget {
    /// Recreates the product described by `payload` in the current store.
    fn clone_product(
        &self,
        payload: &RemoteProductPayload,
    ) -> impl Future<Output = Result<CreatedProduct, SubmitFailure>> + Send;
}

/// Authenticated client for the backend's create-product route.
///
/// The storefront payload is forwarded verbatim. The outcome is decided by
/// the `success` flag in the response body, never by the HTTP status.
pub struct CloneSubmitter {
    client: Client,
    endpoint: Url,
    authenticator: Box<dyn RequestAuthenticator>,
}

impl CloneSubmitter {
    /// Creates a submitter for the backend at `app_url`.
    ///
    /// # Errors
    ///
    /// - [`SubmitFailure::InvalidAppUrl`] if `app_url` is not a valid base URL.
    /// - [`SubmitFailure::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        app_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        authenticator: impl RequestAuthenticator + 'static,
    ) -> Result<Self, SubmitFailure> {
        let client = build_http_client(timeout_secs, user_agent)?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment of an app mounted under a prefix.
        let normalised = format!("{}/", app_url.trim().trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(CREATE_PRODUCT_PATH))
            .map_err(|e| SubmitFailure::InvalidAppUrl {
                app_url: app_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            authenticator: Box::new(authenticator),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts `payload` to the backend and interprets its answer.
    ///
    /// # Errors
    ///
    /// - [`SubmitFailure::Http`] — network or TLS failure.
    /// - [`SubmitFailure::Deserialize`] — response body is not the expected JSON.
    /// - [`SubmitFailure::Rejected`] — `success` is false or missing.
    /// - [`SubmitFailure::MissingField`] — `productId` or `shop` is absent.
    pub async fn submit(
        &self,
        payload: &RemoteProductPayload,
    ) -> Result<CreatedProduct, SubmitFailure> {
        tracing::debug!(endpoint = %self.endpoint, "submitting product to backend");

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload.as_json());
        let response = self.authenticator.authenticate(request).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_response(&body, status)
    }
}

impl CloneTarget for CloneSubmitter {
    fn clone_product(
        &self,
        payload: &RemoteProductPayload,
    ) -> impl Future<Output = Result<CreatedProduct, SubmitFailure>> + Send {
        self.submit(payload)
    }
}

fn interpret_response(body: &str, status: u16) -> Result<CreatedProduct, SubmitFailure> {
    let result: CloneResult =
        serde_json::from_str(body).map_err(|e| SubmitFailure::Deserialize {
            context: format!("create-product response (HTTP {status})"),
            source: e,
        })?;

    if !result.success {
        return Err(SubmitFailure::Rejected { status });
    }

    let product_id = result
        .product_id
        .ok_or(SubmitFailure::MissingField { field: "productId" })?;
    let shop = result
        .shop
        .filter(|s| !s.trim().is_empty())
        .ok_or(SubmitFailure::MissingField { field: "shop" })?;

    Ok(CreatedProduct { product_id, shop })
}
