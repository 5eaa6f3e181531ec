//! Remote Product Fetcher: retrieves a storefront's public product JSON.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::FetchFailure;
use crate::normalize::normalize_product_url;
use crate::types::RemoteProductPayload;

/// Source of remote product payloads for the clone workflow.
pub trait ProductSource {
    /// Retrieves the public JSON representation of the product at `url`.
    fn fetch_remote_product(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<RemoteProductPayload, FetchFailure>> + Send;
}

/// Builds a `reqwest::Client` the way both outbound clients share.
///
/// `timeout_secs == 0` leaves the request timeout at reqwest's default
/// (none), so a started request stays in flight until it resolves.
pub(crate) fn build_http_client(timeout_secs: u64, user_agent: &str) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(user_agent);
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    builder.build()
}

/// Unauthenticated client for `<storefront product>.json`.
///
/// Makes exactly one GET per call: no retries, no custom headers beyond the
/// client's `User-Agent`.
pub struct RemoteProductFetcher {
    client: Client,
}

impl RemoteProductFetcher {
    /// # Errors
    ///
    /// Returns [`FetchFailure::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchFailure> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
        })
    }

    /// Normalizes `raw_url` and fetches the product JSON behind it.
    ///
    /// # Errors
    ///
    /// - [`FetchFailure::EmptyUrl`] / [`FetchFailure::InvalidUrl`] — the URL
    ///   could not be normalized; no request is made.
    /// - [`FetchFailure::Http`] — network or TLS failure.
    /// - [`FetchFailure::UnexpectedStatus`] — any non-2xx status.
    /// - [`FetchFailure::EmptyBody`] — empty body or a JSON `null`.
    /// - [`FetchFailure::Deserialize`] — body is not JSON.
    /// - [`FetchFailure::NotAnObject`] — body is JSON but not an object.
    pub async fn fetch(&self, raw_url: &str) -> Result<RemoteProductPayload, FetchFailure> {
        let url = normalize_product_url(raw_url)?;
        tracing::debug!(url, "fetching remote product");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_product_body(&body, &url)
    }
}

impl ProductSource for RemoteProductFetcher {
    fn fetch_remote_product(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<RemoteProductPayload, FetchFailure>> + Send {
        self.fetch(url)
    }
}

fn parse_product_body(body: &str, url: &str) -> Result<RemoteProductPayload, FetchFailure> {
    if body.trim().is_empty() {
        return Err(FetchFailure::EmptyBody {
            url: url.to_owned(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchFailure::Deserialize {
            context: format!("remote product from {url}"),
            source: e,
        })?;

    match value {
        serde_json::Value::Null => Err(FetchFailure::EmptyBody {
            url: url.to_owned(),
        }),
        serde_json::Value::Object(_) => Ok(RemoteProductPayload::new(value)),
        _ => Err(FetchFailure::NotAnObject {
            url: url.to_owned(),
        }),
    }
}
