//! Wire and display types for the clone workflow.
//!
//! The remote product body is kept as an opaque JSON value: the
//! backend receives it verbatim, and the workflow only ever reads
//! `product.title` and `product.image.src` for the success summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::admin_product_url;

/// Parsed body of a storefront `<product>.json` response.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteProductPayload(serde_json::Value);

impl RemoteProductPayload {
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    /// `product.title`, if present and a string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.0.pointer("/product/title")?.as_str()
    }

    /// `product.image.src`, if present and non-empty.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        self.0
            .pointer("/product/image/src")?
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

/// Response body of `POST /api/products/create`.
///
/// Only `success` decides the outcome. It follows JSON truthiness: `true`,
/// a non-zero number, a non-empty string, an array or an object count as
/// success; `false`, `0`, `""`, `null` or a missing flag do not.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,

    /// Accepts a JSON string, a number, or a GID string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub product_id: Option<String>,

    #[serde(default)]
    pub shop: Option<String>,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Identity of the product the backend created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProduct {
    pub product_id: String,
    pub shop: String,
}

/// What the UI shows after a successful clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClonedProductSummary {
    pub id: String,
    pub shop: String,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub cloned_at: DateTime<Utc>,
}

impl ClonedProductSummary {
    /// Combines the storefront payload (title, image) with the backend's
    /// answer (id, shop).
    #[must_use]
    pub fn from_parts(payload: &RemoteProductPayload, created: CreatedProduct) -> Self {
        Self {
            id: created.product_id,
            shop: created.shop,
            title: payload.title().map(str::to_owned),
            image_url: payload.image_src().map(str::to_owned),
            cloned_at: Utc::now(),
        }
    }

    /// `https://<shop>/admin/products/<id>`.
    #[must_use]
    pub fn admin_url(&self) -> String {
        admin_product_url(&self.shop, &self.id)
    }
}

/// A transient notification for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub content: String,
    pub error: bool,
}

impl Toast {
    #[must_use]
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            error: false,
        }
    }

    #[must_use]
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            error: true,
        }
    }
}
