//! URL handling for storefront product links and admin deep-links.

use reqwest::Url;

use crate::error::FetchFailure;

const JSON_SUFFIX: &str = ".json";
const PRODUCT_GID_PREFIX: &str = "gid://shopify/Product/";

/// Turns a pasted storefront product link into the URL of its public JSON
/// representation.
///
/// Everything from the first `?` (and any `#fragment`) is dropped, trailing
/// `.json` suffixes are removed, and `.json` is appended exactly once, so
/// `https://store.com/products/x?variant=123` becomes
/// `https://store.com/products/x.json`. Applying the function to its own
/// output is a no-op.
///
/// # Errors
///
/// - [`FetchFailure::EmptyUrl`] if the input is blank.
/// - [`FetchFailure::InvalidUrl`] if the result is not an absolute
///   `http(s)://` URL with a host and a path.
pub fn normalize_product_url(raw: &str) -> Result<String, FetchFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FetchFailure::EmptyUrl);
    }

    let without_query = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    let mut base = without_query;
    while let Some(stripped) = base.strip_suffix(JSON_SUFFIX) {
        base = stripped;
    }

    let parsed = Url::parse(base).map_err(|e| FetchFailure::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchFailure::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(FetchFailure::InvalidUrl {
            url: raw.to_owned(),
            reason: "missing host".to_owned(),
        });
    }
    if parsed.path() == "/" {
        return Err(FetchFailure::InvalidUrl {
            url: raw.to_owned(),
            reason: "missing product path".to_owned(),
        });
    }

    Ok(format!("{base}{JSON_SUFFIX}"))
}

/// Builds the admin deep-link for a newly created product.
///
/// Accepts either a bare numeric id or an Admin API GID such as
/// `gid://shopify/Product/42`; both produce `.../admin/products/42`.
#[must_use]
pub fn admin_product_url(shop: &str, product_id: &str) -> String {
    let shop = shop
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let id = product_id
        .strip_prefix(PRODUCT_GID_PREFIX)
        .unwrap_or(product_id);
    format!("https://{shop}/admin/products/{id}")
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
