use serde::Serialize;

use crate::types::{ClonedProductSummary, Toast};

/// Where the clone workflow currently stands.
///
/// A single variant replaces independent loading/result flags, so "loading
/// with a stale summary" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum CloneStatus {
    #[default]
    Idle,
    Loading,
    Succeeded(ClonedProductSummary),
    Failed(String),
}

impl CloneStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, CloneStatus::Loading)
    }
}

/// Everything a UI shell renders for the clone page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub status: CloneStatus,
    pub toast: Option<Toast>,
}

impl PageState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// The success card, if the last attempt created a product.
    #[must_use]
    pub fn summary(&self) -> Option<&ClonedProductSummary> {
        match &self.status {
            CloneStatus::Succeeded(summary) => Some(summary),
            _ => None,
        }
    }
}
