pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod submitter;
pub mod types;
pub mod workflow;

pub use error::{CloneError, CloneStage, FetchFailure, SubmitFailure};
pub use fetcher::{ProductSource, RemoteProductFetcher};
pub use normalize::{admin_product_url, normalize_product_url};
pub use submitter::{
    BearerToken, CloneSubmitter, CloneTarget, RequestAuthenticator, Unauthenticated,
};
pub use types::{ClonedProductSummary, CreatedProduct, RemoteProductPayload, Toast};
pub use workflow::{CloneStatus, CloneWorkflow, PageState};
