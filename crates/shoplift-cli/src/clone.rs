//! `shoplift clone`: runs one clone attempt and renders the outcome.

use std::process::ExitCode;

use shoplift_clone::{
    BearerToken, CloneSubmitter, CloneWorkflow, PageState, RemoteProductFetcher,
    RequestAuthenticator, Unauthenticated,
};
use shoplift_core::AppConfig;

pub(crate) async fn run_clone(
    config: &AppConfig,
    url: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let fetcher = RemoteProductFetcher::new(config.request_timeout_secs, &config.user_agent)?;
    let submitter = CloneSubmitter::new(
        &config.app_url,
        config.request_timeout_secs,
        &config.user_agent,
        authenticator(config),
    )?;
    let workflow = CloneWorkflow::new(fetcher, submitter);

    if !json {
        println!("Copying {url} ...");
    }
    let outcome = workflow.clone_from_url(url).await;
    let page = workflow.state();

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", render_page(&page));
    }

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn authenticator(config: &AppConfig) -> Box<dyn RequestAuthenticator> {
    match &config.session_token {
        Some(token) => Box::new(BearerToken::new(token.clone())),
        None => {
            tracing::warn!("no session token configured; backend requests are unauthenticated");
            Box::new(Unauthenticated)
        }
    }
}

/// Text rendering of the page: the toast, then the success card if any.
pub(crate) fn render_page(page: &PageState) -> String {
    let mut lines = Vec::new();

    if let Some(toast) = &page.toast {
        let marker = if toast.error { "error" } else { "ok" };
        lines.push(format!("[{marker}] {}", toast.content));
    }

    if let Some(summary) = page.summary() {
        lines.push("Success! Product copied to your store.".to_owned());
        lines.push(format!(
            "  Title: {}",
            summary.title.as_deref().unwrap_or("(untitled)")
        ));
        if let Some(image_url) = &summary.image_url {
            lines.push(format!("  Image: {image_url}"));
        }
        lines.push(format!("  View in admin: {}", summary.admin_url()));
    }

    lines.join("\n")
}
