use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{blocking::Client, redirect::Policy};
use tracing::info;

/// GET `url` and return the response body.
pub(crate) fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .user_agent(concat!("choropleth/", env!("CARGO_PKG_VERSION")))
        .redirect(Policy::limited(10))
        .timeout(Duration::from_secs(30))
        .build()
        .context("[io::fetch] Failed to build HTTP client")?;

    info!(url, "fetching");
    let body = client.get(url).send()
        .with_context(|| format!("[io::fetch] GET {url}"))?
        .error_for_status()
        .with_context(|| format!("[io::fetch] GET {url} returned error status"))?
        .bytes()
        .with_context(|| format!("[io::fetch] Failed to read body of {url}"))?;

    Ok(body.to_vec())
}
