//! Startup document fetching.
//!
//! Both documents are requested concurrently and joined before any resolution
//! or generation begins. A failed fetch or parse is fatal to the whole pass:
//! there are no retries and nothing is treated as transient. The client
//! carries a request timeout so a hung server surfaces an error instead of
//! blocking forever.

use std::time::Duration;

use serde_json::Value;

use crate::document::ApiDocument;
use crate::menu::MenuDocument;

/// Per-request timeout applied to both document fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fatal failure while loading the input documents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// A document request failed or returned a non-success status.
    #[error("Failed to fetch {url}: {reason}")]
    Fetch {
        /// Document location.
        url: String,
        /// Underlying failure.
        reason: String,
    },
    /// A document was fetched but is not valid for its role.
    #[error("Invalid document at {url}: {reason}")]
    Invalid {
        /// Document location.
        url: String,
        /// Underlying failure.
        reason: String,
    },
}

/// Fetch and parse the API description and menu overlay.
pub async fn fetch_documents(
    api_url: &str,
    menu_url: &str,
) -> Result<(ApiDocument, MenuDocument), LoadError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let (api_raw, menu_raw) =
        tokio::try_join!(fetch_json(&client, api_url), fetch_json(&client, menu_url))?;

    let api = ApiDocument::from_value(api_raw).map_err(|reason| LoadError::Invalid {
        url: api_url.to_string(),
        reason,
    })?;
    let menu: MenuDocument =
        serde_json::from_value(menu_raw).map_err(|e| LoadError::Invalid {
            url: menu_url.to_string(),
            reason: format!("Failed to parse menu document: {e}"),
        })?;

    tracing::debug!(
        "Loaded {} endpoints and menu {:?}",
        api.endpoints.len(),
        menu.title
    );
    Ok((api, menu))
}

async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(LoadError::Fetch {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    response.json().await.map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}
