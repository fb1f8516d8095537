use reqwest::header::LOCATION;
use reqwest::{redirect, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::{BASE_URL, MAX_REDIRECTS};

#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure or unreadable body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx, non-redirect response.
    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Redirect chain exceeded the hop cap.
    #[error("too many redirects at {url}")]
    RedirectLoop { url: String },
}

/// Build the shared client. Automatic redirects are disabled so the hop
/// cap in [`fetch_page`] is the only redirect policy.
pub fn client() -> Result<Client, FetchError> {
    let client = Client::builder()
        .redirect(redirect::Policy::none())
        .user_agent(concat!("guide_scraper/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// GET a page and return its body, following 3xx `Location` targets up to
/// [`MAX_REDIRECTS`] hops. No caching, no retry.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let mut url = url.to_string();

    for _ in 0..=MAX_REDIRECTS {
        let response = client.get(&url).send().await?;
        let status = response.status();

        if status.is_redirection() {
            let target = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or(FetchError::Status { status, url: url.clone() })?;
            debug!("Redirect {} -> {}", url, target);
            url = resolve_location(target);
            continue;
        }

        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        return Ok(response.text().await?);
    }

    Err(FetchError::RedirectLoop { url })
}

/// The guide issues root-relative `Location` values for its trailing-slash
/// redirects; resolve those against the fixed origin.
fn resolve_location(target: &str) -> String {
    if target.starts_with('/') {
        format!("{BASE_URL}{target}")
    } else {
        target.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_location_resolves_against_origin() {
        assert_eq!(
            resolve_location("/sv/1500-tal/skogen/"),
            "https://guide.nordiskamuseet.se/sv/1500-tal/skogen/"
        );
    }

    #[test]
    fn absolute_location_unchanged() {
        assert_eq!(
            resolve_location("https://guide.nordiskamuseet.se/sv/"),
            "https://guide.nordiskamuseet.se/sv/"
        );
    }
}
