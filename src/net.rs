// src/net.rs
// Thin fetch wrapper. The portal is HTTPS-only, so this rides on reqwest's
// blocking client (rustls) rather than a raw socket.

use std::time::Duration;

use tracing::debug;

use crate::error::WatchError;
use crate::params::USER_AGENT;

/// GET `url` and return the body. Timeouts and non-2xx statuses both come
/// back as `WatchError::Network`.
pub fn get(url: &str) -> Result<String, WatchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;

    debug!(%url, "GET");
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}
