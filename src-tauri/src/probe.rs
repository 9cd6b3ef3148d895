//! Reachability probe for pages the webview reports as finished
//!
//! Webviews do not say whether a load succeeded, so after each load the same
//! URL is requested once more: a HEAD, then a one-byte ranged GET if the
//! server refuses HEAD. Any HTTP response counts as loaded.

use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug)]
pub struct ProbeOutcome {
    pub ok: bool,
    pub status: Option<u16>,
    pub error_kind: Option<&'static str>,
}

impl ProbeOutcome {
    fn loaded(status: Option<u16>) -> Self {
        Self {
            ok: true,
            status,
            error_kind: None,
        }
    }

    fn failed(kind: &'static str) -> Self {
        Self {
            ok: false,
            status: None,
            error_kind: Some(kind),
        }
    }
}

pub async fn probe(url: &str) -> ProbeOutcome {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return ProbeOutcome::failed("invalid_url");
    }

    let parsed = match url::Url::parse(trimmed) {
        Ok(u) => u,
        Err(_) => return ProbeOutcome::failed("invalid_url"),
    };

    // about:, file:, data: and friends never hit the network
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return ProbeOutcome::loaded(None);
    }

    let client = match reqwest::Client::builder()
        .redirect(Policy::limited(5))
        .timeout(Duration::from_secs(6))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "Probe client unavailable");
            // Without a client we cannot tell; do not report a failure
            return ProbeOutcome::loaded(None);
        }
    };

    let response = match client.head(parsed.clone()).send().await {
        Ok(resp) => Ok(resp),
        Err(_) => {
            client
                .get(parsed)
                .header(reqwest::header::RANGE, "bytes=0-0")
                .send()
                .await
        }
    };

    match response {
        Ok(resp) => ProbeOutcome::loaded(Some(resp.status().as_u16())),
        Err(e) => {
            let lowered = e.to_string().to_lowercase();
            let kind = if e.is_timeout() {
                "timeout"
            } else if e.is_connect() {
                if lowered.contains("dns") || lowered.contains("resolve") {
                    "dns"
                } else if lowered.contains("tls") || lowered.contains("certificate") {
                    "tls"
                } else {
                    "connect"
                }
            } else if e.is_request() {
                "request"
            } else {
                "unknown"
            };

            tracing::info!(url = %trimmed, kind = kind, error = %e, "Page probe failed");
            ProbeOutcome::failed(kind)
        }
    }
}
