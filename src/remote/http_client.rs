use anyhow::{Context, Result};
use reqwest::Method;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::RemoteClient;

impl RemoteClient {
    pub(super) fn ensure_ok(&self, resp: Response, label: &str) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        warn!(%status, call = label, "request failed");
        if status == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!(
                "unauthorized (token invalid/expired; run `empedia login --token ...`)"
            );
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!("forbidden (insufficient permissions for {})", label);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("{} not found", label);
        }
        let detail = resp.text().ok().and_then(|body| error_detail(&body));
        match detail {
            Some(msg) => anyhow::bail!("{} failed ({}): {}", label, status, msg),
            None => anyhow::bail!("{} failed ({})", label, status),
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Request with the bearer token attached when the session has one.
    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "request");
        let req = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    pub(super) fn get_json<T: DeserializeOwned>(&self, path: &str, label: &str) -> Result<T> {
        let resp = self
            .request(Method::GET, path)
            .send()
            .with_context(|| format!("{} request", label))?;
        self.ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))
    }
}

/// Message out of a `{"error": ..}` or `{"message": ..}` body.
fn error_detail(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
        .map(|s| s.to_string())
}
