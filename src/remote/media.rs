use super::RemoteClient;

/// Absolute URL for a server-relative media path. Absolute URLs pass through unchanged.
pub fn media_url(media_base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    let lower = path.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:") {
        return path.to_string();
    }
    let normalized = path.replace('\\', "/");
    format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        normalized.trim_start_matches('/')
    )
}

impl RemoteClient {
    pub fn media_url(&self, path: &str) -> String {
        media_url(&self.config.media_base_url, path)
    }
}
