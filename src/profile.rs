//! On-disk client profile: connection settings plus the current session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::form::ArrayEncoding;
use crate::session::Session;

pub const PROFILE_DIR: &str = ".empedia";
pub const DEFAULT_API_URL: &str = "https://empediaapis-w7dq6.ondigitalocean.app/";

pub const ENV_PROFILE_DIR: &str = "EMPEDIA_PROFILE_DIR";
pub const ENV_API_URL: &str = "EMPEDIA_API_URL";
pub const ENV_TOKEN: &str = "EMPEDIA_TOKEN";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,
    pub base_url: String,
    /// Prefix for server-relative media paths.
    pub media_base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub array_encoding: ArrayEncoding,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_API_URL.to_string(),
            media_base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: default_timeout(),
            array_encoding: ArrayEncoding::default(),
        }
    }
}

impl ClientConfig {
    pub fn for_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            media_base_url: base_url.clone(),
            base_url,
            ..Self::default()
        }
    }

    /// `EMPEDIA_API_URL` replaces both URLs.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.base_url = url.clone();
                self.media_base_url = url;
            }
        }
        self
    }
}

#[derive(Clone, Debug)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Explicit dir, then `EMPEDIA_PROFILE_DIR`, then `./.empedia`.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        let root = match explicit {
            Some(dir) => dir,
            None => match std::env::var_os(ENV_PROFILE_DIR) {
                Some(dir) => PathBuf::from(dir),
                None => std::env::current_dir()
                    .context("get current dir")?
                    .join(PROFILE_DIR),
            },
        };
        Ok(Self { root })
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported profile config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_session(&self) -> Result<Session> {
        let path = self.root.join("session.json");
        if !path.exists() {
            return Ok(Session::anonymous());
        }
        let bytes = fs::read(&path).context("read session.json")?;
        serde_json::from_slice(&bytes).context("parse session.json")
    }

    pub fn write_session(&self, session: &Session) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(session).context("serialize session")?;
        write_atomic(&self.root.join("session.json"), &bytes).context("write session.json")?;
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        let path = self.root.join("session.json");
        if path.exists() {
            fs::remove_file(&path).context("remove session.json")?;
        }
        Ok(())
    }

    /// Stored config and session with environment overrides applied.
    pub fn effective(&self) -> Result<(ClientConfig, Session)> {
        let cfg = self.read_config()?.apply_env();
        let mut session = self.read_session()?;
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            if !token.trim().is_empty() {
                session.token = Some(token);
            }
        }
        Ok((cfg, session))
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod tests;
