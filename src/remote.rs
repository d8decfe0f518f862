//! Blocking client for the marketplace REST API.
//!
//! Every call is sent once: no retries, no caching.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::profile::ClientConfig;
use crate::session::Session;

mod applications;
mod catalog;
mod courses;
mod entity;
mod http_client;
mod media;
mod mentorships;
mod multipart;

pub use self::entity::{Entity, EntityService, ListQuery, ListShape, Resource, normalize_page, unwrap_record};
pub use self::media::media_url;

pub struct RemoteClient {
    config: ClientConfig,
    session: Session,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: ClientConfig, session: Session) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("empedia/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            config,
            session,
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
#[path = "tests/remote_tests.rs"]
mod tests;
