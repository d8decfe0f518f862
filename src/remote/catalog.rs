//! Read-mostly admin endpoints: enrollments and dashboard metrics.

use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::Value;

use super::{RemoteClient, unwrap_record};
use crate::model::{DashboardMetrics, Enrollment};

impl RemoteClient {
    pub fn enrollments_for_user(&self, user_id: &str) -> Result<Vec<Enrollment>> {
        let label = format!("enrollments of user {}", user_id);
        let resp = self
            .request(Method::GET, "/enrollments")
            .query(&[("user_id", user_id)])
            .send()
            .with_context(|| format!("{} request", label))?;
        self.ensure_ok(resp, &label)?
            .json()
            .context("parse enrollments")
    }

    pub fn enrollment(&self, id: &str) -> Result<Enrollment> {
        let body: Value =
            self.get_json(&format!("/enrollments/{}", id), &format!("enrollment {}", id))?;
        unwrap_record(body, "enrollment")
    }

    pub fn all_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.get_json("/enrollments/admin/all", "all enrollments")
    }

    pub fn dashboard_metrics(&self) -> Result<DashboardMetrics> {
        self.get_json("/dashboard/metrics", "dashboard metrics")
    }
}
