use std::thread;

use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::Value;

use super::{RemoteClient, unwrap_record};
use super::multipart::to_form;
use crate::form::{Attachment, Payload};
use crate::model::Application;

#[derive(serde::Serialize)]
struct StatusChange<'a> {
    status: &'a str,
}

impl RemoteClient {
    /// Submits a resume for a job as the signed-in user.
    pub fn apply(&self, job_id: &str, resume: Attachment) -> Result<Value> {
        let mut payload = Payload::new();
        payload.text("jobId", job_id).file("resume", resume);
        let label = format!("apply to job {}", job_id);
        let resp = self
            .request(Method::POST, "/applications/apply")
            .multipart(to_form(&payload)?)
            .send()
            .with_context(|| format!("{} request", label))?;
        self.ensure_ok(resp, &label)?
            .json()
            .context("parse apply response")
    }

    pub fn my_applications(&self) -> Result<Vec<Application>> {
        self.get_json("/applications/my-applications", "my applications")
    }

    pub fn company_applications(&self, company_id: &str) -> Result<Vec<Application>> {
        self.get_json(
            &format!("/applications/company/{}", company_id),
            &format!("applications of company {}", company_id),
        )
    }

    pub fn all_applications(&self) -> Result<Vec<Application>> {
        self.get_json("/admin/applications", "all applications")
    }

    /// Fetches every company's applications concurrently and flattens them in company order.
    pub fn aggregated_applications(&self, company_ids: &[String]) -> Result<Vec<Application>> {
        let results: Vec<Result<Vec<Application>>> = thread::scope(|s| {
            let handles: Vec<_> = company_ids
                .iter()
                .map(|id| s.spawn(move || self.company_applications(id)))
                .collect();
            handles
                .into_iter()
                .map(|h| {
                    h.join()
                        .unwrap_or_else(|_| Err(anyhow::anyhow!("application fetch panicked")))
                })
                .collect()
        });
        let mut out = Vec::new();
        for r in results {
            out.extend(r?);
        }
        Ok(out)
    }

    pub fn application(&self, id: &str) -> Result<Application> {
        let body: Value = self.get_json(
            &format!("/applications/{}", id),
            &format!("application {}", id),
        )?;
        unwrap_record(body, "application")
    }

    /// The status is passed through as-is; the server decides whether the change is allowed.
    pub fn update_application_status(&self, id: &str, status: &str) -> Result<Application> {
        let label = format!("update status of application {}", id);
        let resp = self
            .request(Method::PUT, &format!("/applications/{}/status", id))
            .json(&StatusChange { status })
            .send()
            .with_context(|| format!("{} request", label))?;
        let body: Value = self
            .ensure_ok(resp, &label)?
            .json()
            .context("parse application")?;
        unwrap_record(body, "application")
    }
}
