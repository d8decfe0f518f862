//! Curriculum endpoints beyond plain course CRUD.

use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::Value;

use super::{RemoteClient, unwrap_record};
use crate::model::{Lesson, Section};

#[derive(serde::Serialize)]
struct NewSection<'a> {
    title: &'a str,
}

impl RemoteClient {
    pub fn curriculum(&self, course_id: &str) -> Result<Vec<Section>> {
        self.get_json(
            &format!("/courses/{}/curriculum", course_id),
            &format!("curriculum of course {}", course_id),
        )
    }

    pub fn add_section(&self, course_id: &str, title: &str) -> Result<Section> {
        let label = format!("add section to course {}", course_id);
        let resp = self
            .request(Method::POST, &format!("/courses/{}/sections", course_id))
            .json(&NewSection { title })
            .send()
            .with_context(|| format!("{} request", label))?;
        let body: Value = self
            .ensure_ok(resp, &label)?
            .json()
            .context("parse section")?;
        unwrap_record(body, "section")
    }

    pub fn add_lesson(&self, course_id: &str, section_id: &str, lesson: &Lesson) -> Result<Lesson> {
        let label = format!("add lesson to section {}", section_id);
        let resp = self
            .request(
                Method::POST,
                &format!("/courses/{}/sections/{}/lessons", course_id, section_id),
            )
            .json(lesson)
            .send()
            .with_context(|| format!("{} request", label))?;
        let body: Value = self
            .ensure_ok(resp, &label)?
            .json()
            .context("parse lesson")?;
        unwrap_record(body, "lesson")
    }
}
