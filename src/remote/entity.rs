use std::marker::PhantomData;

use anyhow::{Context, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::RemoteClient;
use super::multipart::to_form;
use crate::form::{Payload, SubmitTarget};
use crate::model::{Company, Course, Internship, Job, Mentor, Page, User};

/// How a list endpoint shapes its response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListShape {
    /// `{ <key>: [...], totalPages: n }`
    Paginated { key: &'static str },
    /// `[...]`
    Bare,
}

/// A record type served under a REST collection.
pub trait Entity: DeserializeOwned {
    const NAME: &'static str;
    const PATH: &'static str;
    const LIST: ListShape;
}

impl Entity for Job {
    const NAME: &'static str = "job";
    const PATH: &'static str = "/jobs";
    const LIST: ListShape = ListShape::Paginated { key: "jobs" };
}

impl Entity for Internship {
    const NAME: &'static str = "internship";
    const PATH: &'static str = "/internships";
    const LIST: ListShape = ListShape::Paginated { key: "internships" };
}

impl Entity for User {
    const NAME: &'static str = "user";
    const PATH: &'static str = "/users";
    const LIST: ListShape = ListShape::Paginated { key: "users" };
}

impl Entity for Company {
    const NAME: &'static str = "company";
    const PATH: &'static str = "/companies";
    const LIST: ListShape = ListShape::Bare;
}

impl Entity for Course {
    const NAME: &'static str = "course";
    const PATH: &'static str = "/courses";
    const LIST: ListShape = ListShape::Bare;
}

impl Entity for Mentor {
    const NAME: &'static str = "mentor";
    const PATH: &'static str = "/mentors";
    const LIST: ListShape = ListShape::Bare;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// CRUD over one collection.
pub trait EntityService {
    type Record;

    fn list(&self, query: ListQuery) -> Result<Page<Self::Record>>;
    fn get(&self, id: &str) -> Result<Self::Record>;
    fn create(&self, payload: &Payload) -> Result<Self::Record>;
    fn update(&self, id: &str, payload: &Payload) -> Result<Self::Record>;
    fn delete(&self, id: &str) -> Result<()>;
}

/// Normalizes either list shape into a page; a bare array is one page.
pub fn normalize_page<T: DeserializeOwned>(body: Value, shape: ListShape) -> Result<Page<T>> {
    let (items, total_pages) = match (shape, body) {
        (_, Value::Array(items)) => (Value::Array(items), 1),
        (ListShape::Paginated { key }, Value::Object(mut obj)) => {
            let items = obj
                .remove(key)
                .with_context(|| format!("list response has no '{}' array", key))?;
            let total = obj
                .get("totalPages")
                .and_then(|v| v.as_u64())
                .unwrap_or(1);
            (items, total as u32)
        }
        (ListShape::Bare, other) => {
            anyhow::bail!("expected a JSON array, got {}", kind_of(&other))
        }
        (ListShape::Paginated { .. }, other) => {
            anyhow::bail!("expected a paginated object, got {}", kind_of(&other))
        }
    };
    let items: Vec<T> = serde_json::from_value(items).context("parse list items")?;
    Ok(Page { items, total_pages })
}

/// The record itself, or the record nested under its entity name (`{"job": {...}}`).
pub fn unwrap_record<T: DeserializeOwned>(mut body: Value, name: &str) -> Result<T> {
    if let Some(inner) = body.get_mut(name).filter(|v| v.is_object()).map(Value::take) {
        return serde_json::from_value(inner).with_context(|| format!("parse {}", name));
    }
    serde_json::from_value(body).with_context(|| format!("parse {}", name))
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub struct Resource<'a, E> {
    client: &'a RemoteClient,
    _entity: PhantomData<fn() -> E>,
}

impl RemoteClient {
    pub fn resource<E: Entity>(&self) -> Resource<'_, E> {
        Resource {
            client: self,
            _entity: PhantomData,
        }
    }

    pub fn companies(&self) -> Resource<'_, Company> {
        self.resource()
    }

    pub fn jobs(&self) -> Resource<'_, Job> {
        self.resource()
    }

    pub fn internships(&self) -> Resource<'_, Internship> {
        self.resource()
    }

    pub fn courses(&self) -> Resource<'_, Course> {
        self.resource()
    }

    pub fn mentors(&self) -> Resource<'_, Mentor> {
        self.resource()
    }

    pub fn users(&self) -> Resource<'_, User> {
        self.resource()
    }
}

impl<E: Entity> Resource<'_, E> {
    fn item_path(id: &str) -> String {
        format!("{}/{}", E::PATH, id)
    }

    fn send_form(&self, method: Method, path: &str, payload: &Payload, label: &str) -> Result<E> {
        let form = to_form(payload)?;
        let resp = self
            .client
            .request(method, path)
            .multipart(form)
            .send()
            .with_context(|| format!("{} request", label))?;
        let body: Value = self
            .client
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        unwrap_record(body, E::NAME)
    }
}

impl<E: Entity> EntityService for Resource<'_, E> {
    type Record = E;

    fn list(&self, query: ListQuery) -> Result<Page<E>> {
        let label = format!("list {}", E::PATH.trim_start_matches('/'));
        let mut req = self.client.request(Method::GET, E::PATH);
        if matches!(E::LIST, ListShape::Paginated { .. }) {
            req = req.query(&[("page", query.page), ("limit", query.limit)]);
        }
        let resp = req.send().with_context(|| format!("{} request", label))?;
        let body: Value = self
            .client
            .ensure_ok(resp, &label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        normalize_page(body, E::LIST)
    }

    fn get(&self, id: &str) -> Result<E> {
        let label = format!("{} {}", E::NAME, id);
        let body: Value = self.client.get_json(&Self::item_path(id), &label)?;
        unwrap_record(body, E::NAME)
    }

    fn create(&self, payload: &Payload) -> Result<E> {
        self.send_form(Method::POST, E::PATH, payload, &format!("create {}", E::NAME))
    }

    fn update(&self, id: &str, payload: &Payload) -> Result<E> {
        self.send_form(
            Method::PUT,
            &Self::item_path(id),
            payload,
            &format!("update {} {}", E::NAME, id),
        )
    }

    fn delete(&self, id: &str) -> Result<()> {
        let label = format!("delete {} {}", E::NAME, id);
        let resp = self
            .client
            .request(Method::DELETE, &Self::item_path(id))
            .send()
            .with_context(|| format!("{} request", label))?;
        self.client.ensure_ok(resp, &label)?;
        Ok(())
    }
}

impl<E: Entity> SubmitTarget for Resource<'_, E> {
    type Record = E;

    fn create(&self, payload: &Payload) -> Result<E> {
        EntityService::create(self, payload)
    }

    fn update(&self, id: &str, payload: &Payload) -> Result<E> {
        EntityService::update(self, id, payload)
    }
}
