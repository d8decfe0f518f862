use super::*;

use anyhow::anyhow;
use serde::Deserialize;

/// Per-collection behaviour of the generic multipart CRUD routes.
pub(super) trait Collection {
    const TABLE: Table;
    /// Wrapper key of create/update responses.
    const NAME: &'static str;
    /// Paginated collections answer lists as `{<key>: [...], totalPages}`.
    const PAGE_KEY: Option<&'static str> = None;
    const REQUIRED: &'static [&'static str];

    /// Adjusts a decoded form before it is stored.
    fn shape(_db: &mut Db, _form: &FormFields, _record: &mut Map<String, Value>) {}

    fn present(_db: &Db, record: &Value) -> Value {
        record.clone()
    }
}

pub(super) struct Companies;
pub(super) struct Jobs;
pub(super) struct Internships;
pub(super) struct Courses;
pub(super) struct Mentors;

impl Collection for Companies {
    const TABLE: Table = Table::Companies;
    const NAME: &'static str = "company";
    const REQUIRED: &'static [&'static str] = &["company_name"];

    fn shape(_db: &mut Db, form: &FormFields, record: &mut Map<String, Value>) {
        if let Some(logo) = form.file("logo") {
            record.remove("logo");
            record.insert("logo_url".to_string(), Value::String(logo.to_string()));
        }
    }
}

impl Collection for Jobs {
    const TABLE: Table = Table::Jobs;
    const NAME: &'static str = "job";
    const PAGE_KEY: Option<&'static str> = Some("jobs");
    const REQUIRED: &'static [&'static str] = &["title", "company"];

    fn present(db: &Db, record: &Value) -> Value {
        db.with_company(record)
    }
}

impl Collection for Internships {
    const TABLE: Table = Table::Internships;
    const NAME: &'static str = "internship";
    const PAGE_KEY: Option<&'static str> = Some("internships");
    const REQUIRED: &'static [&'static str] = &["title", "company"];

    fn present(db: &Db, record: &Value) -> Value {
        db.with_company(record)
    }
}

impl Collection for Courses {
    const TABLE: Table = Table::Courses;
    const NAME: &'static str = "course";
    const REQUIRED: &'static [&'static str] = &["title"];

    fn shape(db: &mut Db, form: &FormFields, record: &mut Map<String, Value>) {
        record.retain(|k, _| !k.starts_with("videoFile_") && !k.starts_with("materialFile_"));
        if let Some(Value::Array(drafts)) = form.text("sections").and_then(|t| serde_json::from_str(t).ok()) {
            let sections = drafts
                .into_iter()
                .enumerate()
                .map(|(i, s)| stored_section(db, form, s, i))
                .collect();
            record.insert("sections".to_string(), Value::Array(sections));
        }
    }
}

impl Collection for Mentors {
    const TABLE: Table = Table::Mentors;
    const NAME: &'static str = "mentor";
    const REQUIRED: &'static [&'static str] = &["fullName"];
}

/// Turns a client-side section draft into a stored section, resolving uploaded lesson files.
fn stored_section(db: &mut Db, form: &FormFields, mut draft: Value, order: usize) -> Value {
    let draft_id = take_draft_id(&mut draft);
    let section_id = server_id(db, &draft_id, "section");
    let lessons = match draft.get_mut("lessons").map(Value::take) {
        Some(Value::Array(lessons)) => lessons,
        _ => Vec::new(),
    };
    let lessons: Vec<Value> = lessons
        .into_iter()
        .map(|mut lesson| {
            let lesson_draft_id = take_draft_id(&mut lesson);
            let lesson_id = server_id(db, &lesson_draft_id, "lesson");
            if let Some(obj) = lesson.as_object_mut() {
                obj.insert("_id".to_string(), Value::String(lesson_id));
                let uploads = [("videoFile", "videoUrl"), ("materialFile", "supportingMaterialUrl")];
                for (part, key) in uploads {
                    if let Some(path) = form.file(&format!("{}_{}_{}", part, draft_id, lesson_draft_id)) {
                        obj.insert(key.to_string(), Value::String(path.to_string()));
                    }
                }
            }
            lesson
        })
        .collect();
    if let Some(obj) = draft.as_object_mut() {
        obj.insert("_id".to_string(), Value::String(section_id));
        obj.insert("order".to_string(), json!(order + 1));
        obj.insert("lessons".to_string(), Value::Array(lessons));
    }
    draft
}

fn take_draft_id(draft: &mut Value) -> String {
    let Some(obj) = draft.as_object_mut() else {
        return String::new();
    };
    let id = obj.remove("id").or_else(|| obj.remove("_id"));
    id.and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Client-minted ids are replaced; ids the server handed out earlier are kept.
fn server_id(db: &mut Db, draft_id: &str, prefix: &str) -> String {
    if draft_id.is_empty() || draft_id.starts_with("local-") {
        db.next_id(prefix)
    } else {
        draft_id.to_string()
    }
}

fn check_required<C: Collection>(record: &Map<String, Value>) -> Result<(), Response> {
    for key in C::REQUIRED {
        let present = match record.get(*key) {
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        };
        if !present {
            return Err(bad_request(anyhow!("{} is required", key)));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub(super) struct PageQuery {
    pub(super) page: Option<usize>,
    pub(super) limit: Option<usize>,
}

/// One page of `rows` plus the page count; pages are 1-based.
pub(super) fn paginate(rows: Vec<Value>, q: &PageQuery) -> (Vec<Value>, usize) {
    let limit = q.limit.unwrap_or(10).max(1);
    let page = q.page.unwrap_or(1).max(1);
    let total_pages = rows.len().div_ceil(limit).max(1);
    let items = rows.into_iter().skip((page - 1) * limit).take(limit).collect();
    (items, total_pages)
}

pub(super) async fn list_records<C: Collection>(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PageQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let rows: Vec<Value> = db.rows(C::TABLE).iter().map(|r| C::present(&db, r)).collect();
    match C::PAGE_KEY {
        Some(key) => {
            let (items, total_pages) = paginate(rows, &q);
            Json(json!({ key: items, "totalPages": total_pages }))
        }
        None => Json(Value::Array(rows)),
    }
}

pub(super) async fn get_record<C: Collection>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let record = db
        .find(C::TABLE, &id)
        .ok_or_else(|| not_found(&format!("{} {}", C::NAME, id)))?;
    Ok(Json(C::present(&db, record)))
}

pub(super) async fn create_record<C: Collection>(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), Response> {
    let form = read_form(multipart).await?;
    let mut record = form.to_record(&["sections"]);
    check_required::<C>(&record)?;

    let mut db = state.db.write().await;
    C::shape(&mut db, &form, &mut record);
    let stored = db.insert(C::TABLE, record);
    info!(kind = C::NAME, id = id_of(&stored).unwrap_or_default(), "created");
    let body = json!({
        "message": format!("{} created", C::NAME),
        C::NAME: C::present(&db, &stored),
    });
    Ok((StatusCode::CREATED, Json(body)))
}

/// Replaces the stored fields with the submitted ones; earlier uploads survive unless re-sent.
pub(super) async fn update_record<C: Collection>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, Response> {
    let form = read_form(multipart).await?;
    let mut record = form.to_record(&["sections"]);
    check_required::<C>(&record)?;

    let mut db = state.db.write().await;
    let previous = db
        .find(C::TABLE, &id)
        .cloned()
        .ok_or_else(|| not_found(&format!("{} {}", C::NAME, id)))?;
    C::shape(&mut db, &form, &mut record);
    if let Value::Object(old) = previous {
        for (key, value) in old {
            let keep = matches!(key.as_str(), "_id" | "createdAt" | "sections")
                || value.as_str().is_some_and(|s| s.starts_with("uploads/"));
            if keep && !record.contains_key(&key) {
                record.insert(key, value);
            }
        }
    }
    record.insert("updatedAt".to_string(), Value::String(now_rfc3339()));
    let updated = Value::Object(record);
    if let Some(slot) = db.find_mut(C::TABLE, &id) {
        *slot = updated.clone();
    }
    info!(kind = C::NAME, id = %id, "updated");
    Ok(Json(json!({
        "message": format!("{} updated", C::NAME),
        C::NAME: C::present(&db, &updated),
    })))
}

pub(super) async fn delete_record<C: Collection>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let mut db = state.db.write().await;
    if !db.remove(C::TABLE, &id) {
        return Err(not_found(&format!("{} {}", C::NAME, id)));
    }
    info!(kind = C::NAME, id = %id, "deleted");
    Ok(Json(json!({"message": format!("{} deleted", C::NAME)})))
}
