use super::*;

use anyhow::anyhow;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct NewSectionBody {
    title: String,
}

pub(super) async fn curriculum(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let course = db
        .find(Table::Courses, &course_id)
        .ok_or_else(|| not_found(&format!("course {}", course_id)))?;
    let sections = course.get("sections").cloned().unwrap_or_else(|| json!([]));
    Ok(Json(sections))
}

pub(super) async fn add_section(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    Json(body): Json<NewSectionBody>,
) -> Result<(StatusCode, Json<Value>), Response> {
    if body.title.trim().is_empty() {
        return Err(bad_request(anyhow!("section title is required")));
    }
    let mut db = state.db.write().await;
    let section_id = db.next_id("section");
    let course = db
        .find_mut(Table::Courses, &course_id)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| not_found(&format!("course {}", course_id)))?;
    let sections = course.entry("sections").or_insert_with(|| json!([]));
    let Some(sections) = sections.as_array_mut() else {
        return Err(bad_request(anyhow!("course {} has malformed sections", course_id)));
    };
    let section = json!({
        "_id": section_id,
        "title": body.title.trim(),
        "order": sections.len() + 1,
        "lessons": [],
    });
    sections.push(section.clone());
    info!(course = %course_id, section = %section_id, "section added");
    Ok((StatusCode::CREATED, Json(section)))
}

pub(super) async fn add_lesson(
    State(state): State<Arc<AppState>>,
    Path((course_id, section_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), Response> {
    let Value::Object(mut lesson) = body else {
        return Err(bad_request(anyhow!("lesson must be a JSON object")));
    };
    let titled = lesson
        .get("title")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.trim().is_empty());
    if !titled {
        return Err(bad_request(anyhow!("lesson title is required")));
    }

    let mut db = state.db.write().await;
    let lesson_id = db.next_id("lesson");
    lesson.insert("_id".to_string(), Value::String(lesson_id.clone()));
    let lesson = Value::Object(lesson);

    let course = db
        .find_mut(Table::Courses, &course_id)
        .ok_or_else(|| not_found(&format!("course {}", course_id)))?;
    let section = course
        .get_mut("sections")
        .and_then(Value::as_array_mut)
        .and_then(|sections| sections.iter_mut().find(|s| id_of(s) == Some(section_id.as_str())))
        .ok_or_else(|| not_found(&format!("section {}", section_id)))?;
    match section.get_mut("lessons").and_then(Value::as_array_mut) {
        Some(lessons) => lessons.push(lesson.clone()),
        None => {
            if let Some(obj) = section.as_object_mut() {
                obj.insert("lessons".to_string(), json!([lesson.clone()]));
            }
        }
    }
    info!(course = %course_id, section = %section_id, lesson = %lesson_id, "lesson added");
    Ok((StatusCode::CREATED, Json(lesson)))
}
