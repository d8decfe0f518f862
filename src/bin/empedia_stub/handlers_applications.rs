use super::*;

use anyhow::anyhow;
use serde::Deserialize;

const STATUSES: [&str; 6] = [
    "Applied",
    "Screening",
    "Shortlisted",
    "Interview",
    "Offer",
    "Rejected",
];

#[derive(Debug, Deserialize)]
pub(super) struct StatusBody {
    status: String,
}

/// Embeds the job (with its company) and the applicant summary.
fn present_application(db: &Db, app: &Value) -> Value {
    let mut out = app.clone();
    let Some(obj) = out.as_object_mut() else {
        return out;
    };
    let job = app
        .get("job")
        .and_then(Value::as_str)
        .and_then(|id| db.find(Table::Jobs, id));
    if let Some(job) = job {
        let job = db.with_company(job);
        obj.insert(
            "job".to_string(),
            json!({
                "_id": job.get("_id"),
                "title": text_of(&job, "title"),
                "company": job.get("company"),
            }),
        );
    }
    let user = app
        .get("user")
        .and_then(Value::as_str)
        .and_then(|id| db.find(Table::Users, id));
    if let Some(user) = user {
        obj.insert(
            "user".to_string(),
            json!({
                "_id": user.get("_id"),
                "full_name": text_of(user, "full_name"),
                "email": text_of(user, "email"),
            }),
        );
    }
    out
}

fn company_of_job(db: &Db, job_id: &str) -> Option<String> {
    db.find(Table::Jobs, job_id)?
        .get("company")?
        .as_str()
        .map(str::to_string)
}

pub(super) async fn apply(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), Response> {
    let form = read_form(multipart).await?;
    let job_id = form
        .text("jobId")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| bad_request(anyhow!("jobId is required")))?
        .to_string();
    let resume = form
        .file("resume")
        .ok_or_else(|| bad_request(anyhow!("resume file is required")))?
        .to_string();

    let mut db = state.db.write().await;
    if db.find(Table::Jobs, &job_id).is_none() {
        return Err(not_found(&format!("job {}", job_id)));
    }
    let already = db.rows(Table::Applications).iter().any(|a| {
        a.get("job").and_then(Value::as_str) == Some(job_id.as_str())
            && a.get("user").and_then(Value::as_str) == Some(state.dev_user_id.as_str())
    });
    if already {
        return Err(conflict("already applied to this job"));
    }
    let now = now_rfc3339();
    let mut record = Map::new();
    record.insert("job".to_string(), Value::String(job_id.clone()));
    record.insert("user".to_string(), Value::String(state.dev_user_id.clone()));
    record.insert("resume_url".to_string(), Value::String(resume));
    record.insert("status".to_string(), json!("Applied"));
    record.insert("appliedAt".to_string(), Value::String(now.clone()));
    record.insert(
        "timeline".to_string(),
        json!([{ "status": "Applied", "updatedAt": now }]),
    );
    let stored = db.insert(Table::Applications, record);
    info!(job = %job_id, id = id_of(&stored).unwrap_or_default(), "application submitted");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "application submitted",
            "application": present_application(&db, &stored),
        })),
    ))
}

pub(super) async fn my_applications(State(state): State<Arc<AppState>>) -> Json<Value> {
    let db = state.db.read().await;
    let apps = db
        .rows(Table::Applications)
        .iter()
        .filter(|a| a.get("user").and_then(Value::as_str) == Some(state.dev_user_id.as_str()))
        .map(|a| present_application(&db, a))
        .collect();
    Json(Value::Array(apps))
}

pub(super) async fn company_applications(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<String>,
) -> Json<Value> {
    let db = state.db.read().await;
    let apps = db
        .rows(Table::Applications)
        .iter()
        .filter(|a| {
            a.get("job")
                .and_then(Value::as_str)
                .and_then(|job| company_of_job(&db, job))
                .is_some_and(|c| c == company_id)
        })
        .map(|a| present_application(&db, a))
        .collect();
    Json(Value::Array(apps))
}

pub(super) async fn all_applications(State(state): State<Arc<AppState>>) -> Json<Value> {
    let db = state.db.read().await;
    let apps = db
        .rows(Table::Applications)
        .iter()
        .map(|a| present_application(&db, a))
        .collect();
    Json(Value::Array(apps))
}

pub(super) async fn get_application(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let app = db
        .find(Table::Applications, &id)
        .ok_or_else(|| not_found(&format!("application {}", id)))?;
    Ok(Json(json!({ "application": present_application(&db, app) })))
}

/// Any status of the fixed vocabulary is accepted; each change is appended to the timeline.
pub(super) async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<Value>, Response> {
    let Some(status) = STATUSES
        .iter()
        .find(|s| s.eq_ignore_ascii_case(body.status.trim()))
    else {
        return Err(bad_request(anyhow!(
            "invalid status '{}' (expected one of: {})",
            body.status,
            STATUSES.join(", ")
        )));
    };

    let mut db = state.db.write().await;
    let app = db
        .find_mut(Table::Applications, &id)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| not_found(&format!("application {}", id)))?;
    app.insert("status".to_string(), json!(status));
    let entry = json!({ "status": status, "updatedAt": now_rfc3339(), "updatedBy": state.dev_user_id });
    match app.get_mut("timeline").and_then(Value::as_array_mut) {
        Some(timeline) => timeline.push(entry),
        None => {
            app.insert("timeline".to_string(), json!([entry]));
        }
    }
    let updated = Value::Object(app.clone());
    info!(application = %id, status = %status, "status changed");
    Ok(Json(json!({
        "message": "status updated",
        "application": present_application(&db, &updated),
    })))
}
