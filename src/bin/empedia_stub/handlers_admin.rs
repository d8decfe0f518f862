use super::*;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct EnrollmentQuery {
    user_id: Option<String>,
}

/// Embeds `{_id, title}` of the enrolled course when it is still stored.
fn present_enrollment(db: &Db, enrollment: &Value) -> Value {
    let mut out = enrollment.clone();
    let course = enrollment
        .get("course_id")
        .and_then(Value::as_str)
        .and_then(|id| db.find(Table::Courses, id));
    if let (Some(course), Some(obj)) = (course, out.as_object_mut()) {
        obj.insert(
            "course_id".to_string(),
            json!({ "_id": course.get("_id"), "title": course.get("title") }),
        );
    }
    out
}

pub(super) async fn enrollments(
    State(state): State<Arc<AppState>>,
    Query(q): Query<EnrollmentQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let rows = db
        .rows(Table::Enrollments)
        .iter()
        .filter(|e| match &q.user_id {
            Some(user) => e.get("user_id").and_then(Value::as_str) == Some(user.as_str()),
            None => true,
        })
        .map(|e| present_enrollment(&db, e))
        .collect();
    Json(Value::Array(rows))
}

pub(super) async fn all_enrollments(State(state): State<Arc<AppState>>) -> Json<Value> {
    let db = state.db.read().await;
    let rows = db
        .rows(Table::Enrollments)
        .iter()
        .map(|e| present_enrollment(&db, e))
        .collect();
    Json(Value::Array(rows))
}

pub(super) async fn get_enrollment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let enrollment = db
        .find(Table::Enrollments, &id)
        .ok_or_else(|| not_found(&format!("enrollment {}", id)))?;
    Ok(Json(json!({ "enrollment": present_enrollment(&db, enrollment) })))
}

pub(super) async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PageQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let (users, total_pages) = paginate(db.rows(Table::Users).to_vec(), &q);
    Json(json!({ "users": users, "totalPages": total_pages }))
}

pub(super) async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let user = db
        .find(Table::Users, &id)
        .ok_or_else(|| not_found(&format!("user {}", id)))?;
    Ok(Json(user.clone()))
}

pub(super) async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let mut db = state.db.write().await;
    if !db.remove(Table::Users, &id) {
        return Err(not_found(&format!("user {}", id)));
    }
    info!(user = %id, "user deleted");
    Ok(Json(json!({"message": "user deleted"})))
}

pub(super) async fn metrics(State(state): State<Arc<AppState>>) -> Json<Value> {
    let db = state.db.read().await;
    let count = |t: Table| db.rows(t).len();
    let open = |t: Table| {
        db.rows(t)
            .iter()
            .filter(|r| !matches!(text_of(r, "status"), "Closed" | "Draft"))
            .count()
    };
    let pending_payouts = db
        .rows(Table::Bookings)
        .iter()
        .filter(|b| text_of(b, "status") == "confirmed")
        .count();
    Json(json!({
        "activeJobs": open(Table::Jobs),
        "activeInternships": open(Table::Internships),
        "totalApplications": count(Table::Applications),
        "courseEnrollments": count(Table::Enrollments),
        "mentorBookings": count(Table::Bookings),
        "pendingPayouts": pending_payouts,
        "totalUsers": count(Table::Users),
        "totalMentors": count(Table::Mentors),
        "totalCompanies": count(Table::Companies),
    }))
}
