use super::*;

use anyhow::anyhow;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct MentorQuery {
    mentor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BookBody {
    mentorship_id: String,
    slot_id: String,
    #[serde(default)]
    user_notes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SlotBody {
    date: String,
    start_time: String,
    end_time: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct SlotsBody {
    slots: Vec<SlotBody>,
}

fn mentor_summary(db: &Db, mentor_id: &str) -> Option<Value> {
    let mentor = db.find(Table::Mentors, mentor_id)?;
    Some(json!({
        "_id": mentor_id,
        "fullName": text_of(mentor, "fullName"),
        "headline": mentor.get("headline"),
    }))
}

/// Embeds the mentor summary into a program when the mentor is known.
fn present_program(db: &Db, program: &Value) -> Value {
    let mut out = program.clone();
    let summary = program
        .get("mentor")
        .and_then(Value::as_str)
        .and_then(|id| mentor_summary(db, id));
    if let (Some(summary), Some(obj)) = (summary, out.as_object_mut()) {
        obj.insert("mentor".to_string(), summary);
    }
    out
}

fn new_slots(db: &mut Db, slots: Vec<SlotBody>) -> Result<Vec<Value>, Response> {
    let mut out = Vec::with_capacity(slots.len());
    for s in slots {
        if s.date.trim().is_empty() || s.start_time.trim().is_empty() || s.end_time.trim().is_empty()
        {
            return Err(bad_request(anyhow!("slot needs date, startTime and endTime")));
        }
        out.push(json!({
            "_id": db.next_id("slot"),
            "date": s.date,
            "startTime": s.start_time,
            "endTime": s.end_time,
            "isBooked": false,
        }));
    }
    Ok(out)
}

pub(super) async fn programs(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MentorQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let programs = db
        .rows(Table::Programs)
        .iter()
        .filter(|p| match &q.mentor_id {
            Some(m) => p.get("mentor").and_then(Value::as_str) == Some(m.as_str()),
            None => true,
        })
        .map(|p| present_program(&db, p))
        .collect();
    Json(Value::Array(programs))
}

pub(super) async fn get_program(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let program = db
        .find(Table::Programs, &id)
        .ok_or_else(|| not_found(&format!("mentorship {}", id)))?;
    Ok(Json(json!({ "mentorship": present_program(&db, program) })))
}

pub(super) async fn create_program(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), Response> {
    let form = read_form(multipart).await?;
    let mut record = form.to_record(&["availableSlots"]);
    let mentor = form.text("mentor").map(str::trim).unwrap_or_default();
    let title = form.text("title").map(str::trim).unwrap_or_default();
    if mentor.is_empty() || title.is_empty() {
        return Err(bad_request(anyhow!("mentor and title are required")));
    }
    let price = match form.text("price").map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<f64>()
            .map_err(|_| bad_request(anyhow!("price must be a number")))?,
        _ => 0.0,
    };
    let duration = match form.text("duration").map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<u32>()
            .map_err(|_| bad_request(anyhow!("duration must be whole minutes")))?,
        _ => 30,
    };
    record.insert("price".to_string(), json!(price));
    record.insert("duration".to_string(), json!(duration));
    record
        .entry("currency")
        .or_insert_with(|| json!("INR"));

    let slots: Vec<SlotBody> = match form.text("availableSlots") {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)
            .map_err(|e| bad_request(anyhow!("availableSlots: {}", e)))?,
        _ => Vec::new(),
    };

    let mut db = state.db.write().await;
    let slots = new_slots(&mut db, slots)?;
    record.insert("availableSlots".to_string(), Value::Array(slots));
    let stored = db.insert(Table::Programs, record);
    info!(mentor = %mentor, id = id_of(&stored).unwrap_or_default(), "mentorship created");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "mentorship created",
            "mentorship": present_program(&db, &stored),
        })),
    ))
}

pub(super) async fn add_slots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<SlotsBody>,
) -> Result<Json<Value>, Response> {
    let mut db = state.db.write().await;
    if db.find(Table::Programs, &id).is_none() {
        return Err(not_found(&format!("mentorship {}", id)));
    }
    let added = new_slots(&mut db, body.slots)?;
    let count = added.len();
    let program = db
        .find_mut(Table::Programs, &id)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| not_found(&format!("mentorship {}", id)))?;
    match program.get_mut("availableSlots").and_then(Value::as_array_mut) {
        Some(slots) => slots.extend(added),
        None => {
            program.insert("availableSlots".to_string(), Value::Array(added));
        }
    }
    let updated = Value::Object(program.clone());
    info!(mentorship = %id, count, "slots added");
    Ok(Json(json!({ "mentorship": present_program(&db, &updated) })))
}

/// Books one open slot for the dev user; a slot already taken answers 409.
pub(super) async fn book(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookBody>,
) -> Result<(StatusCode, Json<Value>), Response> {
    let mut db = state.db.write().await;
    let program = db
        .find(Table::Programs, &body.mentorship_id)
        .cloned()
        .ok_or_else(|| not_found(&format!("mentorship {}", body.mentorship_id)))?;
    let slot = program
        .get("availableSlots")
        .and_then(Value::as_array)
        .and_then(|slots| slots.iter().find(|s| id_of(s) == Some(body.slot_id.as_str())))
        .cloned()
        .ok_or_else(|| not_found(&format!("slot {}", body.slot_id)))?;
    if slot.get("isBooked").and_then(Value::as_bool).unwrap_or(false) {
        return Err(conflict("slot already booked"));
    }

    if let Some(s) = db
        .find_mut(Table::Programs, &body.mentorship_id)
        .and_then(|p| p.get_mut("availableSlots"))
        .and_then(Value::as_array_mut)
        .and_then(|slots| slots.iter_mut().find(|s| id_of(s) == Some(body.slot_id.as_str())))
        .and_then(Value::as_object_mut)
    {
        s.insert("isBooked".to_string(), Value::Bool(true));
    }

    let text = |key: &str| text_of(&slot, key).to_string();
    let mut record = Map::new();
    record.insert("user".to_string(), Value::String(state.dev_user_id.clone()));
    record.insert("mentor".to_string(), program.get("mentor").cloned().unwrap_or(Value::Null));
    record.insert(
        "mentorship".to_string(),
        json!({ "_id": body.mentorship_id, "title": program.get("title") }),
    );
    record.insert("slot_id".to_string(), Value::String(body.slot_id.clone()));
    record.insert("slot_date".to_string(), Value::String(text("date")));
    record.insert(
        "slot_time".to_string(),
        Value::String(format!("{} - {}", text("startTime"), text("endTime"))),
    );
    record.insert("status".to_string(), json!("confirmed"));
    if !body.user_notes.trim().is_empty() {
        record.insert("user_notes".to_string(), Value::String(body.user_notes.clone()));
    }
    let stored = db.insert(Table::Bookings, record);
    info!(mentorship = %body.mentorship_id, slot = %body.slot_id, "slot booked");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "booking confirmed",
            "booking": present_booking(&db, &stored),
        })),
    ))
}

fn present_booking(db: &Db, booking: &Value) -> Value {
    let mut out = booking.clone();
    let summary = booking
        .get("mentor")
        .and_then(Value::as_str)
        .and_then(|id| mentor_summary(db, id));
    if let (Some(summary), Some(obj)) = (summary, out.as_object_mut()) {
        obj.insert("mentor".to_string(), summary);
    }
    out
}

pub(super) async fn my_bookings(State(state): State<Arc<AppState>>) -> Json<Value> {
    let db = state.db.read().await;
    let bookings = db
        .rows(Table::Bookings)
        .iter()
        .filter(|b| b.get("user").and_then(Value::as_str) == Some(state.dev_user_id.as_str()))
        .map(|b| present_booking(&db, b))
        .collect();
    Json(Value::Array(bookings))
}

pub(super) async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Response> {
    let db = state.db.read().await;
    let booking = db
        .find(Table::Bookings, &id)
        .ok_or_else(|| not_found(&format!("booking {}", id)))?;
    Ok(Json(json!({ "booking": present_booking(&db, booking) })))
}
