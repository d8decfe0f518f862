use super::*;

/// The user the dev token signs in as.
pub(super) const DEV_USER_ID: &str = "u1";

fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Demo data with fixed ids: two companies, a job, an internship, a course,
/// a mentor with one program (one of three slots taken), users and an application.
pub(super) fn seed(db: &mut Db) {
    let now = now_rfc3339();

    db.insert(Table::Users, record(json!({
        "_id": DEV_USER_ID, "full_name": "Dev Admin", "email": "admin@empedia.dev",
        "role": "admin", "created_at": now,
    })));
    db.insert(Table::Users, record(json!({
        "_id": "u2", "full_name": "Asha Rao", "email": "asha@example.com",
        "role": "user", "skills": ["SQL", "Excel"], "created_at": now,
    })));

    db.insert(Table::Companies, record(json!({
        "_id": "c1", "company_name": "Acme Analytics", "industry": "Analytics",
        "website": "https://acme.example", "logo_url": "uploads/acme.png", "verified": true,
    })));
    db.insert(Table::Companies, record(json!({
        "_id": "c2", "company_name": "Finlytics", "industry": "Fintech",
    })));

    db.insert(Table::Jobs, record(json!({
        "_id": "j1", "title": "Data Analyst", "company": "c1",
        "jobType": "Full-time", "workMode": "Hybrid", "location": "Bengaluru",
        "experienceLevel": ["0–1 year"], "requiredSkills": ["SQL", "Excel"],
        "shortSummary": "Own weekly reporting.", "status": "Open",
    })));
    db.insert(Table::Internships, record(json!({
        "_id": "i1", "title": "Finance Intern", "company": "c2",
        "internshipType": "Internship", "workMode": "Remote", "duration": "3 months",
        "stipend": "15000",
        "requiredSkills": ["Excel"], "status": "Open",
    })));

    db.insert(Table::Courses, record(json!({
        "_id": "k1", "title": "SQL for Analysts", "category": "Tech",
        "courseType": "Recorded", "level": "Beginner", "priceType": "Free",
        "sections": [{
            "_id": "s1", "title": "Getting started", "order": 1,
            "lessons": [{ "_id": "l1", "title": "Welcome", "type": "Video", "duration": 5 }],
        }],
    })));

    db.insert(Table::Mentors, record(json!({
        "_id": "m1", "fullName": "Ravi Menon", "headline": "Analytics lead",
        "primaryDomain": "Data Analytics", "subSkills": ["SQL", "Power BI"],
        "pricingType": "Paid", "pricingAmount": "999",
    })));
    db.insert(Table::Programs, record(json!({
        "_id": "p1", "mentor": "m1", "title": "Resume review",
        "description": "30 minutes on your analytics resume.",
        "price": 999.0, "currency": "INR", "duration": 30,
        "availableSlots": [
            { "_id": "slot-a", "date": "2026-11-02", "startTime": "10:00", "endTime": "10:30", "isBooked": false },
            { "_id": "slot-b", "date": "2026-11-02", "startTime": "11:00", "endTime": "11:30", "isBooked": true },
            { "_id": "slot-c", "date": "2026-11-03", "startTime": "18:00", "endTime": "18:30", "isBooked": false },
        ],
    })));

    db.insert(Table::Applications, record(json!({
        "_id": "a1", "job": "j1", "user": "u2", "resume_url": "uploads/asha.pdf",
        "status": "Applied", "appliedAt": now,
        "timeline": [{ "status": "Applied", "updatedAt": now }],
    })));
    db.insert(Table::Enrollments, record(json!({
        "_id": "e1", "user_id": "u2", "course_id": "k1",
        "purchase_status": "completed", "progress_percent": 40.0,
        "completion_status": "in_progress",
    })));
}
