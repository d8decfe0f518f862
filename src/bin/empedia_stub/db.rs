use super::*;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Table {
    Companies,
    Jobs,
    Internships,
    Courses,
    Mentors,
    Users,
    Applications,
    Programs,
    Bookings,
    Enrollments,
}

impl Table {
    fn prefix(self) -> &'static str {
        match self {
            Table::Companies => "company",
            Table::Jobs => "job",
            Table::Internships => "internship",
            Table::Courses => "course",
            Table::Mentors => "mentor",
            Table::Users => "user",
            Table::Applications => "application",
            Table::Programs => "program",
            Table::Bookings => "booking",
            Table::Enrollments => "enrollment",
        }
    }
}

/// Every stored record is a JSON object keyed by `_id`, kept in insertion order.
#[derive(Default)]
pub(super) struct Db {
    seq: u64,
    companies: Vec<Value>,
    jobs: Vec<Value>,
    internships: Vec<Value>,
    courses: Vec<Value>,
    mentors: Vec<Value>,
    users: Vec<Value>,
    applications: Vec<Value>,
    programs: Vec<Value>,
    bookings: Vec<Value>,
    enrollments: Vec<Value>,
}

impl Db {
    pub(super) fn next_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{}-{}", prefix, self.seq)
    }

    pub(super) fn rows(&self, table: Table) -> &[Value] {
        match table {
            Table::Companies => &self.companies,
            Table::Jobs => &self.jobs,
            Table::Internships => &self.internships,
            Table::Courses => &self.courses,
            Table::Mentors => &self.mentors,
            Table::Users => &self.users,
            Table::Applications => &self.applications,
            Table::Programs => &self.programs,
            Table::Bookings => &self.bookings,
            Table::Enrollments => &self.enrollments,
        }
    }

    fn rows_mut(&mut self, table: Table) -> &mut Vec<Value> {
        match table {
            Table::Companies => &mut self.companies,
            Table::Jobs => &mut self.jobs,
            Table::Internships => &mut self.internships,
            Table::Courses => &mut self.courses,
            Table::Mentors => &mut self.mentors,
            Table::Users => &mut self.users,
            Table::Applications => &mut self.applications,
            Table::Programs => &mut self.programs,
            Table::Bookings => &mut self.bookings,
            Table::Enrollments => &mut self.enrollments,
        }
    }

    pub(super) fn find(&self, table: Table, id: &str) -> Option<&Value> {
        self.rows(table).iter().find(|r| id_of(r) == Some(id))
    }

    pub(super) fn find_mut(&mut self, table: Table, id: &str) -> Option<&mut Value> {
        self.rows_mut(table).iter_mut().find(|r| id_of(r) == Some(id))
    }

    /// Stores `record` under a fresh id unless it already carries one; returns the stored copy.
    pub(super) fn insert(&mut self, table: Table, mut record: Map<String, Value>) -> Value {
        if !record.contains_key("_id") {
            let id = self.next_id(table.prefix());
            record.insert("_id".to_string(), Value::String(id));
        }
        record
            .entry("createdAt")
            .or_insert_with(|| Value::String(now_rfc3339()));
        let stored = Value::Object(record);
        self.rows_mut(table).push(stored.clone());
        stored
    }

    pub(super) fn remove(&mut self, table: Table, id: &str) -> bool {
        let rows = self.rows_mut(table);
        let before = rows.len();
        rows.retain(|r| id_of(r) != Some(id));
        rows.len() != before
    }

    /// Replaces a bare `company` id with the stored company, when there is one.
    pub(super) fn with_company(&self, record: &Value) -> Value {
        let mut out = record.clone();
        let company = record
            .get("company")
            .and_then(Value::as_str)
            .and_then(|id| self.find(Table::Companies, id));
        if let (Some(company), Some(obj)) = (company, out.as_object_mut()) {
            obj.insert("company".to_string(), company.clone());
        }
        out
    }
}

pub(super) fn id_of(record: &Value) -> Option<&str> {
    record.get("_id").and_then(Value::as_str)
}

pub(super) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// String field of a record, empty when missing or not a string.
pub(super) fn text_of<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}
