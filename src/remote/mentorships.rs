use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::Value;

use super::multipart::to_form;
use super::{RemoteClient, unwrap_record};
use crate::booking::BookingBackend;
use crate::form::Payload;
use crate::model::{Booking, MentorshipProgram, NewSlot};

#[derive(serde::Serialize)]
struct BookRequest<'a> {
    mentorship_id: &'a str,
    slot_id: &'a str,
    user_notes: &'a str,
}

#[derive(serde::Serialize)]
struct SlotsRequest<'a> {
    slots: &'a [NewSlot],
}

impl RemoteClient {
    pub fn programs_by_mentor(&self, mentor_id: &str) -> Result<Vec<MentorshipProgram>> {
        let label = format!("programs of mentor {}", mentor_id);
        let resp = self
            .request(Method::GET, "/mentorships")
            .query(&[("mentor_id", mentor_id)])
            .send()
            .with_context(|| format!("{} request", label))?;
        self.ensure_ok(resp, &label)?
            .json()
            .context("parse programs")
    }

    pub fn program(&self, id: &str) -> Result<MentorshipProgram> {
        let body: Value = self.get_json(
            &format!("/mentorships/{}", id),
            &format!("mentorship program {}", id),
        )?;
        unwrap_record(body, "mentorship")
    }

    pub fn book_slot(&self, mentorship_id: &str, slot_id: &str, user_notes: &str) -> Result<Value> {
        let label = format!("book slot {}", slot_id);
        let resp = self
            .request(Method::POST, "/mentorships/book")
            .json(&BookRequest {
                mentorship_id,
                slot_id,
                user_notes,
            })
            .send()
            .with_context(|| format!("{} request", label))?;
        self.ensure_ok(resp, &label)?
            .json()
            .context("parse booking response")
    }

    pub fn my_bookings(&self) -> Result<Vec<Booking>> {
        self.get_json("/mentorships/user/my-bookings", "my bookings")
    }

    pub fn booking(&self, id: &str) -> Result<Booking> {
        let body: Value =
            self.get_json(&format!("/mentorships/booking/{}", id), &format!("booking {}", id))?;
        unwrap_record(body, "booking")
    }

    pub fn create_program(&self, payload: &Payload) -> Result<MentorshipProgram> {
        let label = "create mentorship program";
        let resp = self
            .request(Method::POST, "/mentorships/create")
            .multipart(to_form(payload)?)
            .send()
            .context("create mentorship program request")?;
        let body: Value = self
            .ensure_ok(resp, label)?
            .json()
            .context("parse mentorship program")?;
        unwrap_record(body, "mentorship")
    }

    pub fn add_slots(&self, program_id: &str, slots: &[NewSlot]) -> Result<MentorshipProgram> {
        let label = format!("add slots to program {}", program_id);
        let resp = self
            .request(Method::POST, &format!("/mentorships/{}/slots", program_id))
            .json(&SlotsRequest { slots })
            .send()
            .with_context(|| format!("{} request", label))?;
        let body: Value = self
            .ensure_ok(resp, &label)?
            .json()
            .context("parse mentorship program")?;
        unwrap_record(body, "mentorship")
    }
}

impl BookingBackend for RemoteClient {
    fn book(&self, program_id: &str, slot_id: &str, user_notes: &str) -> Result<()> {
        self.book_slot(program_id, slot_id, user_notes).map(|_| ())
    }

    fn programs_by_mentor(&self, mentor_id: &str) -> Result<Vec<MentorshipProgram>> {
        RemoteClient::programs_by_mentor(self, mentor_id)
    }
}
