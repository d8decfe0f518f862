//! Slot selection and confirmation for a mentor's programs.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::model::{MentorshipProgram, Slot};

/// How long a success message stays up before the flow resets itself.
pub const AUTO_DISMISS: Duration = Duration::from_millis(2000);

/// Calls the booking flow needs from the backend.
pub trait BookingBackend {
    fn book(&self, program_id: &str, slot_id: &str, user_notes: &str) -> anyhow::Result<()>;
    fn programs_by_mentor(&self, mentor_id: &str) -> anyhow::Result<Vec<MentorshipProgram>>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingStatus {
    Idle,
    SlotSelected,
    Confirming,
    Success { at: Instant },
    Error(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("a booking is already being confirmed")]
    Busy,
    #[error("select a slot first")]
    NothingSelected,
    #[error("slot {0} is not available")]
    SlotUnavailable(String),
    #[error("booking failed: {0}")]
    Failed(String),
    #[error("booked, but refreshing programs failed: {0}")]
    Refresh(String),
}

/// Open (unbooked) slots of a program.
pub fn available_slots(program: &MentorshipProgram) -> Vec<&Slot> {
    program.available_slots().collect()
}

#[derive(Clone, Debug)]
pub struct BookingFlow {
    program_id: Option<String>,
    slot_id: Option<String>,
    note: String,
    status: BookingStatus,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            program_id: None,
            slot_id: None,
            note: String::new(),
            status: BookingStatus::Idle,
        }
    }

    pub fn status(&self) -> &BookingStatus {
        &self.status
    }

    pub fn selection(&self) -> Option<(&str, &str)> {
        match (&self.program_id, &self.slot_id) {
            (Some(p), Some(s)) => Some((p.as_str(), s.as_str())),
            _ => None,
        }
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn select(&mut self, program: &MentorshipProgram, slot_id: &str) -> Result<(), BookingError> {
        if self.status == BookingStatus::Confirming {
            return Err(BookingError::Busy);
        }
        let open = program.slot(slot_id).is_some_and(|s| !s.is_booked);
        if !open {
            return Err(BookingError::SlotUnavailable(slot_id.to_string()));
        }
        self.program_id = Some(program.id.clone());
        self.slot_id = Some(slot_id.to_string());
        self.note.clear();
        self.status = BookingStatus::SlotSelected;
        Ok(())
    }

    /// Books the selected slot and returns the mentor's refreshed programs.
    ///
    /// On failure the selection is kept so the call can simply be repeated.
    pub fn confirm<B: BookingBackend>(
        &mut self,
        backend: &B,
        mentor_id: &str,
        now: Instant,
    ) -> Result<Vec<MentorshipProgram>, BookingError> {
        match self.status {
            BookingStatus::SlotSelected | BookingStatus::Error(_) => {}
            BookingStatus::Confirming => return Err(BookingError::Busy),
            BookingStatus::Idle | BookingStatus::Success { .. } => {
                return Err(BookingError::NothingSelected);
            }
        }
        let (program_id, slot_id) = match (self.program_id.clone(), self.slot_id.clone()) {
            (Some(p), Some(s)) => (p, s),
            _ => return Err(BookingError::NothingSelected),
        };

        self.status = BookingStatus::Confirming;
        if let Err(err) = backend.book(&program_id, &slot_id, &self.note) {
            let msg = format!("{:#}", err);
            warn!(program = %program_id, slot = %slot_id, error = %msg, "booking failed");
            self.status = BookingStatus::Error(msg.clone());
            return Err(BookingError::Failed(msg));
        }
        info!(program = %program_id, slot = %slot_id, "slot booked");
        self.status = BookingStatus::Success { at: now };

        backend
            .programs_by_mentor(mentor_id)
            .map_err(|err| BookingError::Refresh(format!("{:#}", err)))
    }

    /// Resets a success older than [`AUTO_DISMISS`]. Returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        let BookingStatus::Success { at } = self.status else {
            return false;
        };
        if now.saturating_duration_since(at) < AUTO_DISMISS {
            return false;
        }
        self.program_id = None;
        self.slot_id = None;
        self.note.clear();
        self.status = BookingStatus::Idle;
        true
    }
}

#[cfg(test)]
#[path = "tests/booking_tests.rs"]
mod tests;
