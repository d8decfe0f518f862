use serde::{Deserialize, Serialize};

use super::loose;
use super::{Identified, Ref, Related, RelatedRef};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "user_id", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub full_name: String,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub profile_photo: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub years_of_experience: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub current_role: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub expertise_tags: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub primary_domain: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub sub_skills: Vec<String>,

    #[serde(default, deserialize_with = "loose::string_list")]
    pub mentorship_types: Vec<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub mentorship_formats: Vec<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub duration_options: Vec<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub pricing_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub pricing_amount: Option<String>,
    #[serde(default, deserialize_with = "loose::flag")]
    pub revenue_share: bool,

    #[serde(default, deserialize_with = "loose::string_list")]
    pub min_skills: Vec<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub course_completion: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub internship_experience: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub weekly_slots: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub max_mentees: Option<String>,
    #[serde(default, deserialize_with = "loose::flag")]
    pub is_paused: bool,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub hourly_rate: Option<String>,
    #[serde(default, deserialize_with = "loose::flag")]
    pub is_verified: bool,

    #[serde(default)]
    pub recommended_courses: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_jobs: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_internships: Vec<RelatedRef>,
}

impl Identified for Mentor {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorSummary {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

impl Identified for MentorSummary {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipProgram {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub mentor: Option<Ref<MentorSummary>>,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub program_image: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    /// Session length in minutes.
    #[serde(default)]
    pub duration: u32,

    #[serde(default)]
    pub available_slots: Vec<Slot>,
}

impl MentorshipProgram {
    /// Slots still open for booking.
    pub fn available_slots(&self) -> impl Iterator<Item = &Slot> {
        self.available_slots.iter().filter(|s| !s.is_booked)
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.available_slots.iter().find(|s| s.id == slot_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub is_booked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSlot {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub mentor: Option<Ref<MentorSummary>>,
    #[serde(default)]
    pub mentorship: Option<Ref<Related>>,

    #[serde(default)]
    pub slot_date: String,
    #[serde(default)]
    pub slot_time: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
}
