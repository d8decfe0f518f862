use serde::{Deserialize, Serialize};

use super::loose;
use super::{Identified, RelatedRef};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub hook: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub course_type: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub outcomes: Vec<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub opportunities: Vec<String>,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub instructor_name: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub instructor_bio: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub instructor_linkedin: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub instructor_trust_line: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub instructor_company_logos: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub price_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub price_amount: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub access_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub access_duration: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub refund_policy: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub early_bird_price: Option<String>,
    #[serde(default, deserialize_with = "loose::flag")]
    pub has_student_discount: bool,

    #[serde(default, deserialize_with = "loose::flag")]
    pub has_assignment: bool,
    #[serde(default, deserialize_with = "loose::flag")]
    pub has_quiz: bool,
    #[serde(default, deserialize_with = "loose::flag")]
    pub has_project: bool,
    #[serde(default, deserialize_with = "loose::flag")]
    pub has_certificate: bool,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub completion_logic: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub visibility: Option<String>,
    #[serde(default, deserialize_with = "loose::flag")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub max_students: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub recommended_jobs: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_internships: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_mentors: Vec<RelatedRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Identified for Course {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub bunny_path: Option<String>,

    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "type", default, deserialize_with = "loose::opt_string")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub duration: Option<String>,

    #[serde(default, deserialize_with = "loose::flag")]
    pub is_preview_free: bool,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub supporting_material_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub supporting_material_url: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub description: Option<String>,
}
