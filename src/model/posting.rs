use serde::{Deserialize, Serialize};

use super::loose;
use super::{Company, Identified, Ref, RelatedRef};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: Option<Ref<Company>>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub work_mode: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub experience_level: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub short_summary: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub role_rationale: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub company_problem: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub role_impact: Option<String>,

    #[serde(default, deserialize_with = "loose::string_list")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub education: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub responsibilities: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub salary_min: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub salary_max: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub conversion_possible: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub perks: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub min_course_completion: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub internship_experience_required: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub status: Option<String>,

    #[serde(default)]
    pub recommended_courses: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_internships: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_mentors: Vec<RelatedRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Identified for Job {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: Option<Ref<Company>>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub internship_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub work_mode: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub stipend: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub application_deadline: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub experience_level: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub short_summary: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub role_rationale: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub company_problem: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub role_impact: Option<String>,

    #[serde(default, deserialize_with = "loose::string_list")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub responsibilities: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub salary_min: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub salary_max: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub conversion_possible: Option<String>,
    #[serde(default, deserialize_with = "loose::string_list")]
    pub perks: Vec<String>,

    #[serde(default, deserialize_with = "loose::opt_string")]
    pub min_course_completion: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub internship_experience_required: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub recommended_courses: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_jobs: Vec<RelatedRef>,
    #[serde(default)]
    pub recommended_mentors: Vec<RelatedRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Identified for Internship {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
