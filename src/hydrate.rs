//! Edit mode: turns a fetched server record back into wizard state.
//!
//! Every declared field ends up present. Reference fields collapse to their id,
//! numbers become text, and linking lists start empty because the server returns
//! them populated rather than as the ids the form submits.

use anyhow::{Context, Result};
use tracing::debug;

use crate::blueprints::{self, options};
use crate::form::{EntityKind, FormState, LessonDraft, SectionDraft, Wizard, local_id};
use crate::model::{Company, Course, Internship, Job, Mentor, Section};
use crate::remote::{EntityService, RemoteClient};

pub trait Hydrate {
    const KIND: EntityKind;

    fn hydrate(&self) -> FormState;
}

fn put(state: &mut FormState, key: &str, value: &Option<String>) {
    state.set_text(key, value.as_deref().unwrap_or(""));
}

/// Keeps the blueprint default when the record leaves the field empty.
fn put_or_keep(state: &mut FormState, key: &str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
        state.set_text(key, v);
    }
}

fn put_list_or_keep(state: &mut FormState, key: &str, value: &[String]) {
    if !value.is_empty() {
        state.set_list(key, value.to_vec());
    }
}

/// Numeric server values as text; zero and absent both become "".
fn number_text(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        None | Some("") => String::new(),
        Some(v) => match v.parse::<f64>() {
            Ok(n) if n == 0.0 => String::new(),
            _ => v.to_string(),
        },
    }
}

fn reset_links(state: &mut FormState, keys: &[&str]) {
    for key in keys {
        state.set_list(key, Vec::new());
    }
}

pub fn hydrate_job(job: &Job) -> FormState {
    let mut s = blueprints::job().initial_state();
    s.set_text("title", job.title.as_str());
    s.set_text(
        "company",
        job.company.as_ref().and_then(|c| c.id()).unwrap_or(""),
    );
    put(&mut s, "jobType", &job.job_type);
    put(&mut s, "workMode", &job.work_mode);
    put(&mut s, "location", &job.location);
    s.set_list("experienceLevel", job.experience_level.clone());
    put(&mut s, "shortSummary", &job.short_summary);
    put(&mut s, "roleRationale", &job.role_rationale);
    put(&mut s, "companyProblem", &job.company_problem);
    put(&mut s, "roleImpact", &job.role_impact);
    s.set_list("requiredSkills", job.required_skills.clone());
    s.set_list("niceToHaveSkills", job.nice_to_have_skills.clone());
    put(&mut s, "education", &job.education);
    put(&mut s, "responsibilities", &job.responsibilities);
    put(&mut s, "salaryMin", &job.salary_min);
    put(&mut s, "salaryMax", &job.salary_max);
    put_or_keep(&mut s, "conversionPossible", &job.conversion_possible);
    s.set_list("perks", job.perks.clone());
    put(&mut s, "minCourseCompletion", &job.min_course_completion);
    put_or_keep(
        &mut s,
        "internshipExperienceRequired",
        &job.internship_experience_required,
    );
    put(&mut s, "deadline", &job.deadline);
    reset_links(
        &mut s,
        &["recommendedCourses", "linkedInternships", "linkedMentorships"],
    );
    s
}

pub fn hydrate_internship(internship: &Internship) -> FormState {
    let i = internship;
    let mut s = blueprints::internship().initial_state();
    if !i.title.trim().is_empty() {
        s.set_text("title", i.title.as_str());
    }
    s.set_text(
        "company",
        i.company.as_ref().and_then(|c| c.id()).unwrap_or(""),
    );
    let kind = i
        .internship_type
        .as_deref()
        .or(i.job_type.as_deref())
        .filter(|k| options::INTERNSHIP_TYPES.contains(k))
        .unwrap_or("Internship");
    s.set_text("jobType", kind);
    put(&mut s, "workMode", &i.work_mode);
    put(&mut s, "location", &i.location);
    put_list_or_keep(&mut s, "experienceLevel", &i.experience_level);
    put_or_keep(&mut s, "shortSummary", &i.short_summary);
    put(&mut s, "roleRationale", &i.role_rationale);
    put(&mut s, "companyProblem", &i.company_problem);
    put(&mut s, "roleImpact", &i.role_impact);
    put_list_or_keep(&mut s, "requiredSkills", &i.required_skills);
    put_list_or_keep(&mut s, "niceToHaveSkills", &i.nice_to_have_skills);
    put(&mut s, "education", &i.education);
    put(&mut s, "responsibilities", &i.responsibilities);
    put(&mut s, "salaryMin", &i.salary_min);
    put(&mut s, "salaryMax", &i.salary_max);
    put_or_keep(&mut s, "conversionPossible", &i.conversion_possible);
    s.set_list("perks", i.perks.clone());
    put(&mut s, "minCourseCompletion", &i.min_course_completion);
    put_or_keep(
        &mut s,
        "internshipExperienceRequired",
        &i.internship_experience_required,
    );
    let deadline = i.deadline.clone().or_else(|| i.application_deadline.clone());
    put(&mut s, "deadline", &deadline);
    reset_links(&mut s, &["recommendedCourses", "linkedMentorships"]);
    s
}

fn section_draft(section: &Section) -> SectionDraft {
    SectionDraft {
        id: section.id.clone().unwrap_or_else(local_id),
        title: section.title.clone(),
        duration: String::new(),
        lessons: section
            .lessons
            .iter()
            .map(|l| {
                let mut draft = LessonDraft::new(l.id.clone().unwrap_or_else(local_id));
                draft.title = l.title.clone();
                if let Some(kind) = l.kind.as_deref().filter(|k| options::LESSON_TYPES.contains(k)) {
                    draft.kind = kind.to_string();
                }
                draft.duration = l
                    .duration
                    .as_deref()
                    .and_then(|d| d.trim().parse::<f64>().ok())
                    .map(|d| d.max(0.0) as u32)
                    .unwrap_or(0);
                draft.is_preview_free = l.is_preview_free;
                draft.video_url = l.video_url.clone().unwrap_or_default();
                draft.supporting_material_url = l.supporting_material_url.clone().unwrap_or_default();
                draft.supporting_material_type = l.supporting_material_type.clone().unwrap_or_default();
                draft.description = l.description.clone().unwrap_or_default();
                draft
            })
            .collect(),
    }
}

/// Maps a known choice or falls back to `default`.
fn choice(value: &Option<String>, allowed: &[&str], default: &str) -> String {
    value
        .as_deref()
        .filter(|v| allowed.contains(v))
        .unwrap_or(default)
        .to_string()
}

pub fn hydrate_course(course: &Course) -> FormState {
    let c = course;
    let mut s = blueprints::course().initial_state();
    s.set_text("title", c.title.as_str());
    put(&mut s, "hook", &c.hook);
    put(&mut s, "category", &c.category);
    s.set_list("skills", c.skills.clone());
    put(&mut s, "courseType", &c.course_type);
    s.set_list("outcomes", c.outcomes.clone());
    s.set_list("opportunities", c.opportunities.clone());
    s.set_sections(c.sections.iter().map(section_draft).collect());
    put(&mut s, "instructorName", &c.instructor_name);
    put(&mut s, "instructorBio", &c.instructor_bio);
    put(&mut s, "instructorLinkedin", &c.instructor_linkedin);
    put(&mut s, "instructorTrustLine", &c.instructor_trust_line);
    s.set_list("instructorCompanyLogos", c.instructor_company_logos.clone());

    s.set_text("priceType", choice(&c.price_type, options::PRICE_TYPES, "Free"));
    s.set_text("priceAmount", number_text(&c.price_amount));
    s.set_text("accessType", choice(&c.access_type, options::ACCESS_TYPES, "Lifetime"));
    s.set_text("accessDuration", number_text(&c.access_duration));
    put(&mut s, "refundPolicy", &c.refund_policy);
    s.set_text("earlyBirdPrice", number_text(&c.early_bird_price));
    s.set_flag("hasStudentDiscount", c.has_student_discount);
    s.set_flag("hasAssignment", c.has_assignment);
    s.set_flag("hasQuiz", c.has_quiz);
    s.set_flag("hasProject", c.has_project);
    s.set_flag("hasCertificate", c.has_certificate);
    s.set_text(
        "completionLogic",
        choice(&c.completion_logic, options::COMPLETION_LOGIC, "Watch %"),
    );
    s.set_text("status", choice(&c.status, options::PUBLISH_STATUS, "Draft"));
    s.set_text("visibility", choice(&c.visibility, options::VISIBILITY, "Public"));
    s.set_flag("isFeatured", c.is_featured);
    s.set_text("maxStudents", number_text(&c.max_students));
    s
}

pub fn hydrate_mentor(mentor: &Mentor) -> FormState {
    let m = mentor;
    let mut s = blueprints::mentor().initial_state();
    s.set_text("fullName", m.full_name.as_str());
    put(&mut s, "headline", &m.headline);
    put(&mut s, "yearsOfExperience", &m.years_of_experience);
    put(&mut s, "currentRole", &m.current_role);
    put(&mut s, "company", &m.company);
    put(&mut s, "linkedinUrl", &m.linkedin_url);
    put(&mut s, "bio", &m.bio);
    s.set_list("expertiseTags", m.expertise_tags.clone());
    put(&mut s, "primaryDomain", &m.primary_domain);
    s.set_list("subSkills", m.sub_skills.clone());
    s.set_list("mentorshipTypes", m.mentorship_types.clone());
    s.set_list("mentorshipFormats", m.mentorship_formats.clone());
    s.set_list("durationOptions", m.duration_options.clone());
    s.set_text("pricingType", choice(&m.pricing_type, options::PRICE_TYPES, "Free"));
    s.set_text("pricingAmount", number_text(&m.pricing_amount));
    s.set_flag("revenueShare", m.revenue_share);
    s.set_list("minSkills", m.min_skills.clone());
    put(&mut s, "courseCompletion", &m.course_completion);
    put(&mut s, "internshipExperience", &m.internship_experience);
    s.set_text("weeklySlots", number_text(&m.weekly_slots));
    s.set_text("maxMentees", number_text(&m.max_mentees));
    s.set_flag("isPaused", m.is_paused);
    s
}

pub fn hydrate_company(company: &Company) -> FormState {
    let mut s = blueprints::company().initial_state();
    s.set_text("company_name", company.company_name.as_str());
    put(&mut s, "industry", &company.industry);
    put(&mut s, "website", &company.website);
    s.set_flag("verified", company.verified);
    s
}

impl Hydrate for Job {
    const KIND: EntityKind = EntityKind::Job;

    fn hydrate(&self) -> FormState {
        hydrate_job(self)
    }
}

impl Hydrate for Internship {
    const KIND: EntityKind = EntityKind::Internship;

    fn hydrate(&self) -> FormState {
        hydrate_internship(self)
    }
}

impl Hydrate for Course {
    const KIND: EntityKind = EntityKind::Course;

    fn hydrate(&self) -> FormState {
        hydrate_course(self)
    }
}

impl Hydrate for Mentor {
    const KIND: EntityKind = EntityKind::Mentor;

    fn hydrate(&self) -> FormState {
        hydrate_mentor(self)
    }
}

impl Hydrate for Company {
    const KIND: EntityKind = EntityKind::Company;

    fn hydrate(&self) -> FormState {
        hydrate_company(self)
    }
}

pub struct Hydrator;

impl Hydrator {
    /// Fetches `id` and opens its wizard in edit mode.
    pub fn load<S>(service: &S, id: &str) -> Result<Wizard>
    where
        S: EntityService,
        S::Record: Hydrate,
    {
        let kind = <S::Record as Hydrate>::KIND;
        let record = service
            .get(id)
            .with_context(|| format!("{} {} not found", kind, id))?;
        debug!(wizard = %kind, id, "hydrated for edit");
        Ok(Wizard::editing(
            blueprints::blueprint(kind),
            id,
            record.hydrate(),
        ))
    }

    /// `load` against the client's resource for `kind`.
    pub fn load_kind(client: &RemoteClient, kind: EntityKind, id: &str) -> Result<Wizard> {
        match kind {
            EntityKind::Job => Self::load(&client.jobs(), id),
            EntityKind::Internship => Self::load(&client.internships(), id),
            EntityKind::Course => Self::load(&client.courses(), id),
            EntityKind::Mentor => Self::load(&client.mentors(), id),
            EntityKind::Company => Self::load(&client.companies(), id),
        }
    }
}

#[cfg(test)]
#[path = "tests/hydrate_tests.rs"]
mod tests;
