use crate::autotag::derive_expertise_tags;
use crate::form::{Blueprint, EntityKind, FieldKind, FieldSpec, FormState, StepDef};

use super::options::*;

fn is_paid(state: &FormState) -> bool {
    state.text("pricingType") == "Paid"
}

const fn multi(options: &'static [&'static str]) -> FieldKind {
    FieldKind::MultiSelect { options, max: None }
}

pub fn mentor() -> Blueprint {
    let basics = StepDef::new(
        "Basics",
        vec![
            FieldSpec::text("fullName", "Full name").required("Full name is required"),
            FieldSpec::file("profilePhoto", "Profile photo"),
            FieldSpec::file("coverImage", "Cover image"),
            FieldSpec::text("headline", "Headline").required("Headline is required"),
            FieldSpec::text("yearsOfExperience", "Years of experience"),
            FieldSpec::text("currentRole", "Current role"),
            FieldSpec::text("company", "Company"),
            FieldSpec::text("linkedinUrl", "LinkedIn URL"),
            FieldSpec::area("bio", "Bio"),
            FieldSpec::new("expertiseTags", "Expertise tags (auto)", FieldKind::ItemList),
        ],
    );

    let expertise = StepDef::new(
        "Expertise",
        vec![
            FieldSpec::new("primaryDomain", "Primary domain", FieldKind::Select(MENTOR_DOMAINS))
                .required("Primary domain is required"),
            FieldSpec::new(
                "subSkills",
                "Sub-skills",
                FieldKind::MultiSelect {
                    options: MENTOR_SUB_SKILLS,
                    max: Some(MAX_SUB_SKILLS),
                },
            )
            .required("Select at least one sub-skill"),
        ],
    );

    let offering = StepDef::new(
        "Offering",
        vec![
            FieldSpec::new("mentorshipTypes", "Mentorship types", multi(MENTORSHIP_TYPES))
                .required("Select at least one mentorship type"),
            FieldSpec::new("mentorshipFormats", "Formats", multi(MENTORSHIP_FORMATS)),
            FieldSpec::new("durationOptions", "Durations", multi(MENTORSHIP_DURATIONS)),
            FieldSpec::new("pricingType", "Pricing", FieldKind::Radio(PRICE_TYPES)),
            FieldSpec::text("pricingAmount", "Price")
                .visible_when(is_paid)
                .required_when(is_paid, "Price is required for paid mentorship"),
            FieldSpec::checkbox("revenueShare", "Revenue share"),
        ],
    );

    let readiness = StepDef::new(
        "Readiness",
        vec![
            FieldSpec::new("minSkills", "Minimum skills", multi(MENTOR_SUB_SKILLS)),
            FieldSpec::new(
                "courseCompletion",
                "Course completion",
                FieldKind::Radio(COURSE_COMPLETION),
            ),
            FieldSpec::new(
                "internshipExperience",
                "Internship experience",
                FieldKind::Radio(INTERNSHIP_HISTORY),
            ),
        ],
    );

    let availability = StepDef::new(
        "Availability",
        vec![
            FieldSpec::text("weeklySlots", "Weekly slots"),
            FieldSpec::text("maxMentees", "Max mentees"),
            FieldSpec::checkbox("isPaused", "Pause new bookings"),
        ],
    );

    let review = StepDef::new("Review", Vec::new());

    let mut defaults = FormState::new();
    defaults.set_text("pricingType", "Free");

    Blueprint {
        entity: EntityKind::Mentor,
        title: "Mentor",
        steps: vec![basics, expertise, offering, readiness, availability, review],
        defaults,
        derive: Some(derive_expertise_tags),
    }
}
