use crate::form::{Blueprint, EntityKind, FieldKind, FieldSpec, FormState, Lookup, StepDef};

use super::options::*;

/// Location is only asked for (and required) for on-site presence.
pub fn needs_location(state: &FormState) -> bool {
    matches!(state.text("workMode"), "Onsite" | "Hybrid")
}

struct PostingVocab {
    noun: &'static str,
    types: &'static [&'static str],
    experience: &'static [&'static str],
    skills: &'static [&'static str],
    education: FieldKind,
    links: &'static [(&'static str, &'static str)],
}

fn steps(v: &PostingVocab) -> Vec<StepDef> {
    let basics = StepDef::new(
        "Basics",
        vec![
            FieldSpec::text("title", "Title").required("Title is required"),
            FieldSpec::new("company", "Company", FieldKind::Lookup(Lookup::Companies))
                .required("Company is required"),
            FieldSpec::file("coverImage", "Cover image"),
            FieldSpec::new("jobType", v.noun, FieldKind::Radio(v.types))
                .required("Type is required"),
            FieldSpec::new("workMode", "Work mode", FieldKind::Radio(WORK_MODES))
                .required("Work mode is required"),
            FieldSpec::text("location", "Location")
                .visible_when(needs_location)
                .required_when(needs_location, "Location is required for Onsite/Hybrid roles"),
            FieldSpec::new(
                "experienceLevel",
                "Experience level",
                FieldKind::CheckboxGroup(v.experience),
            )
            .required("Select at least one experience level"),
        ],
    );

    let overview = StepDef::new(
        "Overview",
        vec![
            FieldSpec::area("shortSummary", "Short summary").required("Short summary is required"),
            FieldSpec::area("roleRationale", "Why this role exists"),
            FieldSpec::area("companyProblem", "What problem the company is solving"),
            FieldSpec::area("roleImpact", "Why this role matters"),
        ],
    );

    let skills = StepDef::new(
        "Skills",
        vec![
            FieldSpec::new(
                "requiredSkills",
                "Required skills",
                FieldKind::MultiSelect {
                    options: v.skills,
                    max: None,
                },
            )
            .required("At least one required skill is needed"),
            FieldSpec::new(
                "niceToHaveSkills",
                "Nice-to-have skills",
                FieldKind::MultiSelect {
                    options: v.skills,
                    max: None,
                },
            ),
            FieldSpec::new("education", "Education", v.education),
        ],
    );

    let perks = StepDef::new(
        "Responsibilities & Perks",
        vec![
            FieldSpec::area("responsibilities", "Key responsibilities")
                .required("Responsibilities are required"),
            FieldSpec::text("salaryMin", "Min salary"),
            FieldSpec::text("salaryMax", "Max salary"),
            FieldSpec::new(
                "conversionPossible",
                "Conversion possible",
                FieldKind::Radio(YES_NO),
            ),
            FieldSpec::new("perks", "Perks", FieldKind::CheckboxGroup(PERKS)),
        ],
    );

    let mut linking_fields = vec![
        FieldSpec::text("minCourseCompletion", "Minimum course completion"),
        FieldSpec::new(
            "internshipExperienceRequired",
            "Previous internship experience required",
            FieldKind::Radio(YES_NO),
        ),
    ];
    for &(key, label) in v.links {
        linking_fields.push(FieldSpec::new(key, label, FieldKind::ItemList));
    }
    linking_fields.push(FieldSpec::text("deadline", "Application deadline").required("Application deadline is required"));
    let linking = StepDef::new("Linking", linking_fields);

    vec![basics, overview, skills, perks, linking]
}

pub fn job() -> Blueprint {
    let vocab = PostingVocab {
        noun: "Job type",
        types: JOB_TYPES,
        experience: JOB_EXPERIENCE,
        skills: JOB_SKILLS,
        education: FieldKind::Text,
        links: &[
            ("recommendedCourses", "Recommended courses"),
            ("linkedInternships", "Linked internships"),
            ("linkedMentorships", "Linked mentorships"),
        ],
    };
    let mut defaults = FormState::new();
    defaults.set_text("conversionPossible", "No");
    defaults.set_text("internshipExperienceRequired", "No");
    Blueprint {
        entity: EntityKind::Job,
        title: "Job",
        steps: steps(&vocab),
        defaults,
        derive: None,
    }
}

pub fn internship() -> Blueprint {
    let vocab = PostingVocab {
        noun: "Internship type",
        types: INTERNSHIP_TYPES,
        experience: INTERNSHIP_EXPERIENCE,
        skills: INTERNSHIP_SKILLS,
        education: FieldKind::Radio(EDUCATION),
        links: &[
            ("recommendedCourses", "Recommended courses"),
            ("linkedMentorships", "Recommended mentorships"),
        ],
    };
    Blueprint {
        entity: EntityKind::Internship,
        title: "Internship",
        steps: steps(&vocab),
        defaults: internship_defaults(),
        derive: None,
    }
}

pub(crate) fn internship_defaults() -> FormState {
    let mut d = FormState::new();
    d.set_text("title", "Junior Data Science Intern");
    d.set_text("jobType", "Internship");
    d.set_list("experienceLevel", vec!["Fresher".to_string()]);
    d.set_text(
        "shortSummary",
        "Entry-level internship focused on learning Excel, data cleaning, and reporting. Ideal for students.",
    );
    d.set_list(
        "requiredSkills",
        ["Excel", "Basic SQL", "Communication"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    d.set_list(
        "niceToHaveSkills",
        ["Power BI", "Python"].iter().map(|s| s.to_string()).collect(),
    );
    d.set_text("conversionPossible", "Yes");
    d.set_text("internshipExperienceRequired", "No");
    d
}
