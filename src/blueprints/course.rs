use crate::form::{
    Blueprint, EntityKind, ErrorMap, FieldKind, FieldSpec, FormState, SECTIONS_KEY, StepDef,
};

use super::options::*;

fn is_paid(state: &FormState) -> bool {
    state.text("priceType") == "Paid"
}

fn is_limited(state: &FormState) -> bool {
    state.text("accessType") == "Limited"
}

/// Every lesson of the curriculum needs a title.
pub fn lessons_titled(state: &FormState, errors: &mut ErrorMap) {
    let untitled = state
        .sections()
        .iter()
        .flat_map(|s| s.lessons.iter())
        .any(|l| l.title.trim().is_empty());
    if untitled {
        errors.insert(
            SECTIONS_KEY.to_string(),
            "Please add a title for every lesson.".to_string(),
        );
    }
}

pub fn course() -> Blueprint {
    let basics = StepDef::new(
        "Course Basics",
        vec![
            FieldSpec::text("title", "Course title").required("Title is required"),
            FieldSpec::area("hook", "One-line hook"),
            FieldSpec::new("category", "Category", FieldKind::Select(COURSE_CATEGORIES))
                .required("Category is required"),
            FieldSpec::new(
                "skills",
                "Skills",
                FieldKind::MultiSelect {
                    options: COURSE_SKILLS,
                    max: None,
                },
            ),
            FieldSpec::new("courseType", "Course type", FieldKind::Radio(COURSE_TYPES))
                .required("Course type is required"),
            FieldSpec::new("outcomes", "Outcomes", FieldKind::ItemList),
            FieldSpec::new("opportunities", "Unlocks", FieldKind::CheckboxGroup(OPPORTUNITIES)),
            FieldSpec::file("thumbnail", "Thumbnail"),
            FieldSpec::file("coverImage", "Cover image"),
            FieldSpec::text("instructorName", "Instructor name"),
            FieldSpec::area("instructorBio", "Instructor bio"),
            FieldSpec::text("instructorLinkedin", "Instructor LinkedIn"),
            FieldSpec::text("instructorTrustLine", "Instructor trust line"),
            FieldSpec::new("instructorCompanyLogos", "Instructor company logos", FieldKind::ItemList),
        ],
    );

    let curriculum = StepDef::new(
        "Curriculum",
        vec![FieldSpec::new(SECTIONS_KEY, "Sections", FieldKind::Curriculum)],
    )
    .with_check(lessons_titled);

    let publish = StepDef::new(
        "Pricing & Publish",
        vec![
            FieldSpec::new("priceType", "Price type", FieldKind::Radio(PRICE_TYPES)),
            FieldSpec::text("priceAmount", "Price").visible_when(is_paid),
            FieldSpec::new("accessType", "Access", FieldKind::Radio(ACCESS_TYPES)),
            FieldSpec::text("accessDuration", "Access duration (days)").visible_when(is_limited),
            FieldSpec::area("refundPolicy", "Refund policy"),
            FieldSpec::text("earlyBirdPrice", "Early-bird price").visible_when(is_paid),
            FieldSpec::checkbox("hasStudentDiscount", "Student discount"),
            FieldSpec::checkbox("hasAssignment", "Assignments"),
            FieldSpec::checkbox("hasQuiz", "Quizzes"),
            FieldSpec::checkbox("hasProject", "Project"),
            FieldSpec::checkbox("hasCertificate", "Certificate"),
            FieldSpec::new(
                "completionLogic",
                "Completion logic",
                FieldKind::Select(COMPLETION_LOGIC),
            ),
            FieldSpec::new("status", "Status", FieldKind::Radio(PUBLISH_STATUS)),
            FieldSpec::new("visibility", "Visibility", FieldKind::Radio(VISIBILITY)),
            FieldSpec::checkbox("isFeatured", "Featured"),
            FieldSpec::text("maxStudents", "Max students"),
        ],
    )
    .with_check(lessons_titled);

    Blueprint {
        entity: EntityKind::Course,
        title: "Course",
        steps: vec![basics, curriculum, publish],
        defaults: course_defaults(),
        derive: None,
    }
}

pub(crate) fn course_defaults() -> FormState {
    let mut d = FormState::new();
    d.set_text("priceType", "Free");
    d.set_text("accessType", "Lifetime");
    d.set_text("completionLogic", "Watch %");
    d.set_text("status", "Draft");
    d.set_text("visibility", "Public");
    d
}
