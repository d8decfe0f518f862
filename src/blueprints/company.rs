use crate::form::{Blueprint, EntityKind, FieldSpec, FormState, StepDef};

pub fn company() -> Blueprint {
    let details = StepDef::new(
        "Company",
        vec![
            FieldSpec::text("company_name", "Company name").required("Company name is required"),
            FieldSpec::text("industry", "Industry").omit_blank(),
            FieldSpec::text("website", "Website").omit_blank(),
            FieldSpec::checkbox("verified", "Verified"),
            FieldSpec::file("logo", "Logo"),
            FieldSpec::file("coverImage", "Cover image"),
        ],
    );
    Blueprint {
        entity: EntityKind::Company,
        title: "Company",
        steps: vec![details],
        defaults: FormState::new(),
        derive: None,
    }
}
