use super::*;

#[test]
fn rules_fire_on_either_text_case_insensitively() {
    assert_eq!(tags_for("PYTHON developer", ""), ["Python"]);
    assert_eq!(tags_for("", "ten years in Marketing"), ["Marketing"]);
    assert!(tags_for("Designer", "loves typography").is_empty());
}

#[test]
fn tags_keep_rule_order_without_duplicates() {
    let tags = tags_for("Lead product analyst", "analytics and excel, some python");
    assert_eq!(
        tags,
        [
            "Data Analysis",
            "SQL",
            "Leadership",
            "Mentoring",
            "Python",
            "Excel",
            "Product Management"
        ]
    );

    let tags = tags_for("finance lead", "fintech, senior");
    assert_eq!(tags, ["Finance", "FinTech", "Leadership", "Mentoring"]);
}

#[test]
fn derive_replaces_only_when_the_set_changes() {
    let mut state = FormState::new();
    state.set_text("headline", "excel and python");
    state.set_list(
        "expertiseTags",
        vec!["Excel".to_string(), "Python".to_string()],
    );
    derive_expertise_tags(&mut state);
    // same set, different order: left alone
    assert_eq!(state.list("expertiseTags"), ["Excel", "Python"]);

    state.set_text("bio", "marketing");
    derive_expertise_tags(&mut state);
    assert_eq!(state.list("expertiseTags"), ["Python", "Excel", "Marketing"]);
}

#[test]
fn no_keywords_clears_tags() {
    let mut state = FormState::new();
    state.set_list("expertiseTags", vec!["Stale".to_string()]);
    derive_expertise_tags(&mut state);
    assert!(state.list("expertiseTags").is_empty());
}
