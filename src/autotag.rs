//! Keyword rules that derive a mentor's expertise tags from the free-text profile.

use crate::form::FormState;

pub struct TagRule {
    pub needles: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// Evaluated top to bottom; a rule fires when any needle occurs in the lower-cased text.
pub const RULES: &[TagRule] = &[
    TagRule {
        needles: &["data analyst", "analytics"],
        tags: &["Data Analysis", "SQL"],
    },
    TagRule {
        needles: &["fintech", "finance"],
        tags: &["Finance", "FinTech"],
    },
    TagRule {
        needles: &["senior", "lead"],
        tags: &["Leadership", "Mentoring"],
    },
    TagRule {
        needles: &["python"],
        tags: &["Python"],
    },
    TagRule {
        needles: &["excel"],
        tags: &["Excel"],
    },
    TagRule {
        needles: &["product"],
        tags: &["Product Management"],
    },
    TagRule {
        needles: &["marketing"],
        tags: &["Marketing"],
    },
];

/// Tags in order of first production, without duplicates.
pub fn tags_for(headline: &str, bio: &str) -> Vec<String> {
    let text = format!("{} {}", headline, bio).to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for rule in RULES {
        if !rule.needles.iter().any(|n| text.contains(n)) {
            continue;
        }
        for tag in rule.tags {
            if !out.iter().any(|t| t == tag) {
                out.push((*tag).to_string());
            }
        }
    }
    out
}

fn same_set(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().all(|t| b.contains(t))
}

/// Derivation hook of the mentor wizard.
pub fn derive_expertise_tags(state: &mut FormState) {
    let tags = tags_for(state.text("headline"), state.text("bio"));
    if !same_set(&tags, state.list("expertiseTags")) {
        state.set_list("expertiseTags", tags);
    }
}

#[cfg(test)]
#[path = "tests/autotag_tests.rs"]
mod tests;
