use super::{ErrorMap, FieldSpec, FormState};

/// Extra validation that does not fit a per-field rule.
pub type StepCheck = fn(&FormState, &mut ErrorMap);

#[derive(Clone, Debug)]
pub struct StepDef {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    pub check: Option<StepCheck>,
}

impl StepDef {
    pub fn new(title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            title,
            fields,
            check: None,
        }
    }

    pub fn with_check(mut self, check: StepCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// Messages for every failing field of this step; empty when the step may be left.
    pub fn validate(&self, state: &FormState) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in &self.fields {
            if !field.is_visible(state) {
                continue;
            }
            let Some(msg) = field.rule.applies(state) else {
                continue;
            };
            let blank = match state.value(field.key) {
                Some(v) => v.is_blank(),
                None => field.kind.default_value().is_blank(),
            };
            if blank {
                errors.insert(field.key.to_string(), msg.to_string());
            }
        }
        if let Some(check) = self.check {
            check(state, &mut errors);
        }
        errors
    }

    pub fn visible_fields<'a>(&'a self, state: &'a FormState) -> impl Iterator<Item = &'a FieldSpec> + 'a {
        self.fields.iter().filter(move |f| f.is_visible(state))
    }
}
