use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use super::{ArrayEncoding, Attachment, ErrorMap, FieldKind, FieldSpec, FormState, Payload, StepDef};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Job,
    Internship,
    Course,
    Mentor,
    Company,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Job,
        EntityKind::Internship,
        EntityKind::Course,
        EntityKind::Mentor,
        EntityKind::Company,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Job => "job",
            EntityKind::Internship => "internship",
            EntityKind::Course => "course",
            EntityKind::Mentor => "mentor",
            EntityKind::Company => "company",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unknown wizard '{}' (expected job | internship | course | mentor | company)", s))
    }
}

/// Everything that distinguishes one wizard from another.
#[derive(Clone, Debug)]
pub struct Blueprint {
    pub entity: EntityKind,
    pub title: &'static str,
    pub steps: Vec<StepDef>,
    pub defaults: FormState,
    /// Recomputes derived fields; runs after every mutation.
    pub derive: Option<fn(&mut FormState)>,
}

impl Blueprint {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.key == key)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The defaults with every declared field present.
    pub fn initial_state(&self) -> FormState {
        let mut state = self.defaults.clone();
        self.fill_missing(&mut state);
        if let Some(derive) = self.derive {
            derive(&mut state);
        }
        state
    }

    pub(crate) fn fill_missing(&self, state: &mut FormState) {
        for field in self.fields() {
            if state.value(field.key).is_none() {
                state.insert(field.key, field.kind.default_value());
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("{} field(s) need attention: {}", .0.len(), first_message(.0))]
    Invalid(ErrorMap),
    #[error("already on the final step; submit instead")]
    AlreadyFinal,
    #[error("submit is only available on the final step")]
    NotFinalStep,
    #[error("a submit is already in flight")]
    SubmitInFlight,
    #[error("cannot jump ahead to step {0}; use next")]
    StepOutOfReach(usize),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{key}' accepts at most {max} selections")]
    LimitReached { key: String, max: usize },
    #[error("'{key}': {reason}")]
    BadValue { key: String, reason: String },
    #[error("submit failed: {0:#}")]
    Remote(anyhow::Error),
}

fn first_message(errors: &ErrorMap) -> String {
    errors
        .iter()
        .next()
        .map(|(k, v)| format!("{}: {}", k, v))
        .unwrap_or_default()
}

/// Backend a finished wizard is written to.
pub trait SubmitTarget {
    type Record;

    fn create(&self, payload: &Payload) -> anyhow::Result<Self::Record>;
    fn update(&self, id: &str, payload: &Payload) -> anyhow::Result<Self::Record>;
}

#[derive(Clone, Debug)]
pub struct Wizard {
    blueprint: Blueprint,
    state: FormState,
    entity_id: Option<String>,
    reached: usize,
    arrays: ArrayEncoding,
}

impl Wizard {
    pub fn new(blueprint: Blueprint) -> Self {
        let state = blueprint.initial_state();
        Self {
            blueprint,
            state,
            entity_id: None,
            reached: 0,
            arrays: ArrayEncoding::default(),
        }
    }

    /// Edit mode: the state comes from a hydrated server record.
    pub fn editing(blueprint: Blueprint, id: impl Into<String>, mut state: FormState) -> Self {
        blueprint.fill_missing(&mut state);
        if let Some(derive) = blueprint.derive {
            derive(&mut state);
        }
        state.step = 0;
        state.errors.clear();
        state.submitting = false;
        Self {
            blueprint,
            state,
            entity_id: Some(id.into()),
            reached: 0,
            arrays: ArrayEncoding::default(),
        }
    }

    pub fn with_encoding(mut self, arrays: ArrayEncoding) -> Self {
        self.arrays = arrays;
        self
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn step(&self) -> usize {
        self.state.step
    }

    pub fn current(&self) -> &StepDef {
        &self.blueprint.steps[self.state.step]
    }

    pub fn is_final(&self) -> bool {
        self.state.step >= self.blueprint.last_step()
    }

    /// Furthest step reached so far.
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Validates the active step and moves one step forward.
    pub fn advance(&mut self) -> Result<usize, WizardError> {
        if self.is_final() {
            return Err(WizardError::AlreadyFinal);
        }
        let errors = self.current().validate(&self.state);
        if !errors.is_empty() {
            debug!(
                wizard = %self.blueprint.entity,
                step = self.state.step,
                invalid = errors.len(),
                "step rejected"
            );
            self.state.errors = errors.clone();
            return Err(WizardError::Invalid(errors));
        }
        self.state.errors.clear();
        self.state.step += 1;
        self.reached = self.reached.max(self.state.step);
        debug!(wizard = %self.blueprint.entity, step = self.state.step, "step advanced");
        Ok(self.state.step)
    }

    pub fn back(&mut self) -> usize {
        self.state.step = self.state.step.saturating_sub(1);
        self.state.errors.clear();
        self.state.step
    }

    /// Moves back to an earlier step. Forward moves go through `advance`.
    pub fn jump_to(&mut self, step: usize) -> Result<(), WizardError> {
        if step >= self.state.step {
            return Err(WizardError::StepOutOfReach(step));
        }
        self.state.step = step;
        self.state.errors.clear();
        Ok(())
    }

    fn spec(&self, key: &str) -> Result<FieldSpec, WizardError> {
        self.blueprint
            .field(key)
            .copied()
            .ok_or_else(|| WizardError::UnknownField(key.to_string()))
    }

    /// Sets a field from its textual form. Lists are comma separated.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), WizardError> {
        let spec = self.spec(key)?;
        match spec.kind {
            FieldKind::Text
            | FieldKind::TextArea
            | FieldKind::Select(_)
            | FieldKind::Radio(_)
            | FieldKind::Lookup(_) => self.state.set_text(key, raw),
            FieldKind::MultiSelect { .. } | FieldKind::CheckboxGroup(_) | FieldKind::ItemList => {
                let items: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect();
                if let Some(max) = spec.max_items() {
                    if items.len() > max {
                        return Err(WizardError::LimitReached {
                            key: key.to_string(),
                            max,
                        });
                    }
                }
                self.state.set_list(key, items);
            }
            FieldKind::Checkbox => {
                let flag = parse_flag(raw).ok_or_else(|| WizardError::BadValue {
                    key: key.to_string(),
                    reason: format!("expected true or false, got '{}'", raw),
                })?;
                self.state.set_flag(key, flag);
            }
            FieldKind::File => {
                return Err(WizardError::BadValue {
                    key: key.to_string(),
                    reason: "file fields take an attachment".to_string(),
                });
            }
            FieldKind::Curriculum => {
                return Err(WizardError::BadValue {
                    key: key.to_string(),
                    reason: "edit the curriculum section by section".to_string(),
                });
            }
        }
        self.rederive();
        Ok(())
    }

    /// Flips one option of a list field; returns whether it is now selected.
    pub fn toggle(&mut self, key: &str, value: &str) -> Result<bool, WizardError> {
        let spec = self.spec(key)?;
        if !spec.kind.is_list() {
            return Err(WizardError::BadValue {
                key: key.to_string(),
                reason: "not a multi-choice field".to_string(),
            });
        }
        let current = self.state.list(key);
        let adding = !current.iter().any(|v| v == value);
        if let Some(max) = spec.max_items() {
            if adding && current.len() >= max {
                return Err(WizardError::LimitReached {
                    key: key.to_string(),
                    max,
                });
            }
        }
        let selected = self.state.toggle(key, value);
        self.rederive();
        Ok(selected)
    }

    pub fn attach(&mut self, key: &str, file: Attachment) -> Result<(), WizardError> {
        let spec = self.spec(key)?;
        if !matches!(spec.kind, FieldKind::File) {
            return Err(WizardError::BadValue {
                key: key.to_string(),
                reason: "not a file field".to_string(),
            });
        }
        self.state.attach(key, file);
        self.rederive();
        Ok(())
    }

    /// Arbitrary state edit (curriculum, outcome lists); derived fields are refreshed after.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let out = f(&mut self.state);
        self.rederive();
        out
    }

    fn rederive(&mut self) {
        if let Some(derive) = self.blueprint.derive {
            derive(&mut self.state);
        }
    }

    pub fn payload(&self) -> anyhow::Result<Payload> {
        Payload::from_state(&self.blueprint.steps, &self.state, self.arrays)
    }

    /// Creates or updates the record. On failure the form is left as it was so the user can retry.
    pub fn submit<T: SubmitTarget>(
        &mut self,
        target: &T,
        on_success: impl FnOnce(&T::Record),
    ) -> Result<T::Record, WizardError> {
        if !self.is_final() {
            return Err(WizardError::NotFinalStep);
        }
        if self.state.submitting {
            return Err(WizardError::SubmitInFlight);
        }
        let errors = self.current().validate(&self.state);
        if !errors.is_empty() {
            self.state.errors = errors.clone();
            return Err(WizardError::Invalid(errors));
        }
        self.state.errors.clear();
        self.state.submitting = true;

        let result = self.payload().and_then(|payload| match self.entity_id.as_deref() {
            Some(id) => target.update(id, &payload),
            None => target.create(&payload),
        });
        self.state.submitting = false;

        match result {
            Ok(record) => {
                debug!(wizard = %self.blueprint.entity, edit = self.entity_id.is_some(), "submitted");
                on_success(&record);
                Ok(record)
            }
            Err(err) => {
                warn!(wizard = %self.blueprint.entity, error = %format!("{:#}", err), "submit failed");
                Err(WizardError::Remote(err))
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" | "" => Some(false),
        _ => None,
    }
}
