//! Multi-step form engine shared by every create/edit wizard.

mod field;
mod payload;
mod state;
mod step;
mod wizard;

pub use self::field::{FieldKind, FieldSpec, Lookup, Predicate, Rule};
pub use self::payload::{ArrayEncoding, Attachment, Part, Payload};
pub use self::state::{ErrorMap, FieldValue, FormState, LessonDraft, SectionDraft, local_id};
pub use self::step::{StepCheck, StepDef};
pub use self::wizard::{Blueprint, EntityKind, SubmitTarget, Wizard, WizardError};

/// State key holding the course curriculum.
pub const SECTIONS_KEY: &str = "sections";

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
