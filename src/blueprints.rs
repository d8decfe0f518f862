//! Declarations of the five create/edit wizards.

mod company;
mod course;
mod mentor;
pub mod options;
mod posting;

use crate::form::{Blueprint, EntityKind};

pub use self::company::company;
pub use self::course::{course, lessons_titled};
pub use self::mentor::mentor;
pub use self::posting::{internship, job, needs_location};

pub fn blueprint(kind: EntityKind) -> Blueprint {
    match kind {
        EntityKind::Job => job(),
        EntityKind::Internship => internship(),
        EntityKind::Course => course(),
        EntityKind::Mentor => mentor(),
        EntityKind::Company => company(),
    }
}

#[cfg(test)]
#[path = "tests/blueprints_tests.rs"]
mod tests;
