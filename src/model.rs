mod application;
mod company;
mod course;
mod loose;
mod mentor;
mod people;
mod posting;
mod refs;

pub use self::application::{Application, ApplicationJob, ApplicationStatus, TimelineEntry};
pub use self::company::Company;
pub use self::course::{Course, Lesson, Section};
pub use self::mentor::{Booking, Mentor, MentorSummary, MentorshipProgram, NewSlot, Slot};
pub use self::people::{DashboardMetrics, Enrollment, User, UserSummary};
pub use self::posting::{Internship, Job};
pub use self::refs::{Identified, Page, Ref, Related, RelatedRef};
