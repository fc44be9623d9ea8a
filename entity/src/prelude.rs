pub use super::attendance::Entity as Attendance;
pub use super::batch::Entity as Batch;
pub use super::interview::Entity as Interview;
pub use super::mark::Entity as Mark;
pub use super::resume_review::Entity as ResumeReview;
pub use super::schedule::Entity as Schedule;
pub use super::student::Entity as Student;
