pub mod offering;
pub mod request;
pub mod time_slot;

pub use offering::CandidateOffering;
pub use request::{EnrollmentRecord, EnrollmentStatus, PendingRequestRecord, RequestStatus};
pub use time_slot::WeeklyTimeSlot;
