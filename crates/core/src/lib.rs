//! # CourseDesk core
//!
//! Domain records and the schedule-conflict predicates used by the course
//! portal to decide whether a lecturer may request to teach an offering or a
//! student may enroll in one.
//!
//! Nothing in this crate performs I/O. Callers fetch the records from the
//! course API and pass the current date in explicitly.

/// Eligibility predicates built on weekly overlap checks
pub mod conflict;
/// Error types and block reasons
pub mod errors;
/// Records mirroring the course API's JSON shapes
pub mod models;

pub use conflict::{
    can_enroll, can_request_teaching, check_enrollment, check_teaching_request, find_conflicts,
    has_schedule_conflict, semester_has_started,
};
