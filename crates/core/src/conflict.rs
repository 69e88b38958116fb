//! # Schedule conflict checks
//!
//! Pure predicates that gate the "request to teach" and "enroll" actions.
//! Every function here is total: missing data makes an action unavailable
//! rather than producing an error, and the current date is always passed in
//! by the caller.

use chrono::NaiveDate;

use crate::errors::Ineligible;
use crate::models::{CandidateOffering, EnrollmentRecord, PendingRequestRecord, WeeklyTimeSlot};

/// Whether the semester starting on `reference_date` has begun by `today`.
///
/// Only the part before a `T` is considered, and it is compared as a string
/// against `today` in `YYYY-MM-DD` form. No format validation happens, so a
/// malformed date yields whatever the string comparison says.
pub fn semester_has_started(reference_date: Option<&str>, today: NaiveDate) -> bool {
    let Some(reference) = reference_date.filter(|reference| !reference.is_empty()) else {
        return false;
    };
    let date_part = reference.split('T').next().unwrap_or(reference);

    let today = today.format("%Y-%m-%d").to_string();
    date_part <= today.as_str()
}

/// Whether `candidate` overlaps any of `existing_slots` on the same weekday.
///
/// Unscheduled slots, on either side, never conflict. Slots that merely touch
/// (one ends when the other starts) do not conflict.
pub fn has_schedule_conflict(
    candidate: &WeeklyTimeSlot,
    existing_slots: &[WeeklyTimeSlot],
) -> bool {
    if !candidate.is_scheduled() {
        return false;
    }
    existing_slots.iter().any(|slot| candidate.overlaps(slot))
}

/// Every slot in `existing_slots` that overlaps `candidate`, in input order.
pub fn find_conflicts<'a>(
    candidate: &WeeklyTimeSlot,
    existing_slots: &'a [WeeklyTimeSlot],
) -> Vec<&'a WeeklyTimeSlot> {
    if !candidate.is_scheduled() {
        return Vec::new();
    }
    existing_slots
        .iter()
        .filter(|slot| candidate.overlaps(slot))
        .collect()
}

/// Checks whether a lecturer may ask to teach `offering`.
///
/// Rules are evaluated in order and the first one that fails is returned:
/// the offering must exist, be unstaffed, have a semester start date, that
/// semester must have started, no request of the lecturer's may be pending
/// for it, and it must not overlap the lecturer's `assigned_slots`.
pub fn check_teaching_request(
    offering: Option<&CandidateOffering>,
    pending_requests: &[PendingRequestRecord],
    assigned_slots: &[WeeklyTimeSlot],
    today: NaiveDate,
) -> Result<(), Ineligible> {
    let offering = offering.ok_or(Ineligible::MissingOffering)?;
    let id = &offering.id;

    if offering.assigned_lecturer_id.is_some() {
        Err(Ineligible::AlreadyStaffed(id.clone()))
    } else if offering.semester_start_date.is_none() {
        Err(Ineligible::SemesterUnknown(id.clone()))
    } else if !semester_has_started(offering.semester_start_date.as_deref(), today) {
        Err(Ineligible::SemesterNotStarted(id.clone()))
    } else if pending_requests.iter().any(|request| request.is_pending_for(id)) {
        Err(Ineligible::RequestPending(id.clone()))
    } else if has_schedule_conflict(&offering.schedule, assigned_slots) {
        Err(Ineligible::ScheduleConflict(id.clone()))
    } else {
        Ok(())
    }
}

pub fn can_request_teaching(
    offering: Option<&CandidateOffering>,
    pending_requests: &[PendingRequestRecord],
    assigned_slots: &[WeeklyTimeSlot],
    today: NaiveDate,
) -> bool {
    check_teaching_request(offering, pending_requests, assigned_slots, today).is_ok()
}

/// Checks whether a student may enroll in `offering`.
///
/// In order: the offering must exist, the student must not already hold an
/// active enrollment for it, it must have free seats (unknown capacity counts
/// as free), and it must not overlap `enrolled_slots`.
pub fn check_enrollment(
    offering: Option<&CandidateOffering>,
    enrollments: &[EnrollmentRecord],
    enrolled_slots: &[WeeklyTimeSlot],
) -> Result<(), Ineligible> {
    let offering = offering.ok_or(Ineligible::MissingOffering)?;
    let id = &offering.id;

    if enrollments.iter().any(|record| record.is_active_for(id)) {
        Err(Ineligible::AlreadyEnrolled(id.clone()))
    } else if offering.is_full() {
        Err(Ineligible::OfferingFull(id.clone()))
    } else if has_schedule_conflict(&offering.schedule, enrolled_slots) {
        Err(Ineligible::ScheduleConflict(id.clone()))
    } else {
        Ok(())
    }
}

pub fn can_enroll(
    offering: Option<&CandidateOffering>,
    enrollments: &[EnrollmentRecord],
    enrolled_slots: &[WeeklyTimeSlot],
) -> bool {
    check_enrollment(offering, enrollments, enrolled_slots).is_ok()
}
