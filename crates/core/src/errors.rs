use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// The first rule that keeps a user from acting on an offering.
///
/// Returned by the `check_*` functions in [`crate::conflict`]; the boolean
/// predicates only report whether one of these occurred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ineligible {
    #[error("no offering selected")]
    MissingOffering,

    #[error("offering {0} already has a lecturer assigned")]
    AlreadyStaffed(String),

    #[error("offering {0} has no semester start date")]
    SemesterUnknown(String),

    #[error("semester for offering {0} has not started yet")]
    SemesterNotStarted(String),

    #[error("a teaching request for offering {0} is already pending")]
    RequestPending(String),

    #[error("already enrolled in offering {0}")]
    AlreadyEnrolled(String),

    #[error("offering {0} is full")]
    OfferingFull(String),

    #[error("offering {0} overlaps an occupied time slot")]
    ScheduleConflict(String),
}
