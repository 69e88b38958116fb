use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A lecturer's teaching request for an offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequestRecord {
    pub offering_id: String,
    pub status: RequestStatus,
}

impl PendingRequestRecord {
    pub fn is_pending_for(&self, offering_id: &str) -> bool {
        self.status == RequestStatus::Pending && self.offering_id == offering_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Enrolled,
    Dropped,
}

/// A student's enrollment in an offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub offering_id: String,
    pub status: EnrollmentStatus,
}

impl EnrollmentRecord {
    pub fn is_active_for(&self, offering_id: &str) -> bool {
        self.status == EnrollmentStatus::Enrolled && self.offering_id == offering_id
    }
}
