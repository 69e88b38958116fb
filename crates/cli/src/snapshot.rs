use std::{fs, path::Path};

use chrono::NaiveDate;
use coursedesk_core::{
    errors::ScheduleResult,
    models::{CandidateOffering, EnrollmentRecord, PendingRequestRecord, WeeklyTimeSlot},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which action the snapshot asks about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// A lecturer requesting to teach the offering
    #[default]
    Teach,
    /// A student enrolling in the offering
    Enroll,
}

/// API data captured for one eligibility question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub offering: Option<CandidateOffering>,
    #[serde(default)]
    pub pending_requests: Vec<PendingRequestRecord>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRecord>,
    /// The user's current weekly load: teaching slots or enrolled classes
    #[serde(default)]
    pub occupied_slots: Vec<WeeklyTimeSlot>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.warn_malformed_slots();
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> ScheduleResult<Self> {
        debug!("Loading snapshot from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn warn_malformed_slots(&self) {
        let offering_slot = self.offering.iter().map(|offering| &offering.schedule);
        for slot in offering_slot.chain(&self.occupied_slots) {
            if let Err(e) = slot.validate() {
                warn!("Malformed time slot {:?}: {}", slot, e);
            }
        }
    }
}
