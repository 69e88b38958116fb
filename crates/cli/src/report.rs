use std::fmt;

use chrono::NaiveDate;
use coursedesk_core::{
    check_enrollment, check_teaching_request, errors::Ineligible, find_conflicts,
    models::WeeklyTimeSlot,
};

use tracing::debug;

use crate::snapshot::{Mode, Snapshot};

/// Outcome of evaluating a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: Mode,
    /// Course code of the offering, or its id when the code is unknown
    pub offering: Option<String>,
    pub verdict: Result<(), Ineligible>,
    /// Occupied slots overlapping the offering, whatever the verdict
    pub conflicts: Vec<WeeklyTimeSlot>,
}

impl Report {
    pub fn evaluate(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let offering = snapshot.offering.as_ref();

        let verdict = match snapshot.mode {
            Mode::Teach => check_teaching_request(
                offering,
                &snapshot.pending_requests,
                &snapshot.occupied_slots,
                today,
            ),
            Mode::Enroll => {
                check_enrollment(offering, &snapshot.enrollments, &snapshot.occupied_slots)
            }
        };
        debug!(
            offering = ?offering.map(|offering| &offering.id),
            mode = ?snapshot.mode,
            ?verdict,
            "Evaluated eligibility"
        );

        let conflicts: Vec<WeeklyTimeSlot> = offering
            .map(|offering| {
                find_conflicts(&offering.schedule, &snapshot.occupied_slots)
                    .into_iter()
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            mode: snapshot.mode,
            offering: offering.map(|offering| offering.label().to_string()),
            verdict,
            conflicts,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.verdict.is_ok()
    }

    /// Process exit status: 0 when eligible, 1 when blocked
    pub fn exit_code(&self) -> i32 {
        if self.is_eligible() { 0 } else { 1 }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_eligible() { "ELIGIBLE" } else { "BLOCKED" })?;
        if let Some(label) = &self.offering {
            write!(f, " ({})", label)?;
        }
        match &self.verdict {
            Ok(()) => writeln!(f)?,
            Err(reason) => writeln!(f, ": {}", reason)?,
        }
        for slot in &self.conflicts {
            writeln!(f, "  conflicts with {}", slot)?;
        }
        Ok(())
    }
}
