use serde::{Deserialize, Serialize};

use super::time_slot::WeeklyTimeSlot;

/// A course taught in a specific semester, as returned by the offerings API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateOffering {
    pub id: String,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    /// Set once a lecturer teaches the offering.
    #[serde(default)]
    pub assigned_lecturer_id: Option<String>,
    /// ISO date, possibly with a time component.
    #[serde(default)]
    pub semester_start_date: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub enrolled_count: Option<u32>,
    #[serde(flatten)]
    pub schedule: WeeklyTimeSlot,
}

impl CandidateOffering {
    pub fn new(id: impl Into<String>, schedule: WeeklyTimeSlot) -> Self {
        Self {
            id: id.into(),
            schedule,
            ..Self::default()
        }
    }

    /// `false` when either number is missing.
    pub fn is_full(&self) -> bool {
        match (self.capacity, self.enrolled_count) {
            (Some(capacity), Some(enrolled)) => enrolled >= capacity,
            _ => false,
        }
    }

    pub fn label(&self) -> &str {
        self.course_code.as_deref().unwrap_or(&self.id)
    }
}
