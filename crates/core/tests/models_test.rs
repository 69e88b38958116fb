use coursedesk_core::{
    errors::ScheduleError,
    models::{
        CandidateOffering, EnrollmentRecord, EnrollmentStatus, PendingRequestRecord,
        RequestStatus, WeeklyTimeSlot,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};

#[test]
fn test_offering_from_api_json() {
    let json = r#"{
        "id": "c1",
        "courseCode": "CS101",
        "courseName": "Intro to Programming",
        "assignedLecturerId": null,
        "semesterStartDate": "2024-01-01T00:00:00Z",
        "capacity": 40,
        "dayOfWeek": 1,
        "startMinute": 480,
        "endMinute": 600,
        "room": "B-204"
    }"#;

    let offering: CandidateOffering = from_str(json).expect("Failed to deserialize offering");

    assert_eq!(offering.id, "c1");
    assert_eq!(offering.course_code.as_deref(), Some("CS101"));
    assert_eq!(offering.assigned_lecturer_id, None);
    assert_eq!(offering.semester_start_date.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(offering.capacity, Some(40));
    assert_eq!(offering.enrolled_count, None);
    assert_eq!(offering.schedule, WeeklyTimeSlot::new(1, 480, 600));
    assert_eq!(offering.label(), "CS101");
}

#[test]
fn test_missing_and_null_schedule_fields_are_equivalent() {
    let with_nulls: WeeklyTimeSlot =
        from_str(r#"{"dayOfWeek": null, "startMinute": null, "endMinute": null}"#)
            .expect("Failed to deserialize slot with nulls");
    let empty: WeeklyTimeSlot = from_str("{}").expect("Failed to deserialize empty slot");

    assert_eq!(with_nulls, empty);
    assert!(!empty.is_scheduled());

    let offering: CandidateOffering =
        from_str(r#"{"id": "tba", "dayOfWeek": 3}"#).expect("Failed to deserialize offering");
    assert_eq!(offering.schedule.day_of_week, Some(3));
    assert!(!offering.schedule.is_scheduled());
    assert_eq!(offering.label(), "tba");
}

#[test]
fn test_offering_serializes_flat() {
    let offering = CandidateOffering::new("c9", WeeklyTimeSlot::new(5, 60, 120));
    let value = to_value(&offering).expect("Failed to serialize offering");

    assert_eq!(value["id"], json!("c9"));
    assert_eq!(value["dayOfWeek"], json!(5));
    assert_eq!(value["endMinute"], json!(120));
    assert!(value.get("schedule").is_none());
}

#[rstest]
#[case("PENDING", RequestStatus::Pending)]
#[case("APPROVED", RequestStatus::Approved)]
#[case("REJECTED", RequestStatus::Rejected)]
fn test_request_status_wire_names(#[case] wire: &str, #[case] status: RequestStatus) {
    let json = format!(r#"{{"offeringId": "c1", "status": "{}"}}"#, wire);
    let record: PendingRequestRecord = from_str(&json).expect("Failed to deserialize request");

    assert_eq!(record.status, status);
    assert_eq!(record.is_pending_for("c1"), status == RequestStatus::Pending);
    assert!(!record.is_pending_for("c2"));
}

#[test]
fn test_unknown_request_status_is_rejected() {
    let result = from_str::<PendingRequestRecord>(r#"{"offeringId": "c1", "status": "CANCELLED"}"#);
    assert!(result.is_err());
}

#[test]
fn test_enrollment_record() {
    let record: EnrollmentRecord = from_str(r#"{"offeringId": "c1", "status": "ENROLLED"}"#)
        .expect("Failed to deserialize enrollment");

    assert_eq!(record.status, EnrollmentStatus::Enrolled);
    assert!(record.is_active_for("c1"));

    let dropped = EnrollmentRecord {
        status: EnrollmentStatus::Dropped,
        ..record
    };
    assert!(!dropped.is_active_for("c1"));
}

#[rstest]
#[case(WeeklyTimeSlot::new(1, 480, 600), "Mon 08:00-10:00")]
#[case(WeeklyTimeSlot::new(0, 0, 45), "Sun 00:00-00:45")]
#[case(WeeklyTimeSlot::new(6, 1290, 1440), "Sat 21:30-24:00")]
#[case(WeeklyTimeSlot::new(9, 60, 90), "day9 01:00-01:30")]
#[case(WeeklyTimeSlot::unscheduled(), "TBA")]
fn test_slot_display(#[case] slot: WeeklyTimeSlot, #[case] expected: &str) {
    assert_eq!(slot.to_string(), expected);
}

#[rstest]
#[case(WeeklyTimeSlot::new(1, 480, 600), true)]
#[case(WeeklyTimeSlot::new(6, 1380, 1440), true)]
#[case(WeeklyTimeSlot::unscheduled(), true)]
#[case(WeeklyTimeSlot::new(7, 480, 600), false)]
#[case(WeeklyTimeSlot::new(1, 600, 600), false)]
#[case(WeeklyTimeSlot::new(1, 600, 480), false)]
#[case(WeeklyTimeSlot::new(1, 1440, 1500), false)]
fn test_slot_validate(#[case] slot: WeeklyTimeSlot, #[case] valid: bool) {
    let result = slot.validate();
    assert_eq!(result.is_ok(), valid);
    if let Err(err) = result {
        assert!(matches!(err, ScheduleError::Validation(_)));
    }
}

#[rstest]
#[case(None, None, false)]
#[case(Some(10), None, false)]
#[case(Some(10), Some(9), false)]
#[case(Some(10), Some(10), true)]
#[case(Some(0), Some(0), true)]
fn test_offering_is_full(
    #[case] capacity: Option<u32>,
    #[case] enrolled_count: Option<u32>,
    #[case] full: bool,
) {
    let offering = CandidateOffering {
        capacity,
        enrolled_count,
        ..CandidateOffering::default()
    };
    assert_eq!(offering.is_full(), full);
}
