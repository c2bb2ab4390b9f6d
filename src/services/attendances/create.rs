use tracing::{info, warn};

use super::AttendanceService;
use super::constraints::{
    check_date_not_future, check_references, check_time_order, check_unique_record,
};
use crate::errors::Result;
use crate::models::attendances::{
    entities::{Attendance, AttendanceStatus},
    requests::{CreateAttendanceRequest, NewAttendance},
};

pub const ATTENDANCE_SEQUENCE: &str = "academy.attendance";

pub async fn create_attendance(
    service: &AttendanceService,
    attendance_data: CreateAttendanceRequest,
) -> Result<Attendance> {
    let storage = service.get_storage();
    let now = chrono::Utc::now();
    let today = now.date_naive();

    // 填充默认值
    let attendance = NewAttendance {
        name: None,
        course_id: attendance_data.course_id,
        student_id: attendance_data.student_id,
        date: attendance_data.date.unwrap_or(today),
        start_time: attendance_data.start_time.unwrap_or(now),
        end_time: attendance_data.end_time,
        status: attendance_data.status.unwrap_or(AttendanceStatus::Draft),
        is_present: attendance_data.is_present.unwrap_or(false),
        notes: attendance_data.notes,
    };

    // 约束校验
    check_references(&storage, attendance.course_id, attendance.student_id).await?;
    check_date_not_future(attendance.date, today)?;
    check_time_order(attendance.start_time, attendance.end_time)?;
    check_unique_record(
        &storage,
        attendance.course_id,
        attendance.student_id,
        attendance.date,
        None,
    )
    .await?;

    // 校验通过后再取流水号
    let name = storage.next_sequence_by_code(ATTENDANCE_SEQUENCE).await?;
    if name.is_none() {
        warn!("Sequence {} missing, attendance saved without reference", ATTENDANCE_SEQUENCE);
    }

    let attendance = storage
        .create_attendance(NewAttendance { name, ..attendance })
        .await?;

    info!(
        "Attendance {} created for student {} in course {}",
        attendance.id, attendance.student_id, attendance.course_id
    );
    Ok(attendance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AcademyError;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::services::{CourseService, StudentService};
    use crate::test_utils::setup_test_storage;
    use chrono::{Duration, TimeZone, Utc};

    async fn setup() -> (AttendanceService, i64, i64) {
        let storage = setup_test_storage().await;
        let course = CourseService::new(storage.clone())
            .create_course(CreateCourseRequest {
                name: "Intro".to_string(),
                code: "C1".to_string(),
                description: None,
                teacher_id: None,
                start_date: None,
                end_date: None,
                duration_hours: None,
                color: None,
            })
            .await
            .unwrap();
        let student = StudentService::new(storage.clone())
            .create_student(CreateStudentRequest::new("Ana", "Lee"))
            .await
            .unwrap();
        (AttendanceService::new(storage), course.id, student.id)
    }

    #[tokio::test]
    async fn test_create_attendance_defaults() {
        let (service, course_id, student_id) = setup().await;

        let attendance = service
            .create_attendance(CreateAttendanceRequest::new(course_id, student_id))
            .await
            .unwrap();
        assert_eq!(attendance.name.as_deref(), Some("ATT/00001"));
        assert_eq!(attendance.status, AttendanceStatus::Draft);
        assert!(!attendance.is_present);
        assert_eq!(attendance.date, Utc::now().date_naive());
        assert_eq!(attendance.end_time, None);
        assert_eq!(attendance.duration, 0.0);
    }

    #[tokio::test]
    async fn test_create_attendance_computes_duration() {
        let (service, course_id, student_id) = setup().await;

        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let attendance = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(start.date_naive()),
                start_time: Some(start),
                end_time: Some(start + Duration::minutes(90)),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();
        assert_eq!(attendance.duration, 1.5);
    }

    #[tokio::test]
    async fn test_create_attendance_duplicate() {
        let (service, course_id, student_id) = setup().await;

        service
            .create_attendance(CreateAttendanceRequest::new(course_id, student_id))
            .await
            .unwrap();
        let err = service
            .create_attendance(CreateAttendanceRequest::new(course_id, student_id))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation(
                "Attendance for this student and course on this date already exists!"
            )
        );
    }

    #[tokio::test]
    async fn test_create_attendance_future_date() {
        let (service, course_id, student_id) = setup().await;

        let tomorrow = Utc::now().date_naive().succ_opt().unwrap();
        let err = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(tomorrow),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation("Attendance date cannot be in the future.")
        );
    }

    #[tokio::test]
    async fn test_create_attendance_end_before_start() {
        let (service, course_id, student_id) = setup().await;

        let start = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        let err = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(start.date_naive()),
                start_time: Some(start),
                end_time: Some(start - Duration::hours(1)),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation("Start time must be before end time!")
        );

        // 校验失败不消耗流水号
        let attendance = service
            .create_attendance(CreateAttendanceRequest::new(course_id, student_id))
            .await
            .unwrap();
        assert_eq!(attendance.name.as_deref(), Some("ATT/00001"));
    }

    #[tokio::test]
    async fn test_create_attendance_unknown_references() {
        let (service, course_id, student_id) = setup().await;

        let err = service
            .create_attendance(CreateAttendanceRequest::new(course_id + 100, student_id))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        let err = service
            .create_attendance(CreateAttendanceRequest::new(course_id, student_id + 100))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
