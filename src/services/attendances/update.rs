use tracing::info;

use super::AttendanceService;
use super::constraints::{
    check_date_not_future, check_references, check_time_order, check_unique_record,
};
use crate::errors::{AcademyError, Result};
use crate::models::attendances::{entities::Attendance, requests::UpdateAttendanceRequest};

pub async fn update_attendance(
    service: &AttendanceService,
    attendance_id: i64,
    update_data: UpdateAttendanceRequest,
) -> Result<Attendance> {
    let storage = service.get_storage();

    let existing = storage
        .get_attendance_by_id(attendance_id)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Attendance {attendance_id} not found")))?;

    // 对合并后的记录重新校验
    let course_id = update_data.course_id.unwrap_or(existing.course_id);
    let student_id = update_data.student_id.unwrap_or(existing.student_id);
    let date = update_data.date.unwrap_or(existing.date);
    let start_time = update_data.start_time.unwrap_or(existing.start_time);
    let end_time = update_data.end_time.unwrap_or(existing.end_time);

    if course_id != existing.course_id || student_id != existing.student_id {
        check_references(&storage, course_id, student_id).await?;
    }
    if update_data.date.is_some() {
        check_date_not_future(date, chrono::Utc::now().date_naive())?;
    }
    check_time_order(start_time, end_time)?;
    check_unique_record(&storage, course_id, student_id, date, Some(attendance_id)).await?;

    let attendance = storage
        .update_attendance(attendance_id, update_data)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Attendance {attendance_id} not found")))?;

    info!("Attendance {} updated", attendance.id);
    Ok(attendance)
}

#[cfg(test)]
mod tests {
    use crate::errors::AcademyError;
    use crate::models::attendances::requests::{
        AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest,
    };
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::services::{AttendanceService, CourseService, StudentService};
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
    async fn test_update_recomputes_duration() {
        let (service, course_id, student_id) = setup().await;

        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let attendance = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(start.date_naive()),
                start_time: Some(start),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();
        assert_eq!(attendance.duration, 0.0);

        let updated = service
            .update_attendance(
                attendance.id,
                UpdateAttendanceRequest {
                    end_time: Some(Some(start + Duration::hours(2))),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.duration, 2.0);
        assert_eq!(updated.start_time, start);

        // 只改开始时间，按已有结束时间重算
        let updated = service
            .update_attendance(
                attendance.id,
                UpdateAttendanceRequest {
                    start_time: Some(start + Duration::minutes(30)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.duration, 1.5);
    }

    #[tokio::test]
    async fn test_update_rejects_end_before_existing_start() {
        let (service, course_id, student_id) = setup().await;

        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let attendance = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(start.date_naive()),
                start_time: Some(start),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();

        let err = service
            .update_attendance(
                attendance.id,
                UpdateAttendanceRequest {
                    end_time: Some(Some(start - Duration::minutes(1))),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation("Start time must be before end time!")
        );
    }

    #[tokio::test]
    async fn test_update_date_collision() {
        let (service, course_id, student_id) = setup().await;

        let day1 = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let day2 = day1 + Duration::days(1);
        service
            .create_attendance(CreateAttendanceRequest {
                date: Some(day1.date_naive()),
                start_time: Some(day1),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();
        let second = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(day2.date_naive()),
                start_time: Some(day2),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();

        let err = service
            .update_attendance(
                second.id,
                UpdateAttendanceRequest {
                    date: Some(day1.date_naive()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());

        // 更新自身其它字段不算重复
        let updated = service
            .update_attendance(
                second.id,
                UpdateAttendanceRequest {
                    notes: Some(Some("brought a note".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.notes.as_deref(), Some("brought a note"));

        let listed = service
            .list_attendances(AttendanceListQuery {
                student_id: Some(student_id),
                date_from: Some(day2.date_naive()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].id, second.id);
    }

    #[tokio::test]
    async fn test_update_clears_end_time_and_notes() {
        let (service, course_id, student_id) = setup().await;

        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let attendance = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(start.date_naive()),
                start_time: Some(start),
                end_time: Some(start + Duration::hours(1)),
                notes: Some("left early".to_string()),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();
        assert_eq!(attendance.duration, 1.0);

        let cleared = service
            .update_attendance(
                attendance.id,
                UpdateAttendanceRequest {
                    end_time: Some(None),
                    notes: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.end_time, None);
        assert_eq!(cleared.notes, None);
        assert_eq!(cleared.duration, 0.0);
        assert_eq!(cleared.start_time, start);
    }

    #[tokio::test]
    async fn test_subsecond_duration_is_stable() {
        let (service, course_id, student_id) = setup().await;

        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap() + Duration::milliseconds(600);
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 1).unwrap() + Duration::milliseconds(400);
        let attendance = service
            .create_attendance(CreateAttendanceRequest {
                date: Some(start.date_naive()),
                start_time: Some(start),
                end_time: Some(end),
                ..CreateAttendanceRequest::new(course_id, student_id)
            })
            .await
            .unwrap();
        let expected = 0.8 / 3600.0;
        assert!((attendance.duration - expected).abs() < 1e-12);
        assert_eq!(attendance.start_time, start);
        assert_eq!(attendance.end_time, Some(end));

        // 再次写入相同的结束时间，时长不变
        let rewritten = service
            .update_attendance(
                attendance.id,
                UpdateAttendanceRequest {
                    end_time: Some(Some(end)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(rewritten.duration, attendance.duration);

        let fetched = service.get_attendance(attendance.id).await.unwrap();
        assert_eq!(fetched.start_time, start);
        assert_eq!(fetched.duration, attendance.duration);
    }
}
