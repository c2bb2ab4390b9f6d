//! 考勤约束校验

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{AcademyError, Result};
use crate::storage::Storage;

/// 结束时间不能早于开始时间
pub fn check_time_order(start_time: DateTime<Utc>, end_time: Option<DateTime<Utc>>) -> Result<()> {
    match end_time {
        Some(end) if end < start_time => Err(AcademyError::validation(
            "Start time must be before end time!",
        )),
        _ => Ok(()),
    }
}

/// 考勤日期不能晚于今天
pub fn check_date_not_future(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date > today {
        return Err(AcademyError::validation(
            "Attendance date cannot be in the future.",
        ));
    }
    Ok(())
}

/// 同一学生、课程、日期只能有一条考勤（排除自身）
pub async fn check_unique_record(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    student_id: i64,
    date: NaiveDate,
    exclude_id: Option<i64>,
) -> Result<()> {
    if storage
        .attendance_exists(course_id, student_id, date, exclude_id)
        .await?
    {
        return Err(AcademyError::validation(
            "Attendance for this student and course on this date already exists!",
        ));
    }
    Ok(())
}

/// 课程和学生必须存在
pub async fn check_references(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    student_id: i64,
) -> Result<()> {
    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(AcademyError::not_found(format!(
            "Course {course_id} not found"
        )));
    }
    if storage.get_student_by_id(student_id).await?.is_none() {
        return Err(AcademyError::not_found(format!(
            "Student {student_id} not found"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_check_time_order() {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();

        assert!(check_time_order(start, None).is_ok());
        assert!(check_time_order(start, Some(start)).is_ok());
        assert_eq!(
            check_time_order(start, Some(end)).unwrap_err(),
            AcademyError::validation("Start time must be before end time!")
        );
    }

    #[test]
    fn test_check_date_not_future() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(check_date_not_future(today, today).is_ok());
        assert!(check_date_not_future(today.pred_opt().unwrap(), today).is_ok());
        assert!(
            check_date_not_future(today.succ_opt().unwrap(), today)
                .unwrap_err()
                .is_validation()
        );
    }
}
