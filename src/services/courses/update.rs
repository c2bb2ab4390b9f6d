use tracing::info;

use super::CourseService;
use super::constraints::{check_dates, check_duration, check_unique_code};
use crate::errors::{AcademyError, Result};
use crate::models::courses::{entities::Course, requests::UpdateCourseRequest};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> Result<Course> {
    let storage = service.get_storage();

    let existing = storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Course {course_id} not found")))?;

    // 对合并后的记录重新校验
    let start_date = update_data.start_date.unwrap_or(existing.start_date);
    let end_date = update_data.end_date.unwrap_or(existing.end_date);
    check_dates(start_date, end_date)?;

    if let Some(duration_hours) = update_data.duration_hours {
        check_duration(duration_hours)?;
    }

    if let Some(ref code) = update_data.code
        && *code != existing.code
    {
        check_unique_code(&storage, code, Some(course_id)).await?;
    }

    let course = storage
        .update_course(course_id, update_data)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Course {course_id} not found")))?;

    info!("Course {} updated", course.id);
    Ok(course)
}
