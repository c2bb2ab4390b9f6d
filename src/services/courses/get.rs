use tracing::debug;

use super::CourseService;
use crate::errors::{AcademyError, Result};
use crate::models::courses::entities::Course;

pub async fn get_course(service: &CourseService, course_id: i64) -> Result<Course> {
    let storage = service.get_storage();

    debug!("Fetching course {}", course_id);
    storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Course {course_id} not found")))
}

pub async fn get_course_by_code(service: &CourseService, code: &str) -> Result<Course> {
    let storage = service.get_storage();

    debug!("Fetching course by code {}", code);
    storage
        .get_course_by_code(code)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Course {code} not found")))
}
