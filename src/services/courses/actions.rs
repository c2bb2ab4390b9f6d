//! 课程状态动作
//!
//! 直接设置目标状态，不检查当前状态。

use tracing::info;

use super::CourseService;
use crate::errors::{AcademyError, Result};
use crate::models::courses::{
    entities::{Course, CourseState},
    requests::UpdateCourseRequest,
};

async fn set_state(service: &CourseService, course_id: i64, state: CourseState) -> Result<Course> {
    let storage = service.get_storage();

    let course = storage
        .update_course(course_id, UpdateCourseRequest::state(state))
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Course {course_id} not found")))?;

    info!("Course {} moved to {}", course_id, state);
    Ok(course)
}

pub async fn confirm(service: &CourseService, course_id: i64) -> Result<Course> {
    set_state(service, course_id, CourseState::Confirmed).await
}

pub async fn start(service: &CourseService, course_id: i64) -> Result<Course> {
    set_state(service, course_id, CourseState::InProgress).await
}

pub async fn complete(service: &CourseService, course_id: i64) -> Result<Course> {
    set_state(service, course_id, CourseState::Completed).await
}
