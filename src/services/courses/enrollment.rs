use std::collections::BTreeSet;

use tracing::info;

use super::CourseService;
use crate::errors::{AcademyError, Result};
use crate::models::courses::responses::EnrollmentResponse;

/// 检查课程和学生都存在，返回去重后的学生 ID
async fn resolve_targets(
    service: &CourseService,
    course_id: i64,
    student_ids: &[i64],
) -> Result<Vec<i64>> {
    let storage = service.get_storage();

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(AcademyError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    let ids: Vec<i64> = student_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let found: BTreeSet<i64> = storage
        .get_students_by_ids(&ids)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
        return Err(AcademyError::not_found(format!(
            "Student {missing} not found"
        )));
    }

    Ok(ids)
}

/// 学生选课，已选的学生跳过
pub async fn enroll_students(
    service: &CourseService,
    course_id: i64,
    student_ids: &[i64],
) -> Result<EnrollmentResponse> {
    let storage = service.get_storage();
    let ids = resolve_targets(service, course_id, student_ids).await?;

    let affected = storage.enroll_students(course_id, &ids).await?;
    let course = service.get_course(course_id).await?;

    info!(
        "Enrolled {} students into course {}",
        affected, course.code
    );
    Ok(EnrollmentResponse {
        course_id,
        affected: affected as i64,
        student_count: course.student_count,
    })
}

/// 学生退课
pub async fn unenroll_students(
    service: &CourseService,
    course_id: i64,
    student_ids: &[i64],
) -> Result<EnrollmentResponse> {
    let storage = service.get_storage();
    let ids = resolve_targets(service, course_id, student_ids).await?;

    let affected = storage.unenroll_students(course_id, &ids).await?;
    let course = service.get_course(course_id).await?;

    info!(
        "Removed {} students from course {}",
        affected, course.code
    );
    Ok(EnrollmentResponse {
        course_id,
        affected: affected as i64,
        student_count: course.student_count,
    })
}
