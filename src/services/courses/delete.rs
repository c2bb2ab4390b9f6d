use tracing::info;

use super::CourseService;
use crate::errors::{AcademyError, Result};

/// 删除课程，选课记录和考勤记录随之删除
pub async fn delete_course(service: &CourseService, course_id: i64) -> Result<()> {
    let storage = service.get_storage();

    if !storage.delete_course(course_id).await? {
        return Err(AcademyError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    info!("Course {} deleted", course_id);
    Ok(())
}
