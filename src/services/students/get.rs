use tracing::debug;

use super::StudentService;
use crate::errors::{AcademyError, Result};
use crate::models::students::{entities::Student, responses::StudentLabel};

pub async fn get_student(service: &StudentService, student_id: i64) -> Result<Student> {
    let storage = service.get_storage();

    debug!("Fetching student {}", student_id);
    storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Student {student_id} not found")))
}

/// 返回 (ID, `[学号] 全名`)，不存在的 ID 被忽略
pub async fn name_get(service: &StudentService, student_ids: &[i64]) -> Result<Vec<StudentLabel>> {
    let storage = service.get_storage();

    let students = storage.get_students_by_ids(student_ids).await?;
    Ok(students
        .iter()
        .map(|s| StudentLabel {
            id: s.id,
            label: s.display_label(),
        })
        .collect())
}
