use tracing::info;

use super::StudentService;
use crate::errors::{AcademyError, Result};

/// 删除学生，选课记录和考勤记录随之删除
pub async fn delete_student(service: &StudentService, student_id: i64) -> Result<()> {
    let storage = service.get_storage();

    if !storage.delete_student(student_id).await? {
        return Err(AcademyError::not_found(format!(
            "Student {student_id} not found"
        )));
    }

    info!("Student {} deleted", student_id);
    Ok(())
}
