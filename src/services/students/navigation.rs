//! 学生导航动作
//!
//! 返回窗口动作描述，由界面负责打开对应视图。

use serde_json::json;

use super::StudentService;
use crate::errors::{AcademyError, Result};
use crate::models::students::entities::Student;
use crate::models::{DomainFilter, WindowAction};

const ATTENDANCE_MODEL: &str = "academy.attendance";
const COURSE_MODEL: &str = "academy.course";

/// 导航动作只作用于单个学生
async fn ensure_one(service: &StudentService, student_ids: &[i64]) -> Result<Student> {
    match student_ids {
        [student_id] => service.get_student(*student_id).await,
        _ => Err(AcademyError::validation(format!(
            "Expected a single student, got {}",
            student_ids.len()
        ))),
    }
}

pub async fn action_view_attendances(
    service: &StudentService,
    student_ids: &[i64],
) -> Result<WindowAction> {
    let student = ensure_one(service, student_ids).await?;

    Ok(
        WindowAction::new("Attendances", ATTENDANCE_MODEL, &["tree", "form", "calendar"])
            .with_domain(DomainFilter::new("student_id", "=", student.id))
            .with_context("default_student_id", student.id),
    )
}

pub async fn action_view_courses(
    service: &StudentService,
    student_ids: &[i64],
) -> Result<WindowAction> {
    let student = ensure_one(service, student_ids).await?;

    Ok(
        WindowAction::new("Courses", COURSE_MODEL, &["tree", "form", "kanban"])
            .with_domain(DomainFilter::new("student_ids", "in", student.id))
            .with_context("default_student_ids", json!([student.id])),
    )
}
