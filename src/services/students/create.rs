use tracing::{info, warn};

use super::StudentService;
use super::constraints::{check_email, check_student_code, check_unique_code, normalize_email};
use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, NewStudent},
};

pub const STUDENT_CODE_SEQUENCE: &str = "academy.student.code";
// 序列缺失时使用的学号
const FALLBACK_STUDENT_CODE: &str = "STU000";

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
) -> Result<Student> {
    let storage = service.get_storage();

    // 先校验不依赖学号的字段，校验失败时不占用序号
    check_email(student_data.email.as_deref())?;

    // 未填写学号时从序列生成
    let student_code = match student_data.student_code {
        Some(code) if !code.is_empty() => code,
        _ => match storage.next_sequence_by_code(STUDENT_CODE_SEQUENCE).await? {
            Some(code) => code,
            None => {
                warn!(
                    "Sequence {} missing, falling back to {}",
                    STUDENT_CODE_SEQUENCE, FALLBACK_STUDENT_CODE
                );
                FALLBACK_STUDENT_CODE.to_string()
            }
        },
    };

    // 约束校验
    let student_code = check_student_code(&student_code)?;
    check_unique_code(&storage, &student_code, &[]).await?;

    let student = NewStudent {
        student_code,
        first_name: student_data.first_name,
        last_name: student_data.last_name,
        email: normalize_email(student_data.email),
        phone: student_data.phone,
        birth_date: student_data.birth_date,
        enrollment_date: student_data
            .enrollment_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        is_active: student_data.is_active.unwrap_or(true),
    };

    let student = storage.create_student(student).await?;
    info!("Student {} ({}) created", student.student_code, student.id);
    Ok(student)
}
