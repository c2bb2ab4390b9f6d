//! 学生约束校验

use std::sync::Arc;

use crate::errors::{AcademyError, Result};
use crate::storage::Storage;
use crate::utils::{validate_email, validate_student_code};

/// 校验学号格式，返回去除首尾空白后的学号
pub fn check_student_code(code: &str) -> Result<String> {
    validate_student_code(code)
        .map(str::to_string)
        .map_err(AcademyError::validation)
}

/// 邮箱设置时必须包含 @，空字符串视为未设置
pub fn check_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(email) if !email.is_empty() => {
            validate_email(email).map_err(AcademyError::validation)
        }
        _ => Ok(()),
    }
}

/// 空邮箱按未设置保存
pub fn normalize_email(email: Option<String>) -> Option<String> {
    email.filter(|email| !email.is_empty())
}

/// 学号唯一（排除给定的学生）
pub async fn check_unique_code(
    storage: &Arc<dyn Storage>,
    code: &str,
    exclude_ids: &[i64],
) -> Result<()> {
    if let Some(existing) = storage.get_student_by_code(code).await?
        && !exclude_ids.contains(&existing.id)
    {
        return Err(AcademyError::validation("The Student code must be unique!"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_student_code_trims() {
        assert_eq!(check_student_code("  STU-7 ").unwrap(), "STU-7");
    }

    #[test]
    fn test_check_student_code_messages() {
        assert_eq!(
            check_student_code(" ").unwrap_err(),
            AcademyError::validation("Student code cannot be empty!")
        );
        assert_eq!(
            check_student_code("STU 1").unwrap_err(),
            AcademyError::validation(
                "Student code can only contain letters, numbers, hyphens, underscores and dots!"
            )
        );
        assert!(check_student_code("a@b").unwrap_err().is_validation());
    }

    #[test]
    fn test_check_email() {
        assert!(check_email(None).is_ok());
        assert!(check_email(Some("")).is_ok());
        assert!(check_email(Some("ana@school.org")).is_ok());
        assert_eq!(
            check_email(Some("ana.school.org")).unwrap_err(),
            AcademyError::validation("Invalid email format! Please enter a valid email address.")
        );
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(Some(String::new())), None);
        assert_eq!(normalize_email(None), None);
        assert_eq!(
            normalize_email(Some("ana@school.org".to_string())).as_deref(),
            Some("ana@school.org")
        );
    }
}
