use once_cell::sync::Lazy;
use regex::Regex;

// 学号：字母（含 Unicode）、数字、连字符、下划线、点
static STUDENT_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{N}_.\-]+$").expect("Invalid student code regex")
});

/// 校验学号，返回去除首尾空白后的学号
pub fn validate_student_code(code: &str) -> Result<&str, &'static str> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err("Student code cannot be empty!");
    }
    if !STUDENT_CODE_RE.is_match(trimmed) {
        return Err(
            "Student code can only contain letters, numbers, hyphens, underscores and dots!",
        );
    }
    Ok(trimmed)
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 只要求包含 @
    if !email.contains('@') {
        return Err("Invalid email format! Please enter a valid email address.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_code() {
        assert_eq!(validate_student_code("STU-001"), Ok("STU-001"));
        assert_eq!(validate_student_code("  a_b.c-9  "), Ok("a_b.c-9"));
        assert_eq!(validate_student_code("学生001"), Ok("学生001"));
        assert_eq!(validate_student_code("Ünïcödé"), Ok("Ünïcödé"));
    }

    #[test]
    fn test_validate_student_code_empty() {
        assert_eq!(
            validate_student_code("   "),
            Err("Student code cannot be empty!")
        );
        assert!(validate_student_code("").is_err());
    }

    #[test]
    fn test_validate_student_code_invalid_chars() {
        assert!(validate_student_code("STU 001").is_err());
        assert!(validate_student_code("a@b").is_err());
        assert!(validate_student_code("STU#1").is_err());
        assert!(validate_student_code("STU/1").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("a@b").is_ok());
        assert!(validate_email("ana.example.com").is_err());
        assert!(validate_email("").is_err());
    }
}
