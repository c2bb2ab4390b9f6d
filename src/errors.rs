//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 所有约束校验失败统一使用 `Validation` 变体，携带可直接展示给用户的信息。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_academy_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum AcademyError {
            $($variant(String),)*
        }

        impl AcademyError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AcademyError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AcademyError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AcademyError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AcademyError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AcademyError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_academy_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
}

impl AcademyError {
    /// 是否为约束校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, AcademyError::Validation(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AcademyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AcademyError {}

pub type Result<T> = std::result::Result<T, AcademyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AcademyError::database_config("test").code(), "E001");
        assert_eq!(AcademyError::database_operation("test").code(), "E003");
        assert_eq!(AcademyError::validation("test").code(), "E004");
        assert_eq!(AcademyError::not_found("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AcademyError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            AcademyError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AcademyError::validation("Duration must be positive!");
        assert_eq!(err.message(), "Duration must be positive!");
        assert!(err.is_validation());
        assert!(!AcademyError::not_found("x").is_validation());
    }

    #[test]
    fn test_format_simple() {
        let err = AcademyError::validation("Invalid email format!");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid email format!"));
    }
}
