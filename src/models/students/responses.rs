use super::entities::Student;
use crate::models::common::{PaginationInfo, Warning};
use serde::Serialize;
use ts_rs::TS;

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct StudentListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Student>,
}

// 学生显示名称
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct StudentLabel {
    pub id: i64,
    pub label: String,
}

// 表单字段变化的提示结果，不会写入数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct StudentOnchangeResult {
    pub warning: Option<Warning>,
    // 建议填写的邮箱
    pub suggested_email: Option<String>,
}
