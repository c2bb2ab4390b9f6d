use crate::models::common::nullable::deserialize_nullable;
use serde::Deserialize;
use ts_rs::TS;

// 创建学生请求
//
// 学号为空时从序列生成；入学日期默认今天，默认在读。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct CreateStudentRequest {
    pub student_code: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub enrollment_date: Option<chrono::NaiveDate>,
    pub is_active: Option<bool>,
}

impl CreateStudentRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }
}

// 新学生记录（用于存储层，学号和默认值已确定）
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub enrollment_date: chrono::NaiveDate,
    pub is_active: bool,
}

// 更新学生请求，单条和批量更新共用
//
// 邮箱、电话和出生日期可以用 null 清空。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct UpdateStudentRequest {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub birth_date: Option<Option<chrono::NaiveDate>>,
    pub enrollment_date: Option<chrono::NaiveDate>,
    pub is_active: Option<bool>,
}

impl UpdateStudentRequest {
    /// 是否修改了姓名（需要重算全名）
    pub fn touches_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    // 匹配全名、学号或邮箱
    pub search: Option<String>,
    pub is_active: Option<bool>,
    // 只列出选修该课程的学生
    pub course_id: Option<i64>,
}
