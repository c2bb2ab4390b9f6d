use super::entities::CourseState;
use crate::models::common::nullable::deserialize_nullable;
use serde::Deserialize;
use ts_rs::TS;

// 创建课程请求
//
// 未填写的字段使用默认值：开始日期为今天，课时 1.0 小时，颜色 0。
// 新课程总是处于草稿状态。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "generated/course.ts")]
pub struct CreateCourseRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub duration_hours: Option<f64>,
    pub color: Option<i32>,
}

// 新课程记录（用于存储层，默认值已确定）
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
    pub start_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub duration_hours: f64,
    pub color: i32,
}

// 更新课程请求
//
// 描述、教师和结束日期可以用 null 清空。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/course.ts")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub teacher_id: Option<Option<i64>>,
    pub start_date: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub end_date: Option<Option<chrono::NaiveDate>>,
    pub duration_hours: Option<f64>,
    pub state: Option<CourseState>,
    pub color: Option<i32>,
}

impl UpdateCourseRequest {
    /// 仅修改状态的更新（用于状态动作）
    pub fn state(state: CourseState) -> Self {
        Self {
            state: Some(state),
            ..Default::default()
        }
    }
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub state: Option<CourseState>,
    pub search: Option<String>,
    // 只列出该学生选修的课程
    pub student_id: Option<i64>,
}
