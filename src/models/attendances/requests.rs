use super::entities::AttendanceStatus;
use crate::models::common::nullable::deserialize_nullable;
use serde::Deserialize;
use ts_rs::TS;

// 创建考勤请求
//
// 日期默认今天，开始时间默认当前时间，状态默认草稿。流水号由序列自动生成。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub course_id: i64,
    pub student_id: i64,
    pub date: Option<chrono::NaiveDate>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<AttendanceStatus>,
    pub is_present: Option<bool>,
    pub notes: Option<String>,
}

impl CreateAttendanceRequest {
    pub fn new(course_id: i64, student_id: i64) -> Self {
        Self {
            course_id,
            student_id,
            date: None,
            start_time: None,
            end_time: None,
            status: None,
            is_present: None,
            notes: None,
        }
    }
}

// 新考勤记录（用于存储层，所有默认值已确定）
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub name: Option<String>,
    pub course_id: i64,
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub status: AttendanceStatus,
    pub is_present: bool,
    pub notes: Option<String>,
}

// 更新考勤请求
//
// 可清空字段为双层 Option：外层 None 表示不修改，Some(None) 表示清空。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub end_time: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub status: Option<AttendanceStatus>,
    pub is_present: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub notes: Option<Option<String>>,
}

// 考勤列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "generated/attendance.ts")]
pub struct AttendanceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub date_from: Option<chrono::NaiveDate>,
    pub date_to: Option<chrono::NaiveDate>,
}
