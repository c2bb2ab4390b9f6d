use super::entities::Attendance;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Attendance>,
}
