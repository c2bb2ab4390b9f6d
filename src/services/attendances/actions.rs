//! 考勤状态动作
//!
//! 不检查当前状态，重复执行结果相同。

use tracing::info;

use super::AttendanceService;
use crate::errors::{AcademyError, Result};
use crate::models::attendances::{
    entities::{Attendance, AttendanceStatus},
    requests::UpdateAttendanceRequest,
};

async fn apply_status(
    service: &AttendanceService,
    attendance_id: i64,
    status: AttendanceStatus,
    is_present: Option<bool>,
) -> Result<Attendance> {
    let storage = service.get_storage();

    let attendance = storage
        .update_attendance(
            attendance_id,
            UpdateAttendanceRequest {
                status: Some(status),
                is_present,
                ..Default::default()
            },
        )
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Attendance {attendance_id} not found")))?;

    info!("Attendance {} marked {}", attendance_id, status);
    Ok(attendance)
}

pub async fn mark_present(service: &AttendanceService, attendance_id: i64) -> Result<Attendance> {
    apply_status(service, attendance_id, AttendanceStatus::Present, Some(true)).await
}

pub async fn mark_absent(service: &AttendanceService, attendance_id: i64) -> Result<Attendance> {
    apply_status(service, attendance_id, AttendanceStatus::Absent, Some(false)).await
}

/// 迟到不改变出勤勾选
pub async fn mark_late(service: &AttendanceService, attendance_id: i64) -> Result<Attendance> {
    apply_status(service, attendance_id, AttendanceStatus::Late, None).await
}

/// 保存出勤勾选，状态随之变为出勤或缺勤
pub async fn set_presence(
    service: &AttendanceService,
    attendance_id: i64,
    is_present: bool,
) -> Result<Attendance> {
    let status = AttendanceStatus::from_presence(is_present);
    apply_status(service, attendance_id, status, Some(is_present)).await
}
