use tracing::debug;

use super::AttendanceService;
use crate::errors::{AcademyError, Result};
use crate::models::attendances::entities::Attendance;

pub async fn get_attendance(service: &AttendanceService, attendance_id: i64) -> Result<Attendance> {
    let storage = service.get_storage();

    debug!("Fetching attendance {}", attendance_id);
    storage
        .get_attendance_by_id(attendance_id)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Attendance {attendance_id} not found")))
}
