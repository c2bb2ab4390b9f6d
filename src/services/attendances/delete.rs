use tracing::info;

use super::AttendanceService;
use crate::errors::{AcademyError, Result};

pub async fn delete_attendance(service: &AttendanceService, attendance_id: i64) -> Result<()> {
    let storage = service.get_storage();

    if !storage.delete_attendance(attendance_id).await? {
        return Err(AcademyError::not_found(format!(
            "Attendance {attendance_id} not found"
        )));
    }

    info!("Attendance {} deleted", attendance_id);
    Ok(())
}
