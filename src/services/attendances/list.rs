use tracing::debug;

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendances::{
    requests::AttendanceListQuery, responses::AttendanceListResponse,
};

pub async fn list_attendances(
    service: &AttendanceService,
    query: AttendanceListQuery,
) -> Result<AttendanceListResponse> {
    let storage = service.get_storage();

    let response = storage.list_attendances_with_pagination(query).await?;
    debug!(
        "Listed {} of {} attendances",
        response.items.len(),
        response.pagination.total
    );
    Ok(response)
}
