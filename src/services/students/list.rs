use tracing::debug;

use super::StudentService;
use crate::errors::Result;
use crate::models::students::{requests::StudentListQuery, responses::StudentListResponse};

pub async fn list_students(
    service: &StudentService,
    query: StudentListQuery,
) -> Result<StudentListResponse> {
    let storage = service.get_storage();

    let response = storage.list_students_with_pagination(query).await?;
    debug!(
        "Listed {} of {} students",
        response.items.len(),
        response.pagination.total
    );
    Ok(response)
}
