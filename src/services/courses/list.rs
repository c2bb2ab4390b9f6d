use tracing::debug;

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::{requests::CourseListQuery, responses::CourseListResponse};

pub async fn list_courses(
    service: &CourseService,
    query: CourseListQuery,
) -> Result<CourseListResponse> {
    let storage = service.get_storage();

    let response = storage.list_courses_with_pagination(query).await?;
    debug!(
        "Listed {} of {} courses",
        response.items.len(),
        response.pagination.total
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use crate::models::courses::{
        entities::CourseState,
        requests::{CourseListQuery, CreateCourseRequest},
    };
    use crate::services::CourseService;
    use crate::test_utils::setup_test_storage;

    fn request(name: &str, code: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
            teacher_id: None,
            start_date: None,
            end_date: None,
            duration_hours: None,
            color: None,
        }
    }

    #[tokio::test]
    async fn test_list_courses_filters() {
        let service = CourseService::new(setup_test_storage().await);

        let algebra = service
            .create_course(request("Algebra", "MATH-1"))
            .await
            .unwrap();
        service
            .create_course(request("Biology", "BIO-1"))
            .await
            .unwrap();
        service.confirm(algebra.id).await.unwrap();

        let all = service
            .list_courses(CourseListQuery::default())
            .await
            .unwrap();
        assert_eq!(all.pagination.total, 2);

        let confirmed = service
            .list_courses(CourseListQuery {
                state: Some(CourseState::Confirmed),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(confirmed.items.len(), 1);
        assert_eq!(confirmed.items[0].code, "MATH-1");

        let searched = service
            .list_courses(CourseListQuery {
                search: Some("bio".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(searched.items.len(), 1);
        assert_eq!(searched.items[0].name, "Biology");
    }

    #[tokio::test]
    async fn test_list_courses_pagination() {
        let service = CourseService::new(setup_test_storage().await);

        for i in 0..5 {
            service
                .create_course(request("Course", &format!("C{i}")))
                .await
                .unwrap();
        }

        let page = service
            .list_courses(CourseListQuery {
                page: Some(2),
                size: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.page, 2);
    }
}
