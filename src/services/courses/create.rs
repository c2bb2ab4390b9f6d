use tracing::info;

use super::CourseService;
use super::constraints::{check_dates, check_duration, check_unique_code};
use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CreateCourseRequest, NewCourse},
};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
) -> Result<Course> {
    let storage = service.get_storage();

    // 填充默认值
    let course = NewCourse {
        name: course_data.name,
        code: course_data.code,
        description: course_data.description,
        teacher_id: course_data.teacher_id,
        start_date: course_data
            .start_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        end_date: course_data.end_date,
        duration_hours: course_data.duration_hours.unwrap_or(1.0),
        color: course_data.color.unwrap_or(0),
    };

    // 约束校验
    check_dates(course.start_date, course.end_date)?;
    check_duration(course.duration_hours)?;
    check_unique_code(&storage, &course.code, None).await?;

    let course = storage.create_course(course).await?;
    info!("Course {} ({}) created", course.code, course.id);
    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AcademyError;
    use crate::models::courses::entities::CourseState;
    use crate::test_utils::setup_test_storage;
    use chrono::NaiveDate;

    fn request(code: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            name: "Intro".to_string(),
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
    async fn test_create_course_applies_defaults() {
        let service = CourseService::new(setup_test_storage().await);

        let course = service.create_course(request("C1")).await.unwrap();
        assert_eq!(course.state, CourseState::Draft);
        assert_eq!(course.duration_hours, 1.0);
        assert_eq!(course.color, 0);
        assert_eq!(course.start_date, chrono::Utc::now().date_naive());
        assert_eq!(course.student_count, 0);
    }

    #[tokio::test]
    async fn test_create_course_duplicate_code() {
        let service = CourseService::new(setup_test_storage().await);

        service.create_course(request("C1")).await.unwrap();
        let err = service.create_course(request("C1")).await.unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation("The course code must be unique!")
        );
    }

    #[tokio::test]
    async fn test_create_course_end_before_start() {
        let service = CourseService::new(setup_test_storage().await);

        let mut req = request("C1");
        req.start_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        req.end_date = NaiveDate::from_ymd_opt(2024, 2, 1);
        let err = service.create_course(req).await.unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation("Start date must be before end date!")
        );

        // 校验失败不写入
        assert!(service.get_course_by_code("C1").await.is_err());
    }

    #[tokio::test]
    async fn test_create_course_non_positive_duration() {
        let service = CourseService::new(setup_test_storage().await);

        let mut req = request("C1");
        req.duration_hours = Some(0.0);
        let err = service.create_course(req).await.unwrap_err();
        assert_eq!(err, AcademyError::validation("Duration must be positive!"));
    }
}
