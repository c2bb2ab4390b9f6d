use tracing::info;

use super::StudentService;
use super::constraints::{check_email, check_student_code, check_unique_code, normalize_email};
use crate::errors::{AcademyError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use crate::storage::Storage;
use std::sync::Arc;

/// 校验更新字段，返回学号已规范化的请求
async fn validate_update(
    storage: &Arc<dyn Storage>,
    student_ids: &[i64],
    mut update_data: UpdateStudentRequest,
) -> Result<UpdateStudentRequest> {
    if let Some(ref code) = update_data.student_code {
        let code = check_student_code(code)?;
        // 多个学生不能共用同一个学号
        if student_ids.len() > 1 {
            return Err(AcademyError::validation("The Student code must be unique!"));
        }
        check_unique_code(storage, &code, student_ids).await?;
        update_data.student_code = Some(code);
    }

    check_email(update_data.email.as_ref().and_then(Option::as_deref))?;
    update_data.email = update_data.email.map(normalize_email);
    Ok(update_data)
}

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> Result<Student> {
    let storage = service.get_storage();

    let update_data = validate_update(&storage, &[student_id], update_data).await?;

    let student = storage
        .update_student(student_id, update_data)
        .await?
        .ok_or_else(|| AcademyError::not_found(format!("Student {student_id} not found")))?;

    info!("Student {} updated", student.id);
    Ok(student)
}

/// 批量更新，每个学生的全名按各自的姓名重新计算
pub async fn update_students(
    service: &StudentService,
    student_ids: &[i64],
    update_data: UpdateStudentRequest,
) -> Result<Vec<Student>> {
    let storage = service.get_storage();

    let update_data = validate_update(&storage, student_ids, update_data).await?;

    let students = storage.update_students(student_ids, update_data).await?;
    info!("Updated {} students", students.len());
    Ok(students)
}

#[cfg(test)]
mod tests {
    use crate::errors::AcademyError;
    use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
    use crate::services::StudentService;
    use crate::test_utils::setup_test_storage;

    #[tokio::test]
    async fn test_update_student_recomputes_full_name() {
        let service = StudentService::new(setup_test_storage().await);
        let ana = service
            .create_student(CreateStudentRequest::new("Ana", "Lee"))
            .await
            .unwrap();

        let updated = service
            .update_student(
                ana.id,
                UpdateStudentRequest {
                    last_name: Some("Park".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.full_name, "Ana Park");
        assert_eq!(updated.first_name, "Ana");
    }

    #[tokio::test]
    async fn test_batch_update_recomputes_each_full_name() {
        let service = StudentService::new(setup_test_storage().await);
        let ana = service
            .create_student(CreateStudentRequest::new("Ana", "Lee"))
            .await
            .unwrap();
        let bob = service
            .create_student(CreateStudentRequest::new("Bob", "Ray"))
            .await
            .unwrap();

        let updated = service
            .update_students(
                &[ana.id, bob.id],
                UpdateStudentRequest {
                    last_name: Some("Smith".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(service.get_student(ana.id).await.unwrap().full_name, "Ana Smith");
        assert_eq!(service.get_student(bob.id).await.unwrap().full_name, "Bob Smith");
    }

    #[tokio::test]
    async fn test_batch_update_without_name_keeps_full_name() {
        let service = StudentService::new(setup_test_storage().await);
        let ana = service
            .create_student(CreateStudentRequest::new("Ana", "Lee"))
            .await
            .unwrap();
        let bob = service
            .create_student(CreateStudentRequest::new("Bob", "Ray"))
            .await
            .unwrap();

        service
            .update_students(
                &[ana.id, bob.id],
                UpdateStudentRequest {
                    phone: Some(Some("555-0100".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let bob = service.get_student(bob.id).await.unwrap();
        assert_eq!(bob.full_name, "Bob Ray");
        assert_eq!(bob.phone.as_deref(), Some("555-0100"));
    }

    #[tokio::test]
    async fn test_update_student_code_validation() {
        let service = StudentService::new(setup_test_storage().await);
        let ana = service
            .create_student(CreateStudentRequest::new("Ana", "Lee"))
            .await
            .unwrap();
        let bob = service
            .create_student(CreateStudentRequest::new("Bob", "Ray"))
            .await
            .unwrap();

        let err = service
            .update_student(
                bob.id,
                UpdateStudentRequest {
                    student_code: Some(ana.student_code.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation("The Student code must be unique!")
        );

        let err = service
            .update_students(
                &[ana.id, bob.id],
                UpdateStudentRequest {
                    student_code: Some("SHARED".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let renamed = service
            .update_student(
                bob.id,
                UpdateStudentRequest {
                    student_code: Some(" B-2 ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.student_code, "B-2");
    }

    #[tokio::test]
    async fn test_update_student_invalid_email() {
        let service = StudentService::new(setup_test_storage().await);
        let ana = service
            .create_student(CreateStudentRequest::new("Ana", "Lee"))
            .await
            .unwrap();

        let err = service
            .update_student(
                ana.id,
                UpdateStudentRequest {
                    email: Some(Some("nope".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get_student(ana.id).await.unwrap().email, None);
    }

    #[tokio::test]
    async fn test_update_student_clears_optional_fields() {
        let service = StudentService::new(setup_test_storage().await);
        let birth_date = chrono::NaiveDate::from_ymd_opt(2004, 5, 1).unwrap();
        let ana = service
            .create_student(CreateStudentRequest {
                email: Some("ana@school.org".to_string()),
                phone: Some("555-0100".to_string()),
                birth_date: Some(birth_date),
                ..CreateStudentRequest::new("Ana", "Lee")
            })
            .await
            .unwrap();

        // 未出现的字段保持不变
        let kept = service
            .update_student(
                ana.id,
                UpdateStudentRequest {
                    first_name: Some("Anna".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(kept.email.as_deref(), Some("ana@school.org"));
        assert_eq!(kept.birth_date, Some(birth_date));

        let cleared = service
            .update_student(
                ana.id,
                UpdateStudentRequest {
                    email: Some(Some(String::new())),
                    phone: Some(None),
                    birth_date: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.email, None);
        assert_eq!(cleared.phone, None);
        assert_eq!(cleared.birth_date, None);
    }
}
