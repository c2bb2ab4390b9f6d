use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::attendances::requests::CreateAttendanceRequest;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::students::requests::CreateStudentRequest;
use crate::services::{AttendanceService, CourseService, StudentService};
use crate::storage::Storage;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub courses: CourseService,
    pub students: StudentService,
    pub attendances: AttendanceService,
}

impl StartupContext {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            courses: CourseService::new(storage.clone()),
            students: StudentService::new(storage.clone()),
            attendances: AttendanceService::new(storage.clone()),
            storage,
        }
    }
}

/// 写入演示数据
/// 如果数据库中已有课程，则跳过
pub async fn seed_demo_data(context: &StartupContext) -> Result<()> {
    let count = context.storage.count_courses().await?;
    if count > 0 {
        debug!(
            "Database already has {} course(s), skipping demo data",
            count
        );
        return Ok(());
    }

    info!("No courses found in database, loading demo data...");
    let today = Utc::now().date_naive();

    let python = context
        .courses
        .create_course(CreateCourseRequest {
            name: "Python Programming".to_string(),
            code: "PY-101".to_string(),
            description: Some("Introduction to programming with Python".to_string()),
            teacher_id: None,
            start_date: Some(today - Duration::days(30)),
            end_date: Some(today + Duration::days(60)),
            duration_hours: Some(2.0),
            color: Some(1),
        })
        .await?;
    let databases = context
        .courses
        .create_course(CreateCourseRequest {
            name: "Database Design".to_string(),
            code: "DB-201".to_string(),
            description: Some("Relational modelling and SQL".to_string()),
            teacher_id: None,
            start_date: Some(today - Duration::days(14)),
            end_date: None,
            duration_hours: Some(3.0),
            color: Some(4),
        })
        .await?;
    context.courses.confirm(python.id).await?;
    context.courses.start(databases.id).await?;

    let mut student_ids = Vec::new();
    for (first_name, last_name) in [("Ana", "Lee"), ("Bruno", "Costa"), ("Chen", "Wei")] {
        let email = context
            .students
            .on_name_change(Some(first_name), Some(last_name), None)
            .suggested_email;
        let student = context
            .students
            .create_student(CreateStudentRequest {
                email,
                ..CreateStudentRequest::new(first_name, last_name)
            })
            .await?;
        student_ids.push(student.id);
    }

    context
        .courses
        .enroll_students(python.id, &student_ids)
        .await?;
    context
        .courses
        .enroll_students(databases.id, &student_ids[..2])
        .await?;

    // 昨天的考勤：第一个学生出勤，第二个缺勤，第三个迟到
    let yesterday = Utc::now() - Duration::days(1);
    for (index, student_id) in student_ids.iter().enumerate() {
        let attendance = context
            .attendances
            .create_attendance(CreateAttendanceRequest {
                date: Some(yesterday.date_naive()),
                start_time: Some(yesterday),
                end_time: Some(yesterday + Duration::hours(2)),
                ..CreateAttendanceRequest::new(python.id, *student_id)
            })
            .await?;
        match index {
            0 => context.attendances.mark_present(attendance.id).await?,
            1 => context.attendances.mark_absent(attendance.id).await?,
            _ => context.attendances.mark_late(attendance.id).await?,
        };
    }

    info!(
        "Demo data loaded: 2 courses, {} students",
        student_ids.len()
    );
    Ok(())
}

/// 准备启动的上下文
/// 包括 TLS 提供者、存储（含迁移）和演示数据
pub async fn prepare_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let context = StartupContext::new(storage);

    if AppConfig::get().app.load_demo_data
        && let Err(e) = seed_demo_data(&context).await
    {
        warn!("Failed to load demo data: {}", e);
    }

    Ok(context)
}
