//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendances;
mod courses;
mod sequences;
mod students;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AcademyError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, &config.database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AcademyError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AcademyError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库不支持 WAL
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存数据库每个连接互相独立，只能使用单连接
        let max_connections = if in_memory { 1 } else { config.pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(if in_memory {
                None
            } else {
                Some(Duration::from_secs(300))
            })
            .max_lifetime(if in_memory {
                None
            } else {
                Some(Duration::from_secs(1800))
            })
            .connect_with(opt)
            .await
            .map_err(|e| AcademyError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AcademyError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AcademyError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 写操作错误映射：唯一索引冲突视为校验错误，其余为数据库操作错误
pub(crate) fn map_write_err(err: DbErr, context: &str, unique_message: &str) -> AcademyError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AcademyError::validation(unique_message),
        _ => AcademyError::database_operation(format!("{context}: {err}")),
    }
}

// Storage trait 实现
use crate::models::{
    attendances::{
        entities::Attendance,
        requests::{AttendanceListQuery, NewAttendance, UpdateAttendanceRequest},
        responses::AttendanceListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, NewCourse, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    students::{
        entities::Student,
        requests::{NewStudent, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 课程模块
    async fn create_course(&self, course: NewCourse) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn count_courses(&self) -> Result<i64> {
        self.count_courses_impl().await
    }

    // 选课模块
    async fn enroll_students(&self, course_id: i64, student_ids: &[i64]) -> Result<u64> {
        self.enroll_students_impl(course_id, student_ids).await
    }

    async fn unenroll_students(&self, course_id: i64, student_ids: &[i64]) -> Result<u64> {
        self.unenroll_students_impl(course_id, student_ids).await
    }

    // 学生模块
    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_code(&self, student_code: &str) -> Result<Option<Student>> {
        self.get_student_by_code_impl(student_code).await
    }

    async fn get_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>> {
        self.get_students_by_ids_impl(ids).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn update_students(
        &self,
        ids: &[i64],
        update: UpdateStudentRequest,
    ) -> Result<Vec<Student>> {
        self.update_students_impl(ids, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 考勤模块
    async fn create_attendance(&self, attendance: NewAttendance) -> Result<Attendance> {
        self.create_attendance_impl(attendance).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn attendance_exists(
        &self,
        course_id: i64,
        student_id: i64,
        date: chrono::NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        self.attendance_exists_impl(course_id, student_id, date, exclude_id)
            .await
    }

    async fn list_attendances_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendances_with_pagination_impl(query).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 序列模块
    async fn next_sequence_by_code(&self, code: &str) -> Result<Option<String>> {
        self.next_sequence_by_code_impl(code).await
    }
}
