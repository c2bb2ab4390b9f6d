use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程代码获取课程信息
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    // 删除课程（级联删除选课和考勤）
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 课程总数
    async fn count_courses(&self) -> Result<i64>;

    /// 选课管理方法
    // 学生选课，已选的跳过，返回新增数量
    async fn enroll_students(&self, course_id: i64, student_ids: &[i64]) -> Result<u64>;
    // 学生退课，返回移除数量
    async fn unenroll_students(&self, course_id: i64, student_ids: &[i64]) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: NewStudent) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_code(&self, student_code: &str) -> Result<Option<Student>>;
    // 批量获取学生信息，按 ID 升序
    async fn get_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 批量更新学生信息，逐条重算全名
    async fn update_students(
        &self,
        ids: &[i64],
        update: UpdateStudentRequest,
    ) -> Result<Vec<Student>>;
    // 删除学生（级联删除选课和考勤）
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 创建考勤
    async fn create_attendance(&self, attendance: NewAttendance) -> Result<Attendance>;
    // 通过ID获取考勤信息
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>>;
    // 同一课程、学生、日期是否已有考勤记录
    async fn attendance_exists(
        &self,
        course_id: i64,
        student_id: i64,
        date: chrono::NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<bool>;
    // 列出考勤
    async fn list_attendances_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 更新考勤信息
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>>;
    // 删除考勤
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 序列方法
    // 取下一个序号，序列不存在时返回 None
    async fn next_sequence_by_code(&self, code: &str) -> Result<Option<String>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
