pub mod actions;
pub mod constraints;
pub mod create;
pub mod delete;
pub mod enrollment;
pub mod get;
pub mod list;
pub mod onchange;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::Warning;
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    responses::{CourseListResponse, EnrollmentResponse},
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建课程
    pub async fn create_course(&self, course_data: CreateCourseRequest) -> Result<Course> {
        create::create_course(self, course_data).await
    }

    // 根据课程 ID 获取课程信息
    pub async fn get_course(&self, course_id: i64) -> Result<Course> {
        get::get_course(self, course_id).await
    }

    // 根据课程代码获取课程信息
    pub async fn get_course_by_code(&self, code: &str) -> Result<Course> {
        get::get_course_by_code(self, code).await
    }

    // 获取课程列表
    pub async fn list_courses(&self, query: CourseListQuery) -> Result<CourseListResponse> {
        list::list_courses(self, query).await
    }

    // 更新课程信息
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> Result<Course> {
        update::update_course(self, course_id, update_data).await
    }

    // 删除课程
    pub async fn delete_course(&self, course_id: i64) -> Result<()> {
        delete::delete_course(self, course_id).await
    }

    // 确认课程
    pub async fn confirm(&self, course_id: i64) -> Result<Course> {
        actions::confirm(self, course_id).await
    }

    // 开课
    pub async fn start(&self, course_id: i64) -> Result<Course> {
        actions::start(self, course_id).await
    }

    // 结课
    pub async fn complete(&self, course_id: i64) -> Result<Course> {
        actions::complete(self, course_id).await
    }

    // 学生选课
    pub async fn enroll_students(
        &self,
        course_id: i64,
        student_ids: &[i64],
    ) -> Result<EnrollmentResponse> {
        enrollment::enroll_students(self, course_id, student_ids).await
    }

    // 学生退课
    pub async fn unenroll_students(
        &self,
        course_id: i64,
        student_ids: &[i64],
    ) -> Result<EnrollmentResponse> {
        enrollment::unenroll_students(self, course_id, student_ids).await
    }

    // 课时变化提示
    pub fn on_duration_change(&self, duration_hours: f64) -> Option<Warning> {
        onchange::on_duration_change(duration_hours)
    }
}
