pub mod constraints;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod navigation;
pub mod onchange;
pub mod update;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::WindowAction;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    responses::{StudentLabel, StudentListResponse, StudentOnchangeResult},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建学生
    pub async fn create_student(&self, student_data: CreateStudentRequest) -> Result<Student> {
        create::create_student(self, student_data).await
    }

    // 根据学生 ID 获取学生信息
    pub async fn get_student(&self, student_id: i64) -> Result<Student> {
        get::get_student(self, student_id).await
    }

    // 获取学生列表
    pub async fn list_students(&self, query: StudentListQuery) -> Result<StudentListResponse> {
        list::list_students(self, query).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
    ) -> Result<Student> {
        update::update_student(self, student_id, update_data).await
    }

    // 批量更新学生信息
    pub async fn update_students(
        &self,
        student_ids: &[i64],
        update_data: UpdateStudentRequest,
    ) -> Result<Vec<Student>> {
        update::update_students(self, student_ids, update_data).await
    }

    // 删除学生
    pub async fn delete_student(&self, student_id: i64) -> Result<()> {
        delete::delete_student(self, student_id).await
    }

    // 显示名称
    pub async fn name_get(&self, student_ids: &[i64]) -> Result<Vec<StudentLabel>> {
        get::name_get(self, student_ids).await
    }

    // 查看学生考勤
    pub async fn action_view_attendances(&self, student_ids: &[i64]) -> Result<WindowAction> {
        navigation::action_view_attendances(self, student_ids).await
    }

    // 查看学生课程
    pub async fn action_view_courses(&self, student_ids: &[i64]) -> Result<WindowAction> {
        navigation::action_view_courses(self, student_ids).await
    }

    // 出生日期变化提示
    pub fn on_birth_date_change(&self, birth_date: Option<NaiveDate>) -> StudentOnchangeResult {
        onchange::on_birth_date_change(birth_date, chrono::Utc::now().date_naive())
    }

    // 姓名变化时建议邮箱
    pub fn on_name_change(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> StudentOnchangeResult {
        onchange::on_name_change(first_name, last_name, email)
    }
}
