pub mod actions;
pub mod constraints;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendances::{
    entities::{Attendance, AttendanceStatus},
    requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
    responses::AttendanceListResponse,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Arc<dyn Storage>,
}

impl AttendanceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建考勤
    pub async fn create_attendance(
        &self,
        attendance_data: CreateAttendanceRequest,
    ) -> Result<Attendance> {
        create::create_attendance(self, attendance_data).await
    }

    // 根据考勤 ID 获取考勤信息
    pub async fn get_attendance(&self, attendance_id: i64) -> Result<Attendance> {
        get::get_attendance(self, attendance_id).await
    }

    // 获取考勤列表
    pub async fn list_attendances(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        list::list_attendances(self, query).await
    }

    // 更新考勤信息
    pub async fn update_attendance(
        &self,
        attendance_id: i64,
        update_data: UpdateAttendanceRequest,
    ) -> Result<Attendance> {
        update::update_attendance(self, attendance_id, update_data).await
    }

    // 删除考勤
    pub async fn delete_attendance(&self, attendance_id: i64) -> Result<()> {
        delete::delete_attendance(self, attendance_id).await
    }

    // 标记出勤
    pub async fn mark_present(&self, attendance_id: i64) -> Result<Attendance> {
        actions::mark_present(self, attendance_id).await
    }

    // 标记缺勤
    pub async fn mark_absent(&self, attendance_id: i64) -> Result<Attendance> {
        actions::mark_absent(self, attendance_id).await
    }

    // 标记迟到
    pub async fn mark_late(&self, attendance_id: i64) -> Result<Attendance> {
        actions::mark_late(self, attendance_id).await
    }

    // 切换出勤勾选并同步状态
    pub async fn set_presence(&self, attendance_id: i64, is_present: bool) -> Result<Attendance> {
        actions::set_presence(self, attendance_id, is_present).await
    }

    // 出勤勾选变化时对应的状态
    pub fn on_is_present_change(&self, is_present: bool) -> AttendanceStatus {
        AttendanceStatus::from_presence(is_present)
    }
}
