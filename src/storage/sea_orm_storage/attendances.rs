//! 考勤存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    attendances::{
        entities::{Attendance, compute_duration, truncate_to_millis},
        requests::{AttendanceListQuery, NewAttendance, UpdateAttendanceRequest},
        responses::AttendanceListResponse,
    },
    common::pagination::normalize_page,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

const DUPLICATE_RECORD: &str = "Attendance for this student and course on this date already exists!";

impl SeaOrmStorage {
    /// 创建考勤，时长按开始/结束时间计算
    pub async fn create_attendance_impl(&self, req: NewAttendance) -> Result<Attendance> {
        let now = Utc::now().timestamp();
        let start_time = truncate_to_millis(req.start_time);
        let end_time = req.end_time.map(truncate_to_millis);
        let duration = compute_duration(start_time, end_time);

        let model = ActiveModel {
            name: Set(req.name),
            course_id: Set(req.course_id),
            student_id: Set(req.student_id),
            date: Set(req.date),
            start_time: Set(start_time.timestamp_millis()),
            end_time: Set(end_time.map(|t| t.timestamp_millis())),
            status: Set(req.status.to_string()),
            is_present: Set(req.is_present),
            notes: Set(req.notes),
            duration: Set(duration),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "创建考勤失败", DUPLICATE_RECORD))?;

        Ok(result.into_attendance())
    }

    /// 通过 ID 获取考勤
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<Attendance>> {
        let result = Attendances::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 同一课程、学生、日期是否已有考勤（可排除自身）
    pub async fn attendance_exists_impl(
        &self,
        course_id: i64,
        student_id: i64,
        date: chrono::NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut select = Attendances::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Date.eq(date));

        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(count > 0)
    }

    /// 分页列出考勤
    pub async fn list_attendances_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Attendances::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 日期区间，两端均包含
        if let Some(date_from) = query.date_from {
            select = select.filter(Column::Date.gte(date_from));
        }
        if let Some(date_to) = query.date_to {
            select = select.filter(Column::Date.lte(date_to));
        }

        // 排序
        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::StartTime)
            .order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考勤页数失败: {e}")))?;

        let attendances = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(AttendanceListResponse {
            items: attendances
                .into_iter()
                .map(|m| m.into_attendance())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新考勤信息，时长按合并后的开始/结束时间重算
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        // 先检查考勤是否存在
        let Some(existing) = Attendances::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询考勤失败: {e}")))?
        else {
            return Ok(None);
        };

        let now = Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if update.start_time.is_some() || update.end_time.is_some() {
            let start_time = match update.start_time {
                Some(start_time) => truncate_to_millis(start_time),
                None => DateTime::<Utc>::from_timestamp_millis(existing.start_time)
                    .unwrap_or_default(),
            };
            // Some(None) 清空结束时间，时长归零
            let end_time = match update.end_time {
                Some(end_time) => end_time.map(truncate_to_millis),
                None => existing
                    .end_time
                    .and_then(DateTime::<Utc>::from_timestamp_millis),
            };

            model.start_time = Set(start_time.timestamp_millis());
            model.end_time = Set(end_time.map(|t| t.timestamp_millis()));
            model.duration = Set(compute_duration(start_time, end_time));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(is_present) = update.is_present {
            model.is_present = Set(is_present);
        }
        if let Some(notes) = update.notes {
            model.notes = Set(notes);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err(e, "更新考勤失败", DUPLICATE_RECORD))?;

        Ok(Some(result.into_attendance()))
    }

    /// 删除考勤
    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = Attendances::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除考勤失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::AcademyError;
    use crate::models::attendances::{entities::AttendanceStatus, requests::NewAttendance};
    use crate::models::courses::requests::NewCourse;
    use crate::models::students::requests::NewStudent;
    use crate::test_utils::setup_test_storage;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn new_course(code: &str) -> NewCourse {
        NewCourse {
            name: "Intro".to_string(),
            code: code.to_string(),
            description: None,
            teacher_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
            duration_hours: 1.0,
            color: 0,
        }
    }

    fn new_student(code: &str) -> NewStudent {
        NewStudent {
            student_code: code.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: None,
            phone: None,
            birth_date: None,
            enrollment_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_duplicate_record_maps_to_validation() {
        let storage = setup_test_storage().await;
        let course = storage.create_course(new_course("C1")).await.unwrap();
        let student = storage.create_student(new_student("S1")).await.unwrap();

        let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let record = NewAttendance {
            name: None,
            course_id: course.id,
            student_id: student.id,
            date: start.date_naive(),
            start_time: start,
            end_time: None,
            status: AttendanceStatus::Draft,
            is_present: false,
            notes: None,
        };

        storage.create_attendance(record.clone()).await.unwrap();
        let err = storage.create_attendance(record).await.unwrap_err();
        assert_eq!(
            err,
            AcademyError::validation(
                "Attendance for this student and course on this date already exists!"
            )
        );
    }
}
