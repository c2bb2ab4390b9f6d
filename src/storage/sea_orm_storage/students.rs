//! 学生存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, map_write_err};
use crate::entity::attendances::{Column as AttendanceColumn, Entity as Attendances};
use crate::entity::course_students::{Column as CourseStudentColumn, Entity as CourseStudents};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model as StudentModel};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    attendances::entities::AttendanceStatus,
    common::pagination::normalize_page,
    students::{
        entities::{AttendanceStats, Student, compute_full_name},
        requests::{NewStudent, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use tracing::debug;

const DUPLICATE_CODE: &str = "The Student code must be unique!";

/// 合并更新字段，修改姓名时按合并后的姓名重算全名
fn merge_student_update(
    existing: &StudentModel,
    update: &UpdateStudentRequest,
    now: i64,
) -> ActiveModel {
    let mut model = ActiveModel {
        id: Set(existing.id),
        updated_at: Set(now),
        ..Default::default()
    };

    if let Some(ref student_code) = update.student_code {
        model.student_code = Set(student_code.clone());
    }
    if let Some(ref first_name) = update.first_name {
        model.first_name = Set(first_name.clone());
    }
    if let Some(ref last_name) = update.last_name {
        model.last_name = Set(last_name.clone());
    }
    if update.touches_name() {
        let first_name = update.first_name.as_deref().unwrap_or(&existing.first_name);
        let last_name = update.last_name.as_deref().unwrap_or(&existing.last_name);
        model.full_name = Set(compute_full_name(Some(first_name), Some(last_name)));
    }
    if let Some(ref email) = update.email {
        model.email = Set(email.clone());
    }
    if let Some(ref phone) = update.phone {
        model.phone = Set(phone.clone());
    }
    if let Some(birth_date) = update.birth_date {
        model.birth_date = Set(birth_date);
    }
    if let Some(enrollment_date) = update.enrollment_date {
        model.enrollment_date = Set(Some(enrollment_date));
    }
    if let Some(is_active) = update.is_active {
        model.is_active = Set(is_active);
    }

    model
}

impl SeaOrmStorage {
    /// 将数据库模型转换为学生并填充选课数和考勤统计
    async fn enrich_students(&self, models: Vec<StudentModel>) -> Result<Vec<Student>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();

        let links = CourseStudents::find()
            .filter(CourseStudentColumn::StudentId.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生选课失败: {e}")))?;

        let mut course_counts: HashMap<i64, i64> = HashMap::new();
        for link in links {
            *course_counts.entry(link.student_id).or_insert(0) += 1;
        }

        let attendances = Attendances::find()
            .filter(AttendanceColumn::StudentId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生考勤失败: {e}")))?;

        let mut statuses: HashMap<i64, Vec<AttendanceStatus>> = HashMap::new();
        for attendance in attendances {
            statuses
                .entry(attendance.student_id)
                .or_default()
                .push(attendance.parsed_status());
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let total_courses = course_counts.get(&m.id).copied().unwrap_or(0);
                let stats = statuses
                    .get(&m.id)
                    .map(AttendanceStats::from_statuses)
                    .unwrap_or_default();
                m.into_student(total_courses, stats)
            })
            .collect())
    }

    async fn enrich_student(&self, model: Option<StudentModel>) -> Result<Option<Student>> {
        match model {
            Some(m) => Ok(self.enrich_students(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 创建学生，学号必须由服务层确定
    pub async fn create_student_impl(&self, req: NewStudent) -> Result<Student> {
        if req.student_code.is_empty() {
            return Err(AcademyError::database_operation(
                "student_code must be set before calling create_student",
            ));
        }

        let now = chrono::Utc::now().timestamp();
        let full_name = compute_full_name(Some(&req.first_name), Some(&req.last_name));

        let model = ActiveModel {
            student_code: Set(req.student_code),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            full_name: Set(full_name),
            email: Set(req.email),
            phone: Set(req.phone),
            birth_date: Set(req.birth_date),
            enrollment_date: Set(Some(req.enrollment_date)),
            is_active: Set(req.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "创建学生失败", DUPLICATE_CODE))?;

        Ok(result.into_student(0, AttendanceStats::default()))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生失败: {e}")))?;

        self.enrich_student(result).await
    }

    /// 通过学号获取学生
    pub async fn get_student_by_code_impl(&self, student_code: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentCode.eq(student_code))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生失败: {e}")))?;

        self.enrich_student(result).await
    }

    /// 批量获取学生
    pub async fn get_students_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Students::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生列表失败: {e}")))?;

        self.enrich_students(models).await
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Students::find();

        // 在读状态筛选
        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 课程筛选
        if let Some(course_id) = query.course_id {
            let student_ids: Vec<i64> = CourseStudents::find()
                .filter(CourseStudentColumn::CourseId.eq(course_id))
                .all(&self.db)
                .await
                .map_err(|e| {
                    AcademyError::database_operation(format!("查询课程学生失败: {e}"))
                })?
                .into_iter()
                .map(|link| link.student_id)
                .collect();
            select = select.filter(Column::Id.is_in(student_ids));
        }

        // 搜索条件：全名、学号或邮箱
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(keyword))
                    .add(Column::StudentCode.contains(keyword))
                    .add(Column::Email.contains(keyword)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::FullName).order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: self.enrich_students(students).await?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let Some(existing) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let result = merge_student_update(&existing, &update, now)
            .update(&self.db)
            .await
            .map_err(|e| map_write_err(e, "更新学生失败", DUPLICATE_CODE))?;

        self.enrich_student(Some(result)).await
    }

    /// 批量更新学生信息
    ///
    /// 在同一事务中逐条合并写入，每个学生的全名按各自合并后的姓名计算。
    /// 不存在的 ID 会被忽略。
    pub async fn update_students_impl(
        &self,
        ids: &[i64],
        update: UpdateStudentRequest,
    ) -> Result<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AcademyError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Students::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&txn)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询学生列表失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let mut updated = Vec::with_capacity(existing.len());
        for student in &existing {
            let result = merge_student_update(student, &update, now)
                .update(&txn)
                .await
                .map_err(|e| map_write_err(e, "批量更新学生失败", DUPLICATE_CODE))?;
            updated.push(result);
        }

        txn.commit()
            .await
            .map_err(|e| AcademyError::database_operation(format!("提交事务失败: {e}")))?;

        debug!("批量更新学生 {} 条", updated.len());

        self.enrich_students(updated).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::AcademyError;
    use crate::models::students::requests::NewStudent;
    use crate::test_utils::setup_test_storage;
    use chrono::NaiveDate;

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
    async fn test_duplicate_student_code_maps_to_validation() {
        let storage = setup_test_storage().await;

        storage.create_student(new_student("S1")).await.unwrap();
        let err = storage.create_student(new_student("S1")).await.unwrap_err();
        assert_eq!(err, AcademyError::validation("The Student code must be unique!"));
    }

    #[tokio::test]
    async fn test_create_student_requires_code() {
        let storage = setup_test_storage().await;

        let err = storage.create_student(new_student("")).await.unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
