//! 课程与选课存储操作

use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, map_write_err};
use crate::entity::course_students::{
    ActiveModel as CourseStudentActiveModel, Column as CourseStudentColumn,
    Entity as CourseStudents,
};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Model as CourseModel};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    common::pagination::normalize_page,
    courses::{
        entities::{Course, CourseState},
        requests::{CourseListQuery, NewCourse, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::debug;

const DUPLICATE_CODE: &str = "The course code must be unique!";

impl SeaOrmStorage {
    /// 批量统计课程的选课人数
    async fn count_course_students(&self, course_ids: &[i64]) -> Result<HashMap<i64, i64>> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = CourseStudents::find()
            .filter(CourseStudentColumn::CourseId.is_in(course_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课人数失败: {e}")))?;

        let mut counts = HashMap::new();
        for link in links {
            *counts.entry(link.course_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// 将数据库模型转换为课程并填充选课人数
    async fn enrich_courses(&self, models: Vec<CourseModel>) -> Result<Vec<Course>> {
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let counts = self.count_course_students(&ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let count = counts.get(&m.id).copied().unwrap_or(0);
                m.into_course(count)
            })
            .collect())
    }

    async fn enrich_course(&self, model: Option<CourseModel>) -> Result<Option<Course>> {
        match model {
            Some(m) => Ok(self.enrich_courses(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 创建课程，新课程总是草稿状态
    pub async fn create_course_impl(&self, req: NewCourse) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            description: Set(req.description),
            teacher_id: Set(req.teacher_id),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            duration_hours: Set(req.duration_hours),
            state: Set(CourseState::Draft.to_string()),
            color: Set(req.color),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "创建课程失败", DUPLICATE_CODE))?;

        Ok(result.into_course(0))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?;

        self.enrich_course(result).await
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?;

        self.enrich_course(result).await
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Courses::find();

        // 状态筛选
        if let Some(state) = query.state {
            select = select.filter(Column::State.eq(state.to_string()));
        }

        // 学生筛选
        if let Some(student_id) = query.student_id {
            let course_ids: Vec<i64> = CourseStudents::find()
                .filter(CourseStudentColumn::StudentId.eq(student_id))
                .all(&self.db)
                .await
                .map_err(|e| {
                    AcademyError::database_operation(format!("查询学生选课失败: {e}"))
                })?
                .into_iter()
                .map(|link| link.course_id)
                .collect();
            select = select.filter(Column::Id.is_in(course_ids));
        }

        // 搜索条件：名称或代码
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(keyword))
                    .add(Column::Code.contains(keyword)),
            );
        }

        // 排序
        select = select
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: self.enrich_courses(courses).await?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date);
        }
        if let Some(duration_hours) = update.duration_hours {
            model.duration_hours = Set(duration_hours);
        }
        if let Some(state) = update.state {
            model.state = Set(state.to_string());
        }
        if let Some(color) = update.color {
            model.color = Set(color);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err(e, "更新课程失败", DUPLICATE_CODE))?;

        self.enrich_course(Some(result)).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程总数
    pub async fn count_courses_impl(&self) -> Result<i64> {
        let count = Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询课程数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 学生选课，已选的学生跳过
    pub async fn enroll_students_impl(&self, course_id: i64, student_ids: &[i64]) -> Result<u64> {
        if student_ids.is_empty() {
            return Ok(0);
        }

        let existing: HashSet<i64> = CourseStudents::find()
            .filter(CourseStudentColumn::CourseId.eq(course_id))
            .filter(CourseStudentColumn::StudentId.is_in(student_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课记录失败: {e}")))?
            .into_iter()
            .map(|link| link.student_id)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut seen = HashSet::new();
        let links: Vec<CourseStudentActiveModel> = student_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id) && seen.insert(*id))
            .map(|student_id| CourseStudentActiveModel {
                course_id: Set(course_id),
                student_id: Set(student_id),
                enrolled_at: Set(now),
                ..Default::default()
            })
            .collect();

        let inserted = links.len() as u64;
        if inserted == 0 {
            debug!("课程 {} 的学生均已选课", course_id);
            return Ok(0);
        }

        CourseStudents::insert_many(links)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("选课失败: {e}")))?;

        Ok(inserted)
    }

    /// 学生退课
    pub async fn unenroll_students_impl(
        &self,
        course_id: i64,
        student_ids: &[i64],
    ) -> Result<u64> {
        if student_ids.is_empty() {
            return Ok(0);
        }

        let result = CourseStudents::delete_many()
            .filter(
                Condition::all()
                    .add(CourseStudentColumn::CourseId.eq(course_id))
                    .add(CourseStudentColumn::StudentId.is_in(student_ids.to_vec())),
            )
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::AcademyError;
    use crate::models::courses::requests::NewCourse;
    use crate::test_utils::setup_test_storage;
    use chrono::NaiveDate;

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

    #[tokio::test]
    async fn test_duplicate_course_code_maps_to_validation() {
        let storage = setup_test_storage().await;

        storage.create_course(new_course("C1")).await.unwrap();
        let err = storage.create_course(new_course("C1")).await.unwrap_err();
        assert_eq!(err, AcademyError::validation("The course code must be unique!"));
        assert_eq!(storage.count_courses().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_code_maps_to_validation() {
        let storage = setup_test_storage().await;

        storage.create_course(new_course("C1")).await.unwrap();
        let second = storage.create_course(new_course("C2")).await.unwrap();
        let err = storage
            .update_course(
                second.id,
                crate::models::courses::requests::UpdateCourseRequest {
                    code: Some("C1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, AcademyError::validation("The course code must be unique!"));
    }
}
