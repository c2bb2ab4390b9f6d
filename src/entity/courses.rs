//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
    pub start_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub duration_hours: f64,
    pub state: String,
    pub color: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_students::Entity")]
    CourseStudents,
    #[sea_orm(has_many = "super::attendances::Entity")]
    Attendances,
}

impl Related<super::course_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseStudents.def()
    }
}

impl Related<super::attendances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_students::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_students::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型，选课人数由存储层统计后传入
impl Model {
    pub fn into_course(self, student_count: i64) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseState};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            teacher_id: self.teacher_id,
            start_date: self.start_date,
            end_date: self.end_date,
            duration_hours: self.duration_hours,
            state: self
                .state
                .parse::<CourseState>()
                .unwrap_or(CourseState::Draft),
            color: self.color,
            student_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
