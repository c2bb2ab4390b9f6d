//! 考勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub course_id: i64,
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    // 毫秒时间戳
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub status: String,
    pub is_present: bool,
    pub notes: Option<String>,
    pub duration: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 解析考勤状态，未知值按草稿处理
    pub fn parsed_status(&self) -> crate::models::attendances::entities::AttendanceStatus {
        use crate::models::attendances::entities::AttendanceStatus;

        self.status
            .parse::<AttendanceStatus>()
            .unwrap_or(AttendanceStatus::Draft)
    }

    pub fn into_attendance(self) -> crate::models::attendances::entities::Attendance {
        use crate::models::attendances::entities::Attendance;
        use chrono::{DateTime, Utc};

        let status = self.parsed_status();

        Attendance {
            id: self.id,
            name: self.name,
            course_id: self.course_id,
            student_id: self.student_id,
            date: self.date,
            start_time: DateTime::<Utc>::from_timestamp_millis(self.start_time).unwrap_or_default(),
            end_time: self.end_time.and_then(DateTime::<Utc>::from_timestamp_millis),
            status,
            is_present: self.is_present,
            notes: self.notes,
            duration: self.duration,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
