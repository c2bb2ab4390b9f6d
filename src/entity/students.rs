//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub enrollment_date: Option<chrono::NaiveDate>,
    pub is_active: bool,
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

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_students::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_students::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(
        self,
        total_courses: i64,
        stats: crate::models::students::entities::AttendanceStats,
    ) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            enrollment_date: self.enrollment_date,
            is_active: self.is_active,
            total_courses,
            total_attended: stats.total_attended,
            total_missed: stats.total_missed,
            attendance_rate: stats.attendance_rate,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
