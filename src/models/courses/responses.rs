use super::entities::Course;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "generated/course.ts")]
pub struct CourseListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Course>,
}

// 选课变更结果
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "generated/course.ts")]
pub struct EnrollmentResponse {
    pub course_id: i64,
    // 本次实际变更的学生数
    pub affected: i64,
    pub student_count: i64,
}
