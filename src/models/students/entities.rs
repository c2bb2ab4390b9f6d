use crate::models::attendances::entities::AttendanceStatus;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    // 由名和姓计算，随姓名修改重新生成
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub enrollment_date: Option<chrono::NaiveDate>,
    pub is_active: bool,
    // 以下统计字段在读取时计算
    pub total_courses: i64,
    pub total_attended: i64,
    pub total_missed: i64,
    pub attendance_rate: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 显示名称：`[学号] 全名`
    pub fn display_label(&self) -> String {
        format!("[{}] {}", self.student_code, self.full_name)
    }
}

/// 计算全名：`名 姓` 去除首尾空白，缺失部分按空字符串处理
pub fn compute_full_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    )
    .trim()
    .to_string()
}

/// 考勤统计
///
/// 只统计非草稿记录：出勤率 = 出勤数 / 非草稿数 × 100，没有非草稿记录时为 0。
/// 迟到和请假既不算出勤也不算缺勤，但计入分母。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttendanceStats {
    pub total_attended: i64,
    pub total_missed: i64,
    pub attendance_rate: f64,
}

impl AttendanceStats {
    pub fn from_statuses<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceStatus>,
    {
        let mut counted = 0i64;
        let mut present = 0i64;
        let mut absent = 0i64;

        for status in statuses {
            match status {
                AttendanceStatus::Draft => continue,
                AttendanceStatus::Present => present += 1,
                AttendanceStatus::Absent => absent += 1,
                AttendanceStatus::Late | AttendanceStatus::Excused => {}
            }
            counted += 1;
        }

        let attendance_rate = if counted > 0 {
            present as f64 / counted as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_attended: present,
            total_missed: absent,
            attendance_rate,
        }
    }
}
