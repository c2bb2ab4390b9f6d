use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/course.ts")]
pub enum CourseState {
    Draft,      // 草稿
    Confirmed,  // 已确认
    InProgress, // 进行中
    Completed,  // 已结束
    Cancelled,  // 已取消
}

impl CourseState {
    pub const DRAFT: &'static str = "draft";
    pub const CONFIRMED: &'static str = "confirmed";
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const COMPLETED: &'static str = "completed";
    pub const CANCELLED: &'static str = "cancelled";

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseState::Draft => Self::DRAFT,
            CourseState::Confirmed => Self::CONFIRMED,
            CourseState::InProgress => Self::IN_PROGRESS,
            CourseState::Completed => Self::COMPLETED,
            CourseState::Cancelled => Self::CANCELLED,
        }
    }
}

impl<'de> Deserialize<'de> for CourseState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CourseState>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课程状态: '{s}'. 支持的状态: draft, confirmed, in_progress, completed, cancelled"
            ))
        })
    }
}

impl std::fmt::Display for CourseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CourseState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseState::DRAFT => Ok(CourseState::Draft),
            CourseState::CONFIRMED => Ok(CourseState::Confirmed),
            CourseState::IN_PROGRESS => Ok(CourseState::InProgress),
            CourseState::COMPLETED => Ok(CourseState::Completed),
            CourseState::CANCELLED => Ok(CourseState::Cancelled),
            _ => Err(format!("Invalid course state: {s}")),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    // 授课教师（外部联系人 ID）
    pub teacher_id: Option<i64>,
    pub start_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub duration_hours: f64,
    pub state: CourseState,
    // 看板颜色索引
    pub color: i32,
    // 已选课学生数（读取时计算）
    pub student_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_state_round_trips_through_str() {
        for state in [
            CourseState::Draft,
            CourseState::Confirmed,
            CourseState::InProgress,
            CourseState::Completed,
            CourseState::Cancelled,
        ] {
            assert_eq!(state.to_string().parse::<CourseState>(), Ok(state));
        }
    }

    #[test]
    fn test_course_state_rejects_unknown_value() {
        assert!("archived".parse::<CourseState>().is_err());
        let err = serde_json::from_str::<CourseState>("\"archived\"").unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_course_state_serializes_snake_case() {
        let json = serde_json::to_string(&CourseState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
