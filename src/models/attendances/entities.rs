use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
//
// 草稿为初始状态，没有终态；任一状态都可以直接切换到其它状态。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/attendance.ts")]
pub enum AttendanceStatus {
    Draft,   // 草稿
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
    Excused, // 请假
}

impl AttendanceStatus {
    pub const DRAFT: &'static str = "draft";
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const LATE: &'static str = "late";
    pub const EXCUSED: &'static str = "excused";

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Draft => Self::DRAFT,
            AttendanceStatus::Present => Self::PRESENT,
            AttendanceStatus::Absent => Self::ABSENT,
            AttendanceStatus::Late => Self::LATE,
            AttendanceStatus::Excused => Self::EXCUSED,
        }
    }

    /// 勾选/取消“出勤”时对应的状态
    pub fn from_presence(is_present: bool) -> Self {
        if is_present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AttendanceStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: draft, present, absent, late, excused"
            ))
        })
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AttendanceStatus::DRAFT => Ok(AttendanceStatus::Draft),
            AttendanceStatus::PRESENT => Ok(AttendanceStatus::Present),
            AttendanceStatus::ABSENT => Ok(AttendanceStatus::Absent),
            AttendanceStatus::LATE => Ok(AttendanceStatus::Late),
            AttendanceStatus::EXCUSED => Ok(AttendanceStatus::Excused),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    // 流水号，序列缺失时为空
    pub name: Option<String>,
    pub course_id: i64,
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub status: AttendanceStatus,
    pub is_present: bool,
    pub notes: Option<String>,
    // 时长（小时），随开始/结束时间重新计算
    pub duration: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 截断到毫秒，与存储精度一致
pub fn truncate_to_millis(time: chrono::DateTime<chrono::Utc>) -> chrono::DateTime<chrono::Utc> {
    use chrono::SubsecRound;

    time.trunc_subsecs(3)
}

/// 计算考勤时长（小时）：结束时间未设置时为 0
///
/// 按毫秒精度计算，同样的开始/结束时间无论写入几次结果都相同。
pub fn compute_duration(
    start_time: chrono::DateTime<chrono::Utc>,
    end_time: Option<chrono::DateTime<chrono::Utc>>,
) -> f64 {
    match end_time {
        Some(end) => {
            let millis =
                (truncate_to_millis(end) - truncate_to_millis(start_time)).num_milliseconds();
            millis as f64 / 3_600_000.0
        }
        None => 0.0,
    }
}
