//! 课程约束校验
//!
//! 创建和更新前对合并后的记录执行，任一失败都会中止整个写入。

use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::{AcademyError, Result};
use crate::storage::Storage;

/// 结束日期不能早于开始日期
pub fn check_dates(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Result<()> {
    match end_date {
        Some(end) if end < start_date => Err(AcademyError::validation(
            "Start date must be before end date!",
        )),
        _ => Ok(()),
    }
}

/// 课时必须为正数
pub fn check_duration(duration_hours: f64) -> Result<()> {
    if duration_hours.is_nan() || duration_hours <= 0.0 {
        return Err(AcademyError::validation("Duration must be positive!"));
    }
    Ok(())
}

/// 课程代码唯一（排除自身）
pub async fn check_unique_code(
    storage: &Arc<dyn Storage>,
    code: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    if let Some(existing) = storage.get_course_by_code(code).await?
        && Some(existing.id) != exclude_id
    {
        return Err(AcademyError::validation("The course code must be unique!"));
    }
    Ok(())
}
