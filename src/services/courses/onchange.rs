use tracing::warn;

use crate::models::Warning;

// 超过该课时给出提示
const LONG_COURSE_HOURS: f64 = 4.0;

/// 课时变化提示，只返回警告，不修改数据
pub fn on_duration_change(duration_hours: f64) -> Option<Warning> {
    if duration_hours > LONG_COURSE_HOURS {
        warn!("课时过长: {} 小时", duration_hours);
        return Some(Warning::new(
            "Long Course Warning",
            "This course is quite long. Consider adding breaks.",
        ));
    }
    None
}
