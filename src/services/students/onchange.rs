//! 学生表单提示
//!
//! 只返回警告或建议值，不阻止保存，也不写入数据。

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::models::Warning;
use crate::models::students::responses::StudentOnchangeResult;

const ADULT_AGE: i32 = 18;
const SENIOR_AGE: i32 = 65;
const EMAIL_DOMAIN: &str = "student.academy.com";

/// 按年份差计算周岁，今年生日未到则减一
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn on_birth_date_change(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> StudentOnchangeResult {
    let Some(birth_date) = birth_date else {
        return StudentOnchangeResult::default();
    };

    let age = age_on(birth_date, today);
    let warning = if age < ADULT_AGE {
        Some(Warning::new(
            "Underage Student",
            "This student is under 18 years old.",
        ))
    } else if age > SENIOR_AGE {
        Some(Warning::new(
            "Senior Student",
            "This student is over 65 years old.",
        ))
    } else {
        None
    };

    if let Some(ref w) = warning {
        warn!("{}: age {}", w.title, age);
    }

    StudentOnchangeResult {
        warning,
        suggested_email: None,
    }
}

/// 邮箱为空且姓名齐全时，建议 `名首字母.姓@student.academy.com`
pub fn on_name_change(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> StudentOnchangeResult {
    let has_email = email.is_some_and(|e| !e.is_empty());

    let suggested_email = match (first_name, last_name) {
        (Some(first), Some(last)) if !has_email && !first.is_empty() && !last.is_empty() => {
            first.chars().next().map(|initial| {
                let initial: String = initial.to_lowercase().collect();
                let last: String = last
                    .to_lowercase()
                    .chars()
                    .filter(|c| *c != ' ')
                    .collect();
                format!("{initial}.{last}@{EMAIL_DOMAIN}")
            })
        }
        _ => None,
    };

    StudentOnchangeResult {
        warning: None,
        suggested_email,
    }
}
