use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 提示性警告
///
/// 由 onchange 类检查返回给调用方展示，不会阻止保存，也不会修改数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/warning.ts")]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl Warning {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
