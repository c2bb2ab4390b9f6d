use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

pub const ACT_WINDOW: &str = "ir.actions.act_window";

// 过滤条件：字段 / 操作符 / 值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/action.ts")]
pub struct DomainFilter {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

impl DomainFilter {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// 窗口动作描述
///
/// 导航类操作的返回值：告诉界面打开哪个模型、使用哪些视图、如何过滤以及新建记录时的默认值。
/// 本身不包含任何业务逻辑。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/action.ts")]
pub struct WindowAction {
    pub name: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub res_model: String,
    pub view_mode: String,
    pub domain: Vec<DomainFilter>,
    pub context: BTreeMap<String, serde_json::Value>,
}

impl WindowAction {
    pub fn new(name: impl Into<String>, res_model: impl Into<String>, view_mode: &[&str]) -> Self {
        Self {
            name: name.into(),
            action_type: ACT_WINDOW.to_string(),
            res_model: res_model.into(),
            view_mode: view_mode.join(","),
            domain: Vec::new(),
            context: BTreeMap::new(),
        }
    }

    pub fn with_domain(mut self, filter: DomainFilter) -> Self {
        self.domain.push(filter);
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
