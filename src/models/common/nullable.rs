use serde::{Deserialize, Deserializer};

/// 可清空字段的反序列化
///
/// 与 `#[serde(default)]` 配合使用：
/// - 字段缺失 => `None`（不修改）
/// - 字段为 `null` => `Some(None)`（清空）
/// - 字段有值 => `Some(Some(v))`
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
