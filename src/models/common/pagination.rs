use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// 规范化分页参数，返回 (page, size)，page 从 1 开始，size 限制在 1..=100
pub fn normalize_page(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1) as u64;
    let size = size.unwrap_or(10).clamp(1, 100) as u64;
    (page, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page_defaults() {
        assert_eq!(normalize_page(None, None), (1, 10));
    }

    #[test]
    fn test_normalize_page_clamping() {
        assert_eq!(normalize_page(Some(-3), Some(500)), (1, 100));
        assert_eq!(normalize_page(Some(4), Some(0)), (4, 1));
    }
}
