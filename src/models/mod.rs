//! 业务模型定义
//!
//! 与 `entity` 模块中的数据库实体分离，供服务层与调用方使用。

pub mod attendances;
pub mod common;
pub mod courses;
pub mod students;

pub use common::{DomainFilter, PaginationInfo, Warning, WindowAction};
