//! Academy Attendance - 课程考勤管理
//!
//! 管理课程、学生与考勤记录，负责约束校验、派生字段计算和状态动作。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（课程、学生、考勤）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
