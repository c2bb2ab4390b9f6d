//! 测试辅助：内存 SQLite 存储（已运行迁移）

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;

pub async fn setup_test_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config.url, &config)
        .await
        .expect("Failed to create in-memory storage");
    Arc::new(storage)
}
