//! 序列存储操作

use super::SeaOrmStorage;
use crate::entity::sequences::{Column, Entity as Sequences};
use crate::errors::{AcademyError, Result};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use tracing::debug;

impl SeaOrmStorage {
    /// 取下一个序号
    ///
    /// 先在事务内自增计数器再读取，并发调用不会拿到相同的序号。
    pub async fn next_sequence_by_code_impl(&self, code: &str) -> Result<Option<String>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AcademyError::database_operation(format!("开启事务失败: {e}")))?;

        let result = Sequences::update_many()
            .col_expr(Column::NumberNext, Expr::col(Column::NumberNext).add(1))
            .filter(Column::Code.eq(code))
            .exec(&txn)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新序列失败: {e}")))?;

        if result.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| AcademyError::database_operation(format!("回滚事务失败: {e}")))?;
            debug!("序列 {} 不存在", code);
            return Ok(None);
        }

        let sequence = Sequences::find_by_id(code.to_string())
            .one(&txn)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询序列失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AcademyError::database_operation(format!("提交事务失败: {e}")))?;

        // 计数器已自增，本次使用的是自增前的值
        Ok(sequence.map(|s| s.format_number(s.number_next - 1)))
    }
}
