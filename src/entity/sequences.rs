//! 序列实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sequences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub prefix: String,
    pub padding: i32,
    pub number_next: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 按前缀和补零位数格式化序号
    pub fn format_number(&self, number: i64) -> String {
        let width = self.padding.max(0) as usize;
        format!("{}{:0width$}", self.prefix, number)
    }
}
