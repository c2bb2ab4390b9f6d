use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 内置序列: (code, prefix, padding)
const BUILTIN_SEQUENCES: [(&str, &str, i32); 2] = [
    ("academy.student.code", "STU", 3),
    ("academy.attendance", "ATT/", 5),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 序列表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Sequences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sequences::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sequences::Prefix).string().not_null())
                    .col(ColumnDef::new(Sequences::Padding).integer().not_null())
                    .col(
                        ColumnDef::new(Sequences::NumberNext)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 初始序列 ====================
        for (code, prefix, padding) in BUILTIN_SEQUENCES {
            let insert = Query::insert()
                .into_table(Sequences::Table)
                .columns([
                    Sequences::Code,
                    Sequences::Prefix,
                    Sequences::Padding,
                    Sequences::NumberNext,
                ])
                .values_panic([code.into(), prefix.into(), padding.into(), 1i64.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sequences::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sequences {
    #[sea_orm(iden = "sequences")]
    Table,
    Code,
    Prefix,
    Padding,
    NumberNext,
}
