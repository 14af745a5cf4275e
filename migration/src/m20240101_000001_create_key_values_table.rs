use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KeyValues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(KeyValues::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(KeyValues::Value).text().not_null())
                    .col(
                        ColumnDef::new(KeyValues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KeyValues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum KeyValues {
    Table,
    Key,
    Value,
    UpdatedAt,
}
