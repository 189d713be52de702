use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Downloads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Downloads::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Downloads::Provider)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Downloads::Size).string_len(100).not_null())
                    .col(ColumnDef::new(Downloads::Link).text().not_null())
                    .col(
                        ColumnDef::new(Downloads::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Downloads::Category)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Downloads::SiteId).char_len(36).not_null())
                    .col(
                        ColumnDef::new(Downloads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Downloads::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Downloads::Table, Downloads::SiteId)
                            .to(Sites::Table, Sites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Downloads::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Downloads {
    Table,
    Id,
    Provider,
    Size,
    Link,
    Published,
    Category,
    SiteId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sites {
    Table,
    Id,
}
