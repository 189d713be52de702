use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Unique index is the authoritative duplicate-slug signal;
                    // the usecase precheck only improves the error message.
                    .col(
                        ColumnDef::new(Pages::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Pages::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Pages::Content).text().not_null())
                    .col(
                        ColumnDef::new(Pages::Published)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Pages::MetaDescription).string_len(160))
                    .col(ColumnDef::new(Pages::MetaKeywords).string_len(255))
                    .col(ColumnDef::new(Pages::SiteId).char_len(36).not_null())
                    .col(
                        ColumnDef::new(Pages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Pages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Pages::Table, Pages::SiteId)
                            .to(Sites::Table, Sites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pages {
    Table,
    Id,
    Slug,
    Title,
    Content,
    Published,
    MetaDescription,
    MetaKeywords,
    SiteId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sites {
    Table,
    Id,
}
