use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sites::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sites::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Sites::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Sites::InitialLevel)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sites::MaxLevel).string_len(10).not_null())
                    .col(ColumnDef::new(Sites::Rates).string_len(255))
                    .col(ColumnDef::new(Sites::FacebookUrl).string_len(500))
                    .col(
                        ColumnDef::new(Sites::FacebookEnable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Sites::FooterInfo).text())
                    .col(
                        ColumnDef::new(Sites::FooterMenuEnable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Sites::FooterInfoEnable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Sites::ForumUrl).string_len(500))
                    .col(
                        ColumnDef::new(Sites::LastOnline)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Sites::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Sites::MaintenanceMode)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Sites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Sites::UpdatedAt)
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
            .drop_table(Table::drop().table(Sites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sites {
    Table,
    Id,
    Name,
    Slug,
    InitialLevel,
    MaxLevel,
    Rates,
    FacebookUrl,
    FacebookEnable,
    FooterInfo,
    FooterMenuEnable,
    FooterInfoEnable,
    ForumUrl,
    LastOnline,
    IsActive,
    MaintenanceMode,
    CreatedAt,
    UpdatedAt,
}
