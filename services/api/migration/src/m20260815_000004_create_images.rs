use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Images::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Images::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Images::Filename)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Images::OriginalFilename)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Images::FilePath)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Images::ImageType)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Images::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Images::SiteId).char_len(36).not_null())
                    .col(
                        ColumnDef::new(Images::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Images::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Images::Table, Images::SiteId)
                            .to(Sites::Table, Sites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A generated filename may only exist once per site.
        manager
            .create_index(
                Index::create()
                    .table(Images::Table)
                    .col(Images::SiteId)
                    .col(Images::Filename)
                    .name("uq_images_site_filename")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uq_images_site_filename").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Images {
    Table,
    Id,
    Filename,
    OriginalFilename,
    FilePath,
    ImageType,
    FileSize,
    SiteId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sites {
    Table,
    Id,
}
