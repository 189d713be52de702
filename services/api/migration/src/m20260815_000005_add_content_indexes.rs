use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Pages::Table)
                    .col(Pages::Published)
                    .col(Pages::Slug)
                    .name("idx_pages_published_slug")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Sites::Table)
                    .col(Sites::IsActive)
                    .col(Sites::Slug)
                    .name("idx_sites_active_slug")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Images::Table)
                    .col(Images::SiteId)
                    .col(Images::ImageType)
                    .name("idx_images_site_type")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Downloads::Table)
                    .col(Downloads::SiteId)
                    .col(Downloads::Published)
                    .name("idx_downloads_site_published")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Downloads::Table)
                    .col(Downloads::Category)
                    .col(Downloads::Published)
                    .name("idx_downloads_category_published")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_downloads_category_published")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_downloads_site_published").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_images_site_type").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_sites_active_slug").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pages_published_slug").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pages {
    Table,
    Published,
    Slug,
}

#[derive(Iden)]
enum Sites {
    Table,
    IsActive,
    Slug,
}

#[derive(Iden)]
enum Images {
    Table,
    SiteId,
    ImageType,
}

#[derive(Iden)]
enum Downloads {
    Table,
    SiteId,
    Published,
    Category,
}
