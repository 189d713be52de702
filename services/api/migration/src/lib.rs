//! Migrations for the web content database only. The account, player, and
//! common databases belong to the game server and are never touched here.

use sea_orm_migration::prelude::*;

mod m20260815_000001_create_sites;
mod m20260815_000002_create_pages;
mod m20260815_000003_create_downloads;
mod m20260815_000004_create_images;
mod m20260815_000005_add_content_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_sites::Migration),
            Box::new(m20260815_000002_create_pages::Migration),
            Box::new(m20260815_000003_create_downloads::Migration),
            Box::new(m20260815_000004_create_images::Migration),
            Box::new(m20260815_000005_add_content_indexes::Migration),
        ]
    }
}
