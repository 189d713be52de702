#![allow(async_fn_in_trait)]

use chrono::NaiveDateTime;

use gmpanel_domain::pagination::PageRequest;

use crate::domain::types::{
    Account, Download, DownloadFilter, GmRecord, Guild, Image, ImageFilter, ImageKind, Page,
    PageFilter, Player, Site, SiteFilter,
};
use crate::error::ApiServiceError;

/// New-account data; `password_digest` is already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub login: String,
    pub password_digest: String,
    pub social_id: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub site_id: String,
}

#[derive(Debug, Clone)]
pub struct NewDownload {
    pub provider: String,
    pub size: String,
    pub link: String,
    pub published: bool,
    pub category: String,
    pub site_id: String,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub image_type: ImageKind,
    pub file_size: i64,
    pub site_id: String,
}

/// Repository over the legacy account database.
pub trait AccountRepository: Send + Sync {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, ApiServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, ApiServiceError>;
    async fn create(&self, account: &NewAccount) -> Result<Account, ApiServiceError>;
    async fn update_social_id(&self, id: i32, social_id: &str) -> Result<(), ApiServiceError>;
    async fn update_password(&self, id: i32, password_digest: &str)
    -> Result<(), ApiServiceError>;
    async fn count(&self) -> Result<u64, ApiServiceError>;
}

/// Read-only repository over the GM list in the common database.
pub trait GmListRepository: Send + Sync {
    /// At most one grant per login is honored.
    async fn find_by_account(&self, login: &str) -> Result<Option<GmRecord>, ApiServiceError>;
}

/// Read-only repository over the player database.
pub trait PlayerRepository: Send + Sync {
    async fn list_top_by_level(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Player>, u64), ApiServiceError>;
    async fn list_by_account_id(&self, account_id: i32) -> Result<Vec<Player>, ApiServiceError>;
    async fn count(&self) -> Result<u64, ApiServiceError>;
    /// Players whose `last_play` is after `since`.
    async fn count_playing_since(&self, since: NaiveDateTime) -> Result<u64, ApiServiceError>;
}

/// Read-only repository over guilds in the player database.
pub trait GuildRepository: Send + Sync {
    async fn list_top_by_level(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Guild>, u64), ApiServiceError>;
}

/// Repository for site configuration in the content database.
pub trait SiteRepository: Send + Sync {
    async fn list(
        &self,
        filter: &SiteFilter,
        page: PageRequest,
    ) -> Result<(Vec<Site>, u64), ApiServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Site>, ApiServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Site>, ApiServiceError>;
    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, ApiServiceError>;
    async fn create(&self, site: &Site) -> Result<(), ApiServiceError>;
    async fn update(&self, site: &Site) -> Result<(), ApiServiceError>;
    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiServiceError>;
    async fn set_maintenance(&self, id: &str, maintenance: bool) -> Result<(), ApiServiceError>;
    /// Delete a site. Returns `true` if a row was deleted. Children cascade.
    async fn delete(&self, id: &str) -> Result<bool, ApiServiceError>;
}

/// Repository for static pages in the content database.
pub trait PageRepository: Send + Sync {
    async fn list(
        &self,
        filter: &PageFilter,
        page: PageRequest,
    ) -> Result<(Vec<Page>, u64), ApiServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Page>, ApiServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, ApiServiceError>;
    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, ApiServiceError>;
    async fn create(&self, page: &NewPage) -> Result<Page, ApiServiceError>;
    async fn update(&self, page: &Page) -> Result<(), ApiServiceError>;
    async fn set_published(&self, id: i32, published: bool) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError>;
}

/// Repository for downloads in the content database.
pub trait DownloadRepository: Send + Sync {
    async fn list(
        &self,
        filter: &DownloadFilter,
        page: PageRequest,
    ) -> Result<(Vec<Download>, u64), ApiServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Download>, ApiServiceError>;
    async fn create(&self, download: &NewDownload) -> Result<Download, ApiServiceError>;
    async fn update(&self, download: &Download) -> Result<(), ApiServiceError>;
    async fn set_published(&self, id: i32, published: bool) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError>;
    /// Published-vs-total counts for one site, used by the stats endpoint.
    async fn count_by_site(&self, site_id: &str) -> Result<(u64, u64), ApiServiceError>;
}

/// Repository for image metadata in the content database.
pub trait ImageRepository: Send + Sync {
    async fn list(
        &self,
        filter: &ImageFilter,
        page: PageRequest,
    ) -> Result<(Vec<Image>, u64), ApiServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Image>, ApiServiceError>;
    async fn filename_exists(
        &self,
        site_id: &str,
        filename: &str,
    ) -> Result<bool, ApiServiceError>;
    async fn create(&self, image: &NewImage) -> Result<Image, ApiServiceError>;
    async fn update(&self, image: &Image) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError>;
}

/// Port for the upload directory on local disk.
pub trait FileStore: Send + Sync {
    /// Write `bytes` under `filename` and return the web-facing path.
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, ApiServiceError>;
    /// Remove the file behind a web path. A missing file is not an error.
    async fn delete(&self, web_path: &str) -> Result<(), ApiServiceError>;
}
