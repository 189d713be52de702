use anyhow::Context as _;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use gmpanel_api_schema::{accounts, downloads, gm_list, guilds, images, pages, players, sites};
use gmpanel_domain::account::AccountStatus;
use gmpanel_domain::pagination::PageRequest;

use crate::domain::repository::{
    AccountRepository, DownloadRepository, GmListRepository, GuildRepository, ImageRepository,
    NewAccount, NewDownload, NewImage, NewPage, PageRepository, PlayerRepository, SiteRepository,
};
use crate::domain::types::{
    Account, Download, DownloadFilter, GmRecord, Guild, Image, ImageFilter, ImageKind, Page,
    PageFilter, Player, Site, SiteFilter,
};
use crate::error::ApiServiceError;

// ── Account repository (account database) ────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, ApiServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Login.eq(login))
            .one(&self.db)
            .await
            .context("find account by login")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, ApiServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, ApiServiceError> {
        // The game server requires a non-null status; new accounts start "OK".
        let model = accounts::ActiveModel {
            id: NotSet,
            login: Set(account.login.clone()),
            password: Set(account.password_digest.clone()),
            social_id: Set(account.social_id.clone()),
            email: Set(account.email.clone()),
            status: Set("OK".to_owned()),
        }
        .insert(&self.db)
        .await
        .context("create account")?;
        Ok(account_from_model(model))
    }

    async fn update_social_id(&self, id: i32, social_id: &str) -> Result<(), ApiServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            social_id: Set(social_id.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update account social id")?;
        Ok(())
    }

    async fn update_password(
        &self,
        id: i32,
        password_digest: &str,
    ) -> Result<(), ApiServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            password: Set(password_digest.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update account password")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, ApiServiceError> {
        let total = accounts::Entity::find()
            .count(&self.db)
            .await
            .context("count accounts")?;
        Ok(total)
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        login: model.login,
        password_digest: model.password,
        social_id: model.social_id,
        email: model.email,
        status: AccountStatus::from_db(&model.status),
    }
}

// ── GM list repository (common database) ─────────────────────────────────────

#[derive(Clone)]
pub struct DbGmListRepository {
    pub db: DatabaseConnection,
}

impl GmListRepository for DbGmListRepository {
    async fn find_by_account(&self, login: &str) -> Result<Option<GmRecord>, ApiServiceError> {
        let model = gm_list::Entity::find()
            .filter(gm_list::Column::MAccount.eq(login))
            .one(&self.db)
            .await
            .context("find gm record by account")?;
        Ok(model.map(|model| GmRecord {
            account: model.m_account,
            name: model.m_name,
            authority: model.m_authority,
        }))
    }
}

// ── Player and guild repositories (player database) ──────────────────────────

#[derive(Clone)]
pub struct DbPlayerRepository {
    pub db: DatabaseConnection,
}

impl PlayerRepository for DbPlayerRepository {
    async fn list_top_by_level(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Player>, u64), ApiServiceError> {
        let page = page.clamped();
        let total = players::Entity::find()
            .count(&self.db)
            .await
            .context("count players for ranking")?;
        let models = players::Entity::find()
            .order_by_desc(players::Column::Level)
            .order_by_desc(players::Column::Exp)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list players by level")?;
        Ok((models.into_iter().map(player_from_model).collect(), total))
    }

    async fn list_by_account_id(&self, account_id: i32) -> Result<Vec<Player>, ApiServiceError> {
        let models = players::Entity::find()
            .filter(players::Column::AccountId.eq(account_id))
            .all(&self.db)
            .await
            .context("list players by account id")?;
        Ok(models.into_iter().map(player_from_model).collect())
    }

    async fn count(&self) -> Result<u64, ApiServiceError> {
        let total = players::Entity::find()
            .count(&self.db)
            .await
            .context("count players")?;
        Ok(total)
    }

    async fn count_playing_since(&self, since: NaiveDateTime) -> Result<u64, ApiServiceError> {
        let total = players::Entity::find()
            .filter(players::Column::LastPlay.gt(since))
            .count(&self.db)
            .await
            .context("count players playing since")?;
        Ok(total)
    }
}

fn player_from_model(model: players::Model) -> Player {
    Player {
        account_id: model.account_id,
        name: model.name,
        job: model.job,
        level: model.level,
        exp: model.exp,
        last_play: model.last_play,
    }
}

#[derive(Clone)]
pub struct DbGuildRepository {
    pub db: DatabaseConnection,
}

impl GuildRepository for DbGuildRepository {
    async fn list_top_by_level(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Guild>, u64), ApiServiceError> {
        let page = page.clamped();
        let total = guilds::Entity::find()
            .count(&self.db)
            .await
            .context("count guilds for ranking")?;
        let models = guilds::Entity::find()
            .order_by_desc(guilds::Column::Level)
            .order_by_desc(guilds::Column::LadderPoint)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list guilds by level")?;
        let guilds = models
            .into_iter()
            .map(|model| Guild {
                id: model.id,
                name: model.name,
                master: model.master,
                level: model.level,
                exp: model.exp,
                win: model.win,
                draw: model.draw,
                loss: model.loss,
                ladder_point: model.ladder_point,
                gold: model.gold,
            })
            .collect();
        Ok((guilds, total))
    }
}

// ── Site repository (content database) ───────────────────────────────────────

#[derive(Clone)]
pub struct DbSiteRepository {
    pub db: DatabaseConnection,
}

impl SiteRepository for DbSiteRepository {
    async fn list(
        &self,
        filter: &SiteFilter,
        page: PageRequest,
    ) -> Result<(Vec<Site>, u64), ApiServiceError> {
        let page = page.clamped();
        let query = filtered_sites(filter);
        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count sites")?;
        let models = query
            .order_by_desc(sites::Column::CreatedAt)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list sites")?;
        Ok((models.into_iter().map(site_from_model).collect(), total))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Site>, ApiServiceError> {
        let model = sites::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find site by id")?;
        Ok(model.map(site_from_model))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Site>, ApiServiceError> {
        let model = sites::Entity::find()
            .filter(sites::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find site by slug")?;
        Ok(model.map(site_from_model))
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, ApiServiceError> {
        let mut query = sites::Entity::find().filter(sites::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(sites::Column::Id.ne(id));
        }
        let total = query
            .count(&self.db)
            .await
            .context("check site slug exists")?;
        Ok(total > 0)
    }

    async fn create(&self, site: &Site) -> Result<(), ApiServiceError> {
        site_to_active_model(site)
            .insert(&self.db)
            .await
            .context("create site")?;
        Ok(())
    }

    async fn update(&self, site: &Site) -> Result<(), ApiServiceError> {
        site_to_active_model(site)
            .update(&self.db)
            .await
            .context("update site")?;
        Ok(())
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiServiceError> {
        sites::ActiveModel {
            id: Set(id.to_owned()),
            is_active: Set(active),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set site active flag")?;
        Ok(())
    }

    async fn set_maintenance(&self, id: &str, maintenance: bool) -> Result<(), ApiServiceError> {
        sites::ActiveModel {
            id: Set(id.to_owned()),
            maintenance_mode: Set(maintenance),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set site maintenance flag")?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, ApiServiceError> {
        let result = sites::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete site")?;
        Ok(result.rows_affected > 0)
    }
}

fn filtered_sites(filter: &SiteFilter) -> Select<sites::Entity> {
    let query = sites::Entity::find();
    match filter {
        SiteFilter::Search(term) => query.filter(
            Condition::any()
                .add(sites::Column::Name.contains(term))
                .add(sites::Column::Slug.contains(term))
                .add(sites::Column::FooterInfo.contains(term)),
        ),
        SiteFilter::ActiveOnly => query.filter(sites::Column::IsActive.eq(true)),
        SiteFilter::MaintenanceOnly => query.filter(sites::Column::MaintenanceMode.eq(true)),
        SiteFilter::All => query,
    }
}

fn site_from_model(model: sites::Model) -> Site {
    Site {
        id: model.id,
        name: model.name,
        slug: model.slug,
        initial_level: model.initial_level,
        max_level: model.max_level,
        rates: model.rates,
        facebook_url: model.facebook_url,
        facebook_enable: model.facebook_enable,
        footer_info: model.footer_info,
        footer_menu_enable: model.footer_menu_enable,
        footer_info_enable: model.footer_info_enable,
        forum_url: model.forum_url,
        last_online: model.last_online,
        is_active: model.is_active,
        maintenance_mode: model.maintenance_mode,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn site_to_active_model(site: &Site) -> sites::ActiveModel {
    sites::ActiveModel {
        id: Set(site.id.clone()),
        name: Set(site.name.clone()),
        slug: Set(site.slug.clone()),
        initial_level: Set(site.initial_level.clone()),
        max_level: Set(site.max_level.clone()),
        rates: Set(site.rates.clone()),
        facebook_url: Set(site.facebook_url.clone()),
        facebook_enable: Set(site.facebook_enable),
        footer_info: Set(site.footer_info.clone()),
        footer_menu_enable: Set(site.footer_menu_enable),
        footer_info_enable: Set(site.footer_info_enable),
        forum_url: Set(site.forum_url.clone()),
        last_online: Set(site.last_online),
        is_active: Set(site.is_active),
        maintenance_mode: Set(site.maintenance_mode),
        created_at: Set(site.created_at),
        updated_at: Set(site.updated_at),
    }
}

// ── Page repository (content database) ───────────────────────────────────────

#[derive(Clone)]
pub struct DbPageRepository {
    pub db: DatabaseConnection,
}

impl PageRepository for DbPageRepository {
    async fn list(
        &self,
        filter: &PageFilter,
        page: PageRequest,
    ) -> Result<(Vec<Page>, u64), ApiServiceError> {
        let page = page.clamped();
        let query = filtered_pages(filter);
        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count pages")?;
        let models = query
            .order_by_desc(pages::Column::CreatedAt)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list pages")?;
        Ok((models.into_iter().map(page_from_model).collect(), total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Page>, ApiServiceError> {
        let model = pages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find page by id")?;
        Ok(model.map(page_from_model))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, ApiServiceError> {
        let model = pages::Entity::find()
            .filter(pages::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find page by slug")?;
        Ok(model.map(page_from_model))
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, ApiServiceError> {
        let mut query = pages::Entity::find().filter(pages::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(pages::Column::Id.ne(id));
        }
        let total = query
            .count(&self.db)
            .await
            .context("check page slug exists")?;
        Ok(total > 0)
    }

    async fn create(&self, page: &NewPage) -> Result<Page, ApiServiceError> {
        let now = Utc::now();
        let model = pages::ActiveModel {
            id: NotSet,
            slug: Set(page.slug.clone()),
            title: Set(page.title.clone()),
            content: Set(page.content.clone()),
            published: Set(page.published),
            meta_description: Set(page.meta_description.clone()),
            meta_keywords: Set(page.meta_keywords.clone()),
            site_id: Set(page.site_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .context("create page")?;
        Ok(page_from_model(model))
    }

    async fn update(&self, page: &Page) -> Result<(), ApiServiceError> {
        pages::ActiveModel {
            id: Set(page.id),
            slug: Set(page.slug.clone()),
            title: Set(page.title.clone()),
            content: Set(page.content.clone()),
            published: Set(page.published),
            meta_description: Set(page.meta_description.clone()),
            meta_keywords: Set(page.meta_keywords.clone()),
            site_id: Set(page.site_id.clone()),
            created_at: Set(page.created_at),
            updated_at: Set(page.updated_at),
        }
        .update(&self.db)
        .await
        .context("update page")?;
        Ok(())
    }

    async fn set_published(&self, id: i32, published: bool) -> Result<(), ApiServiceError> {
        pages::ActiveModel {
            id: Set(id),
            published: Set(published),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set page published flag")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let result = pages::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete page")?;
        Ok(result.rows_affected > 0)
    }
}

fn filtered_pages(filter: &PageFilter) -> Select<pages::Entity> {
    let query = pages::Entity::find();
    match filter {
        PageFilter::Search(term) => query.filter(
            Condition::any()
                .add(pages::Column::Title.contains(term))
                .add(pages::Column::Slug.contains(term))
                .add(pages::Column::Content.contains(term)),
        ),
        PageFilter::PublishedOnly => query.filter(pages::Column::Published.eq(true)),
        PageFilter::Site(site_id) => query.filter(pages::Column::SiteId.eq(site_id)),
        PageFilter::SitePublished(site_id) => query
            .filter(pages::Column::SiteId.eq(site_id))
            .filter(pages::Column::Published.eq(true)),
        PageFilter::All => query,
    }
}

fn page_from_model(model: pages::Model) -> Page {
    Page {
        id: model.id,
        slug: model.slug,
        title: model.title,
        content: model.content,
        published: model.published,
        meta_description: model.meta_description,
        meta_keywords: model.meta_keywords,
        site_id: model.site_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Download repository (content database) ───────────────────────────────────

#[derive(Clone)]
pub struct DbDownloadRepository {
    pub db: DatabaseConnection,
}

impl DownloadRepository for DbDownloadRepository {
    async fn list(
        &self,
        filter: &DownloadFilter,
        page: PageRequest,
    ) -> Result<(Vec<Download>, u64), ApiServiceError> {
        let page = page.clamped();
        let query = filtered_downloads(filter);
        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count downloads")?;
        let models = query
            .order_by_desc(downloads::Column::CreatedAt)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list downloads")?;
        Ok((models.into_iter().map(download_from_model).collect(), total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Download>, ApiServiceError> {
        let model = downloads::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find download by id")?;
        Ok(model.map(download_from_model))
    }

    async fn create(&self, download: &NewDownload) -> Result<Download, ApiServiceError> {
        let now = Utc::now();
        let model = downloads::ActiveModel {
            id: NotSet,
            provider: Set(download.provider.clone()),
            size: Set(download.size.clone()),
            link: Set(download.link.clone()),
            published: Set(download.published),
            category: Set(download.category.clone()),
            site_id: Set(download.site_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .context("create download")?;
        Ok(download_from_model(model))
    }

    async fn update(&self, download: &Download) -> Result<(), ApiServiceError> {
        downloads::ActiveModel {
            id: Set(download.id),
            provider: Set(download.provider.clone()),
            size: Set(download.size.clone()),
            link: Set(download.link.clone()),
            published: Set(download.published),
            category: Set(download.category.clone()),
            site_id: Set(download.site_id.clone()),
            created_at: Set(download.created_at),
            updated_at: Set(download.updated_at),
        }
        .update(&self.db)
        .await
        .context("update download")?;
        Ok(())
    }

    async fn set_published(&self, id: i32, published: bool) -> Result<(), ApiServiceError> {
        downloads::ActiveModel {
            id: Set(id),
            published: Set(published),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set download published flag")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let result = downloads::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete download")?;
        Ok(result.rows_affected > 0)
    }

    async fn count_by_site(&self, site_id: &str) -> Result<(u64, u64), ApiServiceError> {
        let total = downloads::Entity::find()
            .filter(downloads::Column::SiteId.eq(site_id))
            .count(&self.db)
            .await
            .context("count downloads by site")?;
        let published = downloads::Entity::find()
            .filter(downloads::Column::SiteId.eq(site_id))
            .filter(downloads::Column::Published.eq(true))
            .count(&self.db)
            .await
            .context("count published downloads by site")?;
        Ok((total, published))
    }
}

fn filtered_downloads(filter: &DownloadFilter) -> Select<downloads::Entity> {
    let query = downloads::Entity::find();
    match filter {
        DownloadFilter::Search(term) => query.filter(
            Condition::any()
                .add(downloads::Column::Provider.contains(term))
                .add(downloads::Column::Category.contains(term))
                .add(downloads::Column::Link.contains(term)),
        ),
        DownloadFilter::SiteAndCategory { site_id, category } => query
            .filter(downloads::Column::SiteId.eq(site_id))
            .filter(downloads::Column::Category.eq(category)),
        DownloadFilter::Site(site_id) => query.filter(downloads::Column::SiteId.eq(site_id)),
        DownloadFilter::Category(category) => {
            query.filter(downloads::Column::Category.eq(category))
        }
        DownloadFilter::Provider(provider) => {
            query.filter(downloads::Column::Provider.eq(provider))
        }
        DownloadFilter::PublishedOnly => query.filter(downloads::Column::Published.eq(true)),
        DownloadFilter::All => query,
    }
}

fn download_from_model(model: downloads::Model) -> Download {
    Download {
        id: model.id,
        provider: model.provider,
        size: model.size,
        link: model.link,
        published: model.published,
        category: model.category,
        site_id: model.site_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Image repository (content database) ──────────────────────────────────────

#[derive(Clone)]
pub struct DbImageRepository {
    pub db: DatabaseConnection,
}

impl ImageRepository for DbImageRepository {
    async fn list(
        &self,
        filter: &ImageFilter,
        page: PageRequest,
    ) -> Result<(Vec<Image>, u64), ApiServiceError> {
        let page = page.clamped();
        let query = filtered_images(filter);
        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count images")?;
        let models = query
            .order_by_desc(images::Column::CreatedAt)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list images")?;
        let images = models
            .into_iter()
            .map(image_from_model)
            .collect::<Result<_, _>>()?;
        Ok((images, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Image>, ApiServiceError> {
        let model = images::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find image by id")?;
        model.map(image_from_model).transpose()
    }

    async fn filename_exists(
        &self,
        site_id: &str,
        filename: &str,
    ) -> Result<bool, ApiServiceError> {
        let total = images::Entity::find()
            .filter(images::Column::SiteId.eq(site_id))
            .filter(images::Column::Filename.eq(filename))
            .count(&self.db)
            .await
            .context("check image filename exists")?;
        Ok(total > 0)
    }

    async fn create(&self, image: &NewImage) -> Result<Image, ApiServiceError> {
        let now = Utc::now();
        let model = images::ActiveModel {
            id: NotSet,
            filename: Set(image.filename.clone()),
            original_filename: Set(image.original_filename.clone()),
            file_path: Set(image.file_path.clone()),
            image_type: Set(image.image_type.as_str().to_owned()),
            file_size: Set(image.file_size),
            site_id: Set(image.site_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .context("create image")?;
        image_from_model(model)
    }

    async fn update(&self, image: &Image) -> Result<(), ApiServiceError> {
        images::ActiveModel {
            id: Set(image.id),
            filename: Set(image.filename.clone()),
            original_filename: Set(image.original_filename.clone()),
            file_path: Set(image.file_path.clone()),
            image_type: Set(image.image_type.as_str().to_owned()),
            file_size: Set(image.file_size),
            site_id: Set(image.site_id.clone()),
            created_at: Set(image.created_at),
            updated_at: Set(image.updated_at),
        }
        .update(&self.db)
        .await
        .context("update image")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let result = images::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete image")?;
        Ok(result.rows_affected > 0)
    }
}

fn filtered_images(filter: &ImageFilter) -> Select<images::Entity> {
    let query = images::Entity::find();
    match filter {
        ImageFilter::Search(term) => query.filter(
            Condition::any()
                .add(images::Column::Filename.contains(term))
                .add(images::Column::OriginalFilename.contains(term))
                .add(images::Column::FilePath.contains(term)),
        ),
        ImageFilter::SiteAndKind { site_id, kind } => query
            .filter(images::Column::SiteId.eq(site_id))
            .filter(images::Column::ImageType.eq(kind.as_str())),
        ImageFilter::Site(site_id) => query.filter(images::Column::SiteId.eq(site_id)),
        ImageFilter::Kind(kind) => query.filter(images::Column::ImageType.eq(kind.as_str())),
        ImageFilter::All => query,
    }
}

fn image_from_model(model: images::Model) -> Result<Image, ApiServiceError> {
    let image_type = ImageKind::from_db(&model.image_type)
        .with_context(|| format!("unknown image type {:?}", model.image_type))?;
    Ok(Image {
        id: model.id,
        filename: model.filename,
        original_filename: model.original_filename,
        file_path: model.file_path,
        image_type,
        file_size: model.file_size,
        site_id: model.site_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
