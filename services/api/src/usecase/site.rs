use chrono::Utc;
use uuid::Uuid;

use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::SiteRepository;
use crate::domain::types::{Site, SiteFilter};
use crate::error::ApiServiceError;

// ── ListSites ────────────────────────────────────────────────────────────────

pub struct ListSitesUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> ListSitesUseCase<S> {
    pub async fn execute(
        &self,
        filter: SiteFilter,
        page: PageRequest,
    ) -> Result<Paginated<Site>, ApiServiceError> {
        let page = page.clamped();
        let (sites, total) = self.repo.list(&filter, page).await?;
        Ok(Paginated::new(sites, total, page.page, page.per_page))
    }
}

// ── GetSite ──────────────────────────────────────────────────────────────────

pub struct GetSiteUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> GetSiteUseCase<S> {
    pub async fn execute(&self, id: &str) -> Result<Site, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::SiteNotFound)
    }

    /// Public slug lookup. Inactive sites are indistinguishable from
    /// missing ones.
    pub async fn execute_by_slug(&self, slug: &str) -> Result<Site, ApiServiceError> {
        let site = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or(ApiServiceError::SiteNotFound)?;
        if !site.is_active {
            return Err(ApiServiceError::SiteNotFound);
        }
        Ok(site)
    }
}

// ── CreateSite ───────────────────────────────────────────────────────────────

pub struct CreateSiteInput {
    pub name: String,
    pub slug: String,
    pub initial_level: String,
    pub max_level: String,
    pub rates: Option<String>,
    pub facebook_url: Option<String>,
    pub facebook_enable: bool,
    pub footer_info: Option<String>,
    pub footer_menu_enable: bool,
    pub footer_info_enable: bool,
    pub forum_url: Option<String>,
    pub last_online: bool,
}

pub struct CreateSiteUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> CreateSiteUseCase<S> {
    pub async fn execute(&self, input: CreateSiteInput) -> Result<Site, ApiServiceError> {
        for field in [
            &input.name,
            &input.slug,
            &input.initial_level,
            &input.max_level,
        ] {
            if field.trim().is_empty() {
                return Err(ApiServiceError::MissingData);
            }
        }
        if self.repo.slug_exists(&input.slug, None).await? {
            return Err(ApiServiceError::SlugTaken);
        }
        let now = Utc::now();
        let site = Site {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            slug: input.slug,
            initial_level: input.initial_level,
            max_level: input.max_level,
            rates: input.rates,
            facebook_url: input.facebook_url,
            facebook_enable: input.facebook_enable,
            footer_info: input.footer_info,
            footer_menu_enable: input.footer_menu_enable,
            footer_info_enable: input.footer_info_enable,
            forum_url: input.forum_url,
            last_online: input.last_online,
            is_active: true,
            maintenance_mode: false,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&site).await?;
        Ok(site)
    }
}

// ── UpdateSite ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateSiteInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub initial_level: Option<String>,
    pub max_level: Option<String>,
    pub rates: Option<String>,
    pub facebook_url: Option<String>,
    pub facebook_enable: Option<bool>,
    pub footer_info: Option<String>,
    pub footer_menu_enable: Option<bool>,
    pub footer_info_enable: Option<bool>,
    pub forum_url: Option<String>,
    pub last_online: Option<bool>,
}

pub struct UpdateSiteUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> UpdateSiteUseCase<S> {
    pub async fn execute(&self, id: &str, input: UpdateSiteInput) -> Result<Site, ApiServiceError> {
        let mut site = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::SiteNotFound)?;
        if let Some(ref slug) = input.slug {
            if slug != &site.slug && self.repo.slug_exists(slug, Some(id)).await? {
                return Err(ApiServiceError::SlugTaken);
            }
            site.slug = slug.clone();
        }
        if let Some(name) = input.name {
            site.name = name;
        }
        if let Some(initial_level) = input.initial_level {
            site.initial_level = initial_level;
        }
        if let Some(max_level) = input.max_level {
            site.max_level = max_level;
        }
        if let Some(rates) = input.rates {
            site.rates = Some(rates);
        }
        if let Some(facebook_url) = input.facebook_url {
            site.facebook_url = Some(facebook_url);
        }
        if let Some(facebook_enable) = input.facebook_enable {
            site.facebook_enable = facebook_enable;
        }
        if let Some(footer_info) = input.footer_info {
            site.footer_info = Some(footer_info);
        }
        if let Some(footer_menu_enable) = input.footer_menu_enable {
            site.footer_menu_enable = footer_menu_enable;
        }
        if let Some(footer_info_enable) = input.footer_info_enable {
            site.footer_info_enable = footer_info_enable;
        }
        if let Some(forum_url) = input.forum_url {
            site.forum_url = Some(forum_url);
        }
        if let Some(last_online) = input.last_online {
            site.last_online = last_online;
        }
        site.updated_at = Utc::now();
        self.repo.update(&site).await?;
        Ok(site)
    }
}

// ── Site flags ───────────────────────────────────────────────────────────────

pub struct SetSiteActiveUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> SetSiteActiveUseCase<S> {
    pub async fn execute(&self, id: &str, active: bool) -> Result<Site, ApiServiceError> {
        let mut site = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::SiteNotFound)?;
        self.repo.set_active(id, active).await?;
        site.is_active = active;
        site.updated_at = Utc::now();
        Ok(site)
    }
}

pub struct SetSiteMaintenanceUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> SetSiteMaintenanceUseCase<S> {
    pub async fn execute(&self, id: &str, maintenance: bool) -> Result<Site, ApiServiceError> {
        let mut site = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::SiteNotFound)?;
        self.repo.set_maintenance(id, maintenance).await?;
        site.maintenance_mode = maintenance;
        site.updated_at = Utc::now();
        Ok(site)
    }
}

// ── DeleteSite ───────────────────────────────────────────────────────────────

pub struct DeleteSiteUseCase<S: SiteRepository> {
    pub repo: S,
}

impl<S: SiteRepository> DeleteSiteUseCase<S> {
    pub async fn execute(&self, id: &str) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::SiteNotFound);
        }
        Ok(())
    }
}
