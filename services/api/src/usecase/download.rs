use chrono::Utc;

use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::{DownloadRepository, NewDownload, SiteRepository};
use crate::domain::types::{Download, DownloadFilter};
use crate::error::ApiServiceError;

// ── ListDownloads ────────────────────────────────────────────────────────────

pub struct ListDownloadsUseCase<D: DownloadRepository> {
    pub repo: D,
}

impl<D: DownloadRepository> ListDownloadsUseCase<D> {
    pub async fn execute(
        &self,
        filter: DownloadFilter,
        page: PageRequest,
    ) -> Result<Paginated<Download>, ApiServiceError> {
        let page = page.clamped();
        let (downloads, total) = self.repo.list(&filter, page).await?;
        Ok(Paginated::new(downloads, total, page.page, page.per_page))
    }
}

// ── GetDownload ──────────────────────────────────────────────────────────────

pub struct GetDownloadUseCase<D: DownloadRepository> {
    pub repo: D,
}

impl<D: DownloadRepository> GetDownloadUseCase<D> {
    pub async fn execute(&self, id: i32) -> Result<Download, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::DownloadNotFound)
    }
}

// ── CreateDownload ───────────────────────────────────────────────────────────

pub struct CreateDownloadUseCase<D: DownloadRepository, S: SiteRepository> {
    pub repo: D,
    pub sites: S,
}

impl<D: DownloadRepository, S: SiteRepository> CreateDownloadUseCase<D, S> {
    pub async fn execute(&self, input: NewDownload) -> Result<Download, ApiServiceError> {
        if self.sites.find_by_id(&input.site_id).await?.is_none() {
            return Err(ApiServiceError::SiteNotFound);
        }
        self.repo.create(&input).await
    }
}

// ── UpdateDownload ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateDownloadInput {
    pub provider: Option<String>,
    pub size: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub site_id: Option<String>,
}

pub struct UpdateDownloadUseCase<D: DownloadRepository, S: SiteRepository> {
    pub repo: D,
    pub sites: S,
}

impl<D: DownloadRepository, S: SiteRepository> UpdateDownloadUseCase<D, S> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateDownloadInput,
    ) -> Result<Download, ApiServiceError> {
        let mut download = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::DownloadNotFound)?;
        if let Some(site_id) = input.site_id {
            if self.sites.find_by_id(&site_id).await?.is_none() {
                return Err(ApiServiceError::SiteNotFound);
            }
            download.site_id = site_id;
        }
        if let Some(provider) = input.provider {
            download.provider = provider;
        }
        if let Some(size) = input.size {
            download.size = size;
        }
        if let Some(link) = input.link {
            download.link = link;
        }
        if let Some(category) = input.category {
            download.category = category;
        }
        if let Some(published) = input.published {
            download.published = published;
        }
        download.updated_at = Utc::now();
        self.repo.update(&download).await?;
        Ok(download)
    }
}

// ── Publish flags ────────────────────────────────────────────────────────────

pub struct SetDownloadPublishedUseCase<D: DownloadRepository> {
    pub repo: D,
}

impl<D: DownloadRepository> SetDownloadPublishedUseCase<D> {
    pub async fn execute(&self, id: i32, published: bool) -> Result<Download, ApiServiceError> {
        let mut download = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::DownloadNotFound)?;
        self.repo.set_published(id, published).await?;
        download.published = published;
        download.updated_at = Utc::now();
        Ok(download)
    }
}

// ── DeleteDownload ───────────────────────────────────────────────────────────

pub struct DeleteDownloadUseCase<D: DownloadRepository> {
    pub repo: D,
}

impl<D: DownloadRepository> DeleteDownloadUseCase<D> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::DownloadNotFound);
        }
        Ok(())
    }
}
