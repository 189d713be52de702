use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use gmpanel_domain::authority::AuthorityLevel;
use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::NewDownload;
use crate::domain::types::{Download, DownloadFilter};
use crate::error::ApiServiceError;
use crate::handlers::{BearerHeader, bearer_token};
use crate::state::AppState;
use crate::usecase::download::{
    CreateDownloadUseCase, DeleteDownloadUseCase, GetDownloadUseCase, ListDownloadsUseCase,
    SetDownloadPublishedUseCase, UpdateDownloadInput, UpdateDownloadUseCase,
};

// ── GET /game/downloads ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct DownloadListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub site_id: Option<String>,
    pub category: Option<String>,
    pub provider: Option<String>,
    pub published_only: Option<bool>,
}

impl DownloadListQuery {
    /// First matching filter wins; combinations beyond site+category are
    /// ignored.
    fn filter(&self) -> DownloadFilter {
        if let Some(ref term) = self.search {
            DownloadFilter::Search(term.clone())
        } else if let (Some(site_id), Some(category)) = (&self.site_id, &self.category) {
            DownloadFilter::SiteAndCategory {
                site_id: site_id.clone(),
                category: category.clone(),
            }
        } else if let Some(ref site_id) = self.site_id {
            DownloadFilter::Site(site_id.clone())
        } else if let Some(ref category) = self.category {
            DownloadFilter::Category(category.clone())
        } else if let Some(ref provider) = self.provider {
            DownloadFilter::Provider(provider.clone())
        } else if self.published_only == Some(true) {
            DownloadFilter::PublishedOnly
        } else {
            DownloadFilter::All
        }
    }

    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
    }
}

pub async fn get_downloads(
    State(state): State<AppState>,
    Query(query): Query<DownloadListQuery>,
) -> Result<Json<Paginated<Download>>, ApiServiceError> {
    let usecase = ListDownloadsUseCase {
        repo: state.download_repo(),
    };
    Ok(Json(
        usecase.execute(query.filter(), query.page_request()).await?,
    ))
}

// ── GET /game/downloads/site/{site_id} ───────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SiteDownloadsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
}

pub async fn get_downloads_by_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    Query(query): Query<SiteDownloadsQuery>,
) -> Result<Json<Paginated<Download>>, ApiServiceError> {
    let filter = match query.category {
        Some(category) => DownloadFilter::SiteAndCategory { site_id, category },
        None => DownloadFilter::Site(site_id),
    };
    let usecase = ListDownloadsUseCase {
        repo: state.download_repo(),
    };
    Ok(Json(
        usecase
            .execute(
                filter,
                PageRequest {
                    page: query.page.unwrap_or(1),
                    per_page: query.per_page.unwrap_or(20),
                },
            )
            .await?,
    ))
}

// ── GET /game/downloads/{id} ─────────────────────────────────────────────────

pub async fn get_download(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Download>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = GetDownloadUseCase {
        repo: state.download_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── POST /game/downloads ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDownloadRequest {
    pub provider: String,
    pub size: String,
    pub link: String,
    #[serde(default)]
    pub published: bool,
    pub category: String,
    pub site_id: String,
}

pub async fn create_download(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Json(body): Json<CreateDownloadRequest>,
) -> Result<(StatusCode, Json<Download>), ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = CreateDownloadUseCase {
        repo: state.download_repo(),
        sites: state.site_repo(),
    };
    let download = usecase
        .execute(NewDownload {
            provider: body.provider,
            size: body.size,
            link: body.link,
            published: body.published,
            category: body.category,
            site_id: body.site_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(download)))
}

// ── PUT /game/downloads/{id} ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateDownloadRequest {
    pub provider: Option<String>,
    pub size: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub site_id: Option<String>,
}

pub async fn update_download(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateDownloadRequest>,
) -> Result<Json<Download>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = UpdateDownloadUseCase {
        repo: state.download_repo(),
        sites: state.site_repo(),
    };
    let download = usecase
        .execute(
            id,
            UpdateDownloadInput {
                provider: body.provider,
                size: body.size,
                link: body.link,
                category: body.category,
                published: body.published,
                site_id: body.site_id,
            },
        )
        .await?;
    Ok(Json(download))
}

// ── PATCH /game/downloads/{id}/publish|unpublish ─────────────────────────────

pub async fn publish_download(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Download>, ApiServiceError> {
    set_published(state, bearer, id, true).await
}

pub async fn unpublish_download(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Download>, ApiServiceError> {
    set_published(state, bearer, id, false).await
}

async fn set_published(
    state: AppState,
    bearer: Option<BearerHeader>,
    id: i32,
    published: bool,
) -> Result<Json<Download>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = SetDownloadPublishedUseCase {
        repo: state.download_repo(),
    };
    Ok(Json(usecase.execute(id, published).await?))
}

// ── DELETE /game/downloads/{id} ──────────────────────────────────────────────

pub async fn delete_download(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = DeleteDownloadUseCase {
        repo: state.download_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
