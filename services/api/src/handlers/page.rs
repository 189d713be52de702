use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use gmpanel_domain::authority::AuthorityLevel;
use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::NewPage;
use crate::domain::types::{Page, PageFilter};
use crate::error::ApiServiceError;
use crate::handlers::{BearerHeader, bearer_token};
use crate::state::AppState;
use crate::usecase::page::{
    CreatePageUseCase, DeletePageUseCase, GetPageUseCase, ListPagesUseCase, SetPagePublishedUseCase,
    UpdatePageInput, UpdatePageUseCase,
};

// ── GET /game/pages ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct PageListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub published_only: Option<bool>,
}

impl PageListQuery {
    fn filter(&self) -> PageFilter {
        if let Some(ref term) = self.search {
            PageFilter::Search(term.clone())
        } else if self.published_only == Some(true) {
            PageFilter::PublishedOnly
        } else {
            PageFilter::All
        }
    }

    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
    }
}

pub async fn get_pages(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Query(query): Query<PageListQuery>,
) -> Result<Json<Paginated<Page>>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = ListPagesUseCase {
        repo: state.page_repo(),
    };
    Ok(Json(
        usecase.execute(query.filter(), query.page_request()).await?,
    ))
}

// ── GET /game/pages/site/{site_id} ───────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SitePagesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub published_only: Option<bool>,
}

pub async fn get_pages_by_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    Query(query): Query<SitePagesQuery>,
) -> Result<Json<Paginated<Page>>, ApiServiceError> {
    let filter = if query.published_only == Some(true) {
        PageFilter::SitePublished(site_id)
    } else {
        PageFilter::Site(site_id)
    };
    let usecase = ListPagesUseCase {
        repo: state.page_repo(),
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

// ── GET /game/pages/slug/{slug} ──────────────────────────────────────────────

pub async fn get_page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Page>, ApiServiceError> {
    let usecase = GetPageUseCase {
        repo: state.page_repo(),
    };
    Ok(Json(usecase.execute_by_slug(&slug).await?))
}

// ── GET /game/pages/{id} ─────────────────────────────────────────────────────

pub async fn get_page(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Page>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = GetPageUseCase {
        repo: state.page_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── POST /game/pages ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePageRequest {
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub published: bool,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub site_id: String,
}

pub async fn create_page(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Json(body): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<Page>), ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = CreatePageUseCase {
        repo: state.page_repo(),
    };
    let page = usecase
        .execute(NewPage {
            slug: body.slug,
            title: body.title,
            content: body.content,
            published: body.published,
            meta_description: body.meta_description,
            meta_keywords: body.meta_keywords,
            site_id: body.site_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(page)))
}

// ── PUT /game/pages/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdatePageRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

pub async fn update_page(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
    Json(body): Json<UpdatePageRequest>,
) -> Result<Json<Page>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = UpdatePageUseCase {
        repo: state.page_repo(),
    };
    let page = usecase
        .execute(
            id,
            UpdatePageInput {
                slug: body.slug,
                title: body.title,
                content: body.content,
                published: body.published,
                meta_description: body.meta_description,
                meta_keywords: body.meta_keywords,
            },
        )
        .await?;
    Ok(Json(page))
}

// ── PATCH /game/pages/{id}/publish|unpublish ─────────────────────────────────

pub async fn publish_page(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Page>, ApiServiceError> {
    set_published(state, bearer, id, true).await
}

pub async fn unpublish_page(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Page>, ApiServiceError> {
    set_published(state, bearer, id, false).await
}

async fn set_published(
    state: AppState,
    bearer: Option<BearerHeader>,
    id: i32,
    published: bool,
) -> Result<Json<Page>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = SetPagePublishedUseCase {
        repo: state.page_repo(),
    };
    Ok(Json(usecase.execute(id, published).await?))
}

// ── DELETE /game/pages/{id} ──────────────────────────────────────────────────

pub async fn delete_page(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = DeletePageUseCase {
        repo: state.page_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
