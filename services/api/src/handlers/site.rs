use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use gmpanel_domain::authority::AuthorityLevel;
use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::types::{Site, SiteFilter, SiteStats};
use crate::error::ApiServiceError;
use crate::handlers::{BearerHeader, bearer_token};
use crate::state::AppState;
use crate::usecase::site::{
    CreateSiteInput, CreateSiteUseCase, DeleteSiteUseCase, GetSiteUseCase, ListSitesUseCase,
    SetSiteActiveUseCase, SetSiteMaintenanceUseCase, UpdateSiteInput, UpdateSiteUseCase,
};
use crate::usecase::stats::SiteStatsUseCase;

// ── GET /game/sites ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SiteListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub active_only: Option<bool>,
    pub maintenance_only: Option<bool>,
}

impl SiteListQuery {
    fn filter(&self) -> SiteFilter {
        if let Some(ref term) = self.search {
            SiteFilter::Search(term.clone())
        } else if self.active_only == Some(true) {
            SiteFilter::ActiveOnly
        } else if self.maintenance_only == Some(true) {
            SiteFilter::MaintenanceOnly
        } else {
            SiteFilter::All
        }
    }

    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
    }
}

pub async fn get_sites(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Query(query): Query<SiteListQuery>,
) -> Result<Json<Paginated<Site>>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = ListSitesUseCase {
        repo: state.site_repo(),
    };
    Ok(Json(
        usecase.execute(query.filter(), query.page_request()).await?,
    ))
}

// ── GET /game/sites/slug/{slug} ──────────────────────────────────────────────

pub async fn get_site_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Site>, ApiServiceError> {
    let usecase = GetSiteUseCase {
        repo: state.site_repo(),
    };
    Ok(Json(usecase.execute_by_slug(&slug).await?))
}

// ── GET /game/sites/{id} ─────────────────────────────────────────────────────

pub async fn get_site(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
) -> Result<Json<Site>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = GetSiteUseCase {
        repo: state.site_repo(),
    };
    Ok(Json(usecase.execute(&id).await?))
}

// ── POST /game/sites ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSiteRequest {
    pub name: String,
    pub slug: String,
    pub initial_level: String,
    pub max_level: String,
    pub rates: Option<String>,
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub facebook_enable: bool,
    pub footer_info: Option<String>,
    #[serde(default)]
    pub footer_menu_enable: bool,
    #[serde(default)]
    pub footer_info_enable: bool,
    pub forum_url: Option<String>,
    #[serde(default)]
    pub last_online: bool,
}

pub async fn create_site(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Json(body): Json<CreateSiteRequest>,
) -> Result<(StatusCode, Json<Site>), ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = CreateSiteUseCase {
        repo: state.site_repo(),
    };
    let site = usecase
        .execute(CreateSiteInput {
            name: body.name,
            slug: body.slug,
            initial_level: body.initial_level,
            max_level: body.max_level,
            rates: body.rates,
            facebook_url: body.facebook_url,
            facebook_enable: body.facebook_enable,
            footer_info: body.footer_info,
            footer_menu_enable: body.footer_menu_enable,
            footer_info_enable: body.footer_info_enable,
            forum_url: body.forum_url,
            last_online: body.last_online,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(site)))
}

// ── PUT /game/sites/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateSiteRequest {
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

pub async fn update_site(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSiteRequest>,
) -> Result<Json<Site>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = UpdateSiteUseCase {
        repo: state.site_repo(),
    };
    let site = usecase
        .execute(
            &id,
            UpdateSiteInput {
                name: body.name,
                slug: body.slug,
                initial_level: body.initial_level,
                max_level: body.max_level,
                rates: body.rates,
                facebook_url: body.facebook_url,
                facebook_enable: body.facebook_enable,
                footer_info: body.footer_info,
                footer_menu_enable: body.footer_menu_enable,
                footer_info_enable: body.footer_info_enable,
                forum_url: body.forum_url,
                last_online: body.last_online,
            },
        )
        .await?;
    Ok(Json(site))
}

// ── PATCH /game/sites/{id}/activate|deactivate ───────────────────────────────

pub async fn activate_site(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
) -> Result<Json<Site>, ApiServiceError> {
    set_active(state, bearer, id, true).await
}

pub async fn deactivate_site(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
) -> Result<Json<Site>, ApiServiceError> {
    set_active(state, bearer, id, false).await
}

async fn set_active(
    state: AppState,
    bearer: Option<BearerHeader>,
    id: String,
    active: bool,
) -> Result<Json<Site>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = SetSiteActiveUseCase {
        repo: state.site_repo(),
    };
    Ok(Json(usecase.execute(&id, active).await?))
}

// ── PATCH /game/sites/{id}/maintenance/enable|disable ────────────────────────

pub async fn enable_maintenance(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
) -> Result<Json<Site>, ApiServiceError> {
    set_maintenance(state, bearer, id, true).await
}

pub async fn disable_maintenance(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
) -> Result<Json<Site>, ApiServiceError> {
    set_maintenance(state, bearer, id, false).await
}

async fn set_maintenance(
    state: AppState,
    bearer: Option<BearerHeader>,
    id: String,
    maintenance: bool,
) -> Result<Json<Site>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = SetSiteMaintenanceUseCase {
        repo: state.site_repo(),
    };
    Ok(Json(usecase.execute(&id, maintenance).await?))
}

// ── DELETE /game/sites/{id} ──────────────────────────────────────────────────

pub async fn delete_site(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = DeleteSiteUseCase {
        repo: state.site_repo(),
    };
    usecase.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /game/sites/{slug}/stats ─────────────────────────────────────────────

pub async fn get_site_stats(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SiteStats>, ApiServiceError> {
    let usecase = SiteStatsUseCase {
        sites: state.site_repo(),
        accounts: state.account_repo(),
        players: state.player_repo(),
        downloads: state.download_repo(),
    };
    Ok(Json(usecase.execute(&slug).await?))
}
