use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::types::{Guild, Player};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::player::{ListGuildsUseCase, ListPlayersUseCase};

#[derive(Deserialize, Default)]
pub struct RankingQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl RankingQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
    }
}

// ── GET /game/players ────────────────────────────────────────────────────────

pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Paginated<Player>>, ApiServiceError> {
    let usecase = ListPlayersUseCase {
        repo: state.player_repo(),
    };
    Ok(Json(usecase.execute(query.page_request()).await?))
}

// ── GET /game/guilds ─────────────────────────────────────────────────────────

pub async fn get_guilds(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Paginated<Guild>>, ApiServiceError> {
    let usecase = ListGuildsUseCase {
        repo: state.guild_repo(),
    };
    Ok(Json(usecase.execute(query.page_request()).await?))
}
