use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::{GuildRepository, PlayerRepository};
use crate::domain::types::{Guild, Player};
use crate::error::ApiServiceError;

// ── ListPlayers ──────────────────────────────────────────────────────────────

pub struct ListPlayersUseCase<P: PlayerRepository> {
    pub repo: P,
}

impl<P: PlayerRepository> ListPlayersUseCase<P> {
    pub async fn execute(&self, page: PageRequest) -> Result<Paginated<Player>, ApiServiceError> {
        let page = page.clamped();
        let (players, total) = self.repo.list_top_by_level(page).await?;
        Ok(Paginated::new(players, total, page.page, page.per_page))
    }
}

// ── ListGuilds ───────────────────────────────────────────────────────────────

pub struct ListGuildsUseCase<G: GuildRepository> {
    pub repo: G,
}

impl<G: GuildRepository> ListGuildsUseCase<G> {
    pub async fn execute(&self, page: PageRequest) -> Result<Paginated<Guild>, ApiServiceError> {
        let page = page.clamped();
        let (guilds, total) = self.repo.list_top_by_level(page).await?;
        Ok(Paginated::new(guilds, total, page.page, page.per_page))
    }
}
