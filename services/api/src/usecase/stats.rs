use chrono::{Duration, Utc};

use crate::domain::repository::{
    AccountRepository, DownloadRepository, PlayerRepository, SiteRepository,
};
use crate::domain::types::SiteStats;
use crate::error::ApiServiceError;

/// Aggregate dashboard numbers for one site. Each count is a separate query
/// against its own database; the snapshot is best-effort, not atomic.
pub struct SiteStatsUseCase<S, A, P, D>
where
    S: SiteRepository,
    A: AccountRepository,
    P: PlayerRepository,
    D: DownloadRepository,
{
    pub sites: S,
    pub accounts: A,
    pub players: P,
    pub downloads: D,
}

impl<S, A, P, D> SiteStatsUseCase<S, A, P, D>
where
    S: SiteRepository,
    A: AccountRepository,
    P: PlayerRepository,
    D: DownloadRepository,
{
    pub async fn execute(&self, slug: &str) -> Result<SiteStats, ApiServiceError> {
        let site = self
            .sites
            .find_by_slug(slug)
            .await?
            .ok_or(ApiServiceError::SiteNotFound)?;

        let total_accounts = self.accounts.count().await?;
        let total_players = self.players.count().await?;

        // last_play is a naive MySQL DATETIME written in UTC by the game server.
        let now = Utc::now().naive_utc();
        let online_5m = self
            .players
            .count_playing_since(now - Duration::minutes(5))
            .await?;
        let online_24h = self
            .players
            .count_playing_since(now - Duration::hours(24))
            .await?;

        let (downloads_total, downloads_published) =
            self.downloads.count_by_site(&site.id).await?;

        Ok(SiteStats {
            site_id: site.id,
            site_name: site.name,
            downloads_total,
            downloads_published,
            is_active: site.is_active,
            maintenance_mode: site.maintenance_mode,
            online_players_5_minutes: online_5m,
            online_players_24_hours: online_24h,
            total_players,
            total_accounts,
            created_at: site.created_at,
            updated_at: site.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use gmpanel_domain::pagination::PageRequest;

    use crate::domain::repository::{NewAccount, NewDownload};
    use crate::domain::types::{
        Account, Download, DownloadFilter, Player, Site, SiteFilter,
    };

    struct MockSiteRepo {
        site: Option<Site>,
    }

    impl SiteRepository for MockSiteRepo {
        async fn list(
            &self,
            _filter: &SiteFilter,
            _page: PageRequest,
        ) -> Result<(Vec<Site>, u64), ApiServiceError> {
            Ok((vec![], 0))
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<Site>, ApiServiceError> {
            Ok(self.site.clone())
        }
        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Site>, ApiServiceError> {
            Ok(self.site.clone())
        }
        async fn slug_exists(
            &self,
            _slug: &str,
            _exclude_id: Option<&str>,
        ) -> Result<bool, ApiServiceError> {
            Ok(false)
        }
        async fn create(&self, _site: &Site) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn update(&self, _site: &Site) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn set_active(&self, _id: &str, _a: bool) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn set_maintenance(&self, _id: &str, _m: bool) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn delete(&self, _id: &str) -> Result<bool, ApiServiceError> {
            Ok(false)
        }
    }

    struct MockAccountRepo {
        total: u64,
    }

    impl AccountRepository for MockAccountRepo {
        async fn find_by_login(&self, _login: &str) -> Result<Option<Account>, ApiServiceError> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, ApiServiceError> {
            Ok(None)
        }
        async fn create(&self, _account: &NewAccount) -> Result<Account, ApiServiceError> {
            unreachable!()
        }
        async fn update_social_id(
            &self,
            _id: i32,
            _social_id: &str,
        ) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn update_password(
            &self,
            _id: i32,
            _password_digest: &str,
        ) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn count(&self) -> Result<u64, ApiServiceError> {
            Ok(self.total)
        }
    }

    struct MockPlayerRepo {
        total: u64,
        last_plays: Vec<NaiveDateTime>,
    }

    impl PlayerRepository for MockPlayerRepo {
        async fn list_top_by_level(
            &self,
            _page: PageRequest,
        ) -> Result<(Vec<Player>, u64), ApiServiceError> {
            Ok((vec![], self.total))
        }
        async fn list_by_account_id(
            &self,
            _account_id: i32,
        ) -> Result<Vec<Player>, ApiServiceError> {
            Ok(vec![])
        }
        async fn count(&self) -> Result<u64, ApiServiceError> {
            Ok(self.total)
        }
        async fn count_playing_since(
            &self,
            since: NaiveDateTime,
        ) -> Result<u64, ApiServiceError> {
            Ok(self.last_plays.iter().filter(|t| **t > since).count() as u64)
        }
    }

    struct MockDownloadRepo {
        counts: (u64, u64),
    }

    impl DownloadRepository for MockDownloadRepo {
        async fn list(
            &self,
            _filter: &DownloadFilter,
            _page: PageRequest,
        ) -> Result<(Vec<Download>, u64), ApiServiceError> {
            Ok((vec![], 0))
        }
        async fn find_by_id(&self, _id: i32) -> Result<Option<Download>, ApiServiceError> {
            Ok(None)
        }
        async fn create(&self, _download: &NewDownload) -> Result<Download, ApiServiceError> {
            unreachable!()
        }
        async fn update(&self, _download: &Download) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn set_published(&self, _id: i32, _p: bool) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn delete(&self, _id: i32) -> Result<bool, ApiServiceError> {
            Ok(false)
        }
        async fn count_by_site(&self, _site_id: &str) -> Result<(u64, u64), ApiServiceError> {
            Ok(self.counts)
        }
    }

    fn test_site() -> Site {
        let now = Utc::now();
        Site {
            id: "site-1".into(),
            name: "Retro MT2".into(),
            slug: "retro".into(),
            initial_level: "1".into(),
            max_level: "99".into(),
            rates: None,
            facebook_url: None,
            facebook_enable: false,
            footer_info: None,
            footer_menu_enable: false,
            footer_info_enable: false,
            forum_url: None,
            last_online: false,
            is_active: true,
            maintenance_mode: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_build_stats_from_all_four_stores() {
        let now = Utc::now().naive_utc();
        let usecase = SiteStatsUseCase {
            sites: MockSiteRepo {
                site: Some(test_site()),
            },
            accounts: MockAccountRepo { total: 120 },
            players: MockPlayerRepo {
                total: 340,
                last_plays: vec![
                    now - Duration::minutes(1),
                    now - Duration::minutes(90),
                    now - Duration::hours(48),
                ],
            },
            downloads: MockDownloadRepo { counts: (7, 4) },
        };
        let stats = usecase.execute("retro").await.unwrap();
        assert_eq!(stats.total_accounts, 120);
        assert_eq!(stats.total_players, 340);
        assert_eq!(stats.online_players_5_minutes, 1);
        assert_eq!(stats.online_players_24_hours, 2);
        assert_eq!(stats.downloads_total, 7);
        assert_eq!(stats.downloads_published, 4);
        assert_eq!(stats.site_name, "Retro MT2");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_slug() {
        let usecase = SiteStatsUseCase {
            sites: MockSiteRepo { site: None },
            accounts: MockAccountRepo { total: 0 },
            players: MockPlayerRepo {
                total: 0,
                last_plays: vec![],
            },
            downloads: MockDownloadRepo { counts: (0, 0) },
        };
        let result = usecase.execute("nope").await;
        assert!(matches!(result, Err(ApiServiceError::SiteNotFound)));
    }
}
