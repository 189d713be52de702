use std::path::PathBuf;

use jsonwebtoken::Algorithm;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAccountRepository, DbDownloadRepository, DbGmListRepository, DbGuildRepository,
    DbImageRepository, DbPageRepository, DbPlayerRepository, DbSiteRepository,
};
use crate::infra::storage::LocalFileStore;
use crate::usecase::guard::AccessGuard;

/// Shared application state passed to every handler via axum `State`.
///
/// One connection per database: the panel spans the web content database it
/// owns plus three legacy game-server databases it only borrows.
#[derive(Clone)]
pub struct AppState {
    pub content_db: DatabaseConnection,
    pub account_db: DatabaseConnection,
    pub player_db: DatabaseConnection,
    pub common_db: DatabaseConnection,
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub expire_minutes: u64,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.account_db.clone(),
        }
    }

    pub fn gm_list_repo(&self) -> DbGmListRepository {
        DbGmListRepository {
            db: self.common_db.clone(),
        }
    }

    pub fn player_repo(&self) -> DbPlayerRepository {
        DbPlayerRepository {
            db: self.player_db.clone(),
        }
    }

    pub fn guild_repo(&self) -> DbGuildRepository {
        DbGuildRepository {
            db: self.player_db.clone(),
        }
    }

    pub fn site_repo(&self) -> DbSiteRepository {
        DbSiteRepository {
            db: self.content_db.clone(),
        }
    }

    pub fn page_repo(&self) -> DbPageRepository {
        DbPageRepository {
            db: self.content_db.clone(),
        }
    }

    pub fn download_repo(&self) -> DbDownloadRepository {
        DbDownloadRepository {
            db: self.content_db.clone(),
        }
    }

    pub fn image_repo(&self) -> DbImageRepository {
        DbImageRepository {
            db: self.content_db.clone(),
        }
    }

    pub fn file_store(&self) -> LocalFileStore {
        LocalFileStore::new(self.upload_dir.clone())
    }

    pub fn guard(&self) -> AccessGuard<DbAccountRepository, DbGmListRepository> {
        AccessGuard {
            accounts: self.account_repo(),
            gm_list: self.gm_list_repo(),
            secret_key: self.secret_key.clone(),
            algorithm: self.algorithm,
        }
    }
}
