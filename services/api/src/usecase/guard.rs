//! Per-request access control: token verification, identity resolution,
//! active check, and authority check. Nothing is cached — a revoked GM
//! grant or a fresh ban takes effect on the next request.

use jsonwebtoken::Algorithm;

use gmpanel_domain::authority::{AuthorityLevel, can_access};

use crate::domain::repository::{AccountRepository, GmListRepository};
use crate::domain::types::Account;
use crate::error::ApiServiceError;
use crate::usecase::token::validate_token;

pub struct AccessGuard<A: AccountRepository, G: GmListRepository> {
    pub accounts: A,
    pub gm_list: G,
    pub secret_key: String,
    pub algorithm: Algorithm,
}

impl<A: AccountRepository, G: GmListRepository> AccessGuard<A, G> {
    /// Verify the bearer token and resolve its subject to an account.
    pub async fn current_account(&self, token: &str) -> Result<Account, ApiServiceError> {
        let claims = validate_token(token, &self.secret_key, self.algorithm)?;
        self.accounts
            .find_by_login(&claims.sub)
            .await?
            .ok_or(ApiServiceError::Unauthorized)
    }

    /// Like [`current_account`](Self::current_account), but also requires
    /// the account status to be `OK`.
    pub async fn active_account(&self, token: &str) -> Result<Account, ApiServiceError> {
        let account = self.current_account(token).await?;
        if !account.status.is_active() {
            return Err(ApiServiceError::InactiveAccount);
        }
        Ok(account)
    }

    /// Stored authority level name for a login; `"PLAYABLE"` without a GM
    /// grant. The stored value is returned verbatim, unknown names included.
    pub async fn resolve_level(&self, login: &str) -> Result<String, ApiServiceError> {
        let record = self.gm_list.find_by_account(login).await?;
        Ok(record
            .map(|r| r.authority)
            .unwrap_or_else(|| AuthorityLevel::Playable.as_str().to_owned()))
    }

    /// Admit only accounts whose authority ranks at least `required`.
    pub async fn require_level(
        &self,
        token: &str,
        required: AuthorityLevel,
    ) -> Result<Account, ApiServiceError> {
        let account = self.current_account(token).await?;
        let current = self.resolve_level(&account.login).await?;
        if !can_access(&current, required) {
            return Err(ApiServiceError::Forbidden { required, current });
        }
        Ok(account)
    }

    /// Admit any account that has a GM grant at all, regardless of level.
    #[deprecated(note = "use require_level with an explicit AuthorityLevel")]
    pub async fn require_admin(&self, token: &str) -> Result<Account, ApiServiceError> {
        let account = self.current_account(token).await?;
        if self.gm_list.find_by_account(&account.login).await?.is_none() {
            return Err(ApiServiceError::Forbidden {
                required: AuthorityLevel::Player,
                current: AuthorityLevel::Playable.as_str().to_owned(),
            });
        }
        Ok(account)
    }
}
