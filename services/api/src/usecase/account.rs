use jsonwebtoken::Algorithm;

use crate::domain::repository::{AccountRepository, NewAccount, PlayerRepository};
use crate::domain::types::{Account, Player};
use crate::error::ApiServiceError;
use crate::usecase::password::{hash_password, verify_password};
use crate::usecase::token::issue_access_token;

// ── RegisterAccount ──────────────────────────────────────────────────────────

pub struct RegisterAccountInput {
    pub login: String,
    pub password: String,
    pub social_id: String,
    pub email: String,
}

pub struct RegisterAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RegisterAccountUseCase<R> {
    pub async fn execute(&self, input: RegisterAccountInput) -> Result<Account, ApiServiceError> {
        if self.repo.find_by_login(&input.login).await?.is_some() {
            return Err(ApiServiceError::LoginTaken);
        }
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiServiceError::EmailTaken);
        }
        self.repo
            .create(&NewAccount {
                login: input.login,
                password_digest: hash_password(&input.password),
                social_id: input.social_id,
                email: input.email,
            })
            .await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<R: AccountRepository> {
    pub repo: R,
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub expire_minutes: u64,
}

impl<R: AccountRepository> LoginUseCase<R> {
    /// Authenticate and issue an access token. Wrong login, wrong password,
    /// and inactive account all collapse to `Unauthorized` so the response
    /// does not reveal which part failed.
    pub async fn execute(&self, login: &str, password: &str) -> Result<String, ApiServiceError> {
        let account = self
            .repo
            .find_by_login(login)
            .await?
            .ok_or(ApiServiceError::Unauthorized)?;
        if !verify_password(&account.password_digest, password) {
            return Err(ApiServiceError::Unauthorized);
        }
        if !account.status.is_active() {
            return Err(ApiServiceError::Unauthorized);
        }
        issue_access_token(
            &account.login,
            &self.secret_key,
            self.algorithm,
            self.expire_minutes,
        )
    }
}

// ── UpdateSocialId ───────────────────────────────────────────────────────────

pub struct UpdateSocialIdUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> UpdateSocialIdUseCase<R> {
    pub async fn execute(
        &self,
        account: &Account,
        social_id: &str,
    ) -> Result<Account, ApiServiceError> {
        if social_id.len() != 7 || !social_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ApiServiceError::InvalidSocialId);
        }
        self.repo.update_social_id(account.id, social_id).await?;
        Ok(Account {
            social_id: social_id.to_owned(),
            ..account.clone()
        })
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ChangePasswordUseCase<R> {
    pub async fn execute(
        &self,
        account: &Account,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiServiceError> {
        if !verify_password(&account.password_digest, old_password) {
            return Err(ApiServiceError::Unauthorized);
        }
        self.repo
            .update_password(account.id, &hash_password(new_password))
            .await
    }
}

// ── MyPlayers ────────────────────────────────────────────────────────────────

pub struct MyPlayersUseCase<P: PlayerRepository> {
    pub players: P,
}

impl<P: PlayerRepository> MyPlayersUseCase<P> {
    pub async fn execute(&self, account_id: i32) -> Result<Vec<Player>, ApiServiceError> {
        self.players.list_by_account_id(account_id).await
    }
}
