use axum::{Form, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Account, Player};
use crate::error::ApiServiceError;
use crate::handlers::{BearerHeader, bearer_token};
use crate::state::AppState;
use crate::usecase::account::{
    ChangePasswordUseCase, LoginUseCase, MyPlayersUseCase, RegisterAccountInput,
    RegisterAccountUseCase, UpdateSocialIdUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Account as returned to clients. The password digest never leaves the
/// service.
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: i32,
    pub login: String,
    pub social_id: String,
    pub email: String,
    pub status: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            login: account.login,
            social_id: account.social_id,
            email: account.email,
            status: account.status.as_str().to_owned(),
        }
    }
}

// ── POST /account/register ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub social_id: String,
    pub email: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiServiceError> {
    let usecase = RegisterAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase
        .execute(RegisterAccountInput {
            login: body.login,
            password: body.password,
            social_id: body.social_id,
            email: body.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

// ── POST /account/token ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiServiceError> {
    let usecase = LoginUseCase {
        repo: state.account_repo(),
        secret_key: state.secret_key.clone(),
        algorithm: state.algorithm,
        expire_minutes: state.expire_minutes,
    };
    let access_token = usecase.execute(&form.username, &form.password).await?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

// ── GET /account/me ──────────────────────────────────────────────────────────

pub async fn get_me(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
) -> Result<Json<AccountResponse>, ApiServiceError> {
    let account = state.guard().active_account(bearer_token(&bearer)?).await?;
    Ok(Json(account.into()))
}

// ── PUT /account/me ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub social_id: String,
}

pub async fn update_me(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<Json<AccountResponse>, ApiServiceError> {
    let account = state.guard().active_account(bearer_token(&bearer)?).await?;
    let usecase = UpdateSocialIdUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(&account, &body.social_id).await?;
    Ok(Json(account.into()))
}

// ── PUT /account/me/password ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

pub async fn change_password(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let account = state.guard().active_account(bearer_token(&bearer)?).await?;
    let usecase = ChangePasswordUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(&account, &body.old_password, &body.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /account/me/players ──────────────────────────────────────────────────

pub async fn my_players(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
) -> Result<Json<Vec<Player>>, ApiServiceError> {
    let account = state.guard().active_account(bearer_token(&bearer)?).await?;
    let usecase = MyPlayersUseCase {
        players: state.player_repo(),
    };
    Ok(Json(usecase.execute(account.id).await?))
}

// ── GET /account/me/is_admin ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct IsAdminResponse {
    pub login: String,
    pub is_admin: bool,
}

/// Identity echo for the admin frontend. Still on the legacy any-grant check;
/// the ranked guard replaces this once the frontend sends a level.
pub async fn is_admin(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
) -> Result<Json<IsAdminResponse>, ApiServiceError> {
    #[allow(deprecated)]
    let account = state.guard().require_admin(bearer_token(&bearer)?).await?;
    Ok(Json(IsAdminResponse {
        login: account.login,
        is_admin: true,
    }))
}
