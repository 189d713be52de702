use sea_orm::Database;
use tracing::info;

use gmpanel_api::config::ApiConfig;
use gmpanel_api::router::build_router;
use gmpanel_api::state::AppState;

#[tokio::main]
async fn main() {
    gmpanel_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let content_db = Database::connect(&config.database_url_app)
        .await
        .expect("failed to connect to content database");
    let account_db = Database::connect(&config.database_url_account)
        .await
        .expect("failed to connect to account database");
    let player_db = Database::connect(&config.database_url_player)
        .await
        .expect("failed to connect to player database");
    let common_db = Database::connect(&config.database_url_common)
        .await
        .expect("failed to connect to common database");

    let state = AppState {
        content_db,
        account_db,
        player_db,
        common_db,
        secret_key: config.secret_key,
        algorithm: config.algorithm,
        expire_minutes: config.access_token_expire_minutes,
        upload_dir: config.upload_dir.into(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
