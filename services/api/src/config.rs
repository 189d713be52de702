use jsonwebtoken::Algorithm;

/// Api service configuration loaded from environment variables.
///
/// Every value has a default so local tooling can start without a full
/// server stack; override them in any real deployment.
#[derive(Debug)]
pub struct ApiConfig {
    /// MySQL URL for the web content database (sites, pages, downloads, images).
    pub database_url_app: String,
    /// MySQL URL for the game account database.
    pub database_url_account: String,
    /// MySQL URL for the game player database.
    pub database_url_player: String,
    /// MySQL URL for the game common database (GM list).
    pub database_url_common: String,
    /// HMAC secret for signing access tokens.
    pub secret_key: String,
    /// JWT signing algorithm (default HS256). Env var: `ALGORITHM`.
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes (default 30).
    pub access_token_expire_minutes: u64,
    /// Filesystem directory for uploaded images (default "static/uploads").
    pub upload_dir: String,
    /// TCP port to listen on (default 8000). Env var: `API_PORT`.
    pub api_port: u16,
}

const DEFAULT_SECRET_KEY: &str = "your-secret-key";

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let secret_key = get("SECRET_KEY").unwrap_or_else(|| {
            tracing::warn!("SECRET_KEY not set, tokens are signed with the built-in default");
            DEFAULT_SECRET_KEY.to_owned()
        });
        Self {
            database_url_app: get("DATABASE_URL_APP")
                .unwrap_or_else(|| "mysql://root:password@db:3306/application".to_owned()),
            database_url_account: get("DATABASE_URL_ACCOUNT")
                .unwrap_or_else(|| "mysql://game:password@db:3306/srv1_account".to_owned()),
            database_url_player: get("DATABASE_URL_PLAYER")
                .unwrap_or_else(|| "mysql://game:password@db:3306/srv1_player".to_owned()),
            database_url_common: get("DATABASE_URL_COMMON")
                .unwrap_or_else(|| "mysql://game:password@db:3306/srv1_common".to_owned()),
            secret_key,
            algorithm: get("ALGORITHM")
                .and_then(|v| parse_algorithm(&v))
                .unwrap_or(Algorithm::HS256),
            access_token_expire_minutes: get("ACCESS_TOKEN_EXPIRE_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            upload_dir: get("UPLOAD_DIR").unwrap_or_else(|| "static/uploads".to_owned()),
            api_port: get("API_PORT").and_then(|v| v.parse().ok()).unwrap_or(8000),
        }
    }
}

fn parse_algorithm(name: &str) -> Option<Algorithm> {
    match name {
        "HS256" => Some(Algorithm::HS256),
        "HS384" => Some(Algorithm::HS384),
        "HS512" => Some(Algorithm::HS512),
        _ => None,
    }
}
