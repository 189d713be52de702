use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gmpanel_domain::authority::AuthorityLevel;

/// Api service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("could not validate credentials")]
    Unauthorized,
    #[error("inactive account")]
    InactiveAccount,
    #[error("authority level {required} or higher required, current level is {current}")]
    Forbidden {
        required: AuthorityLevel,
        current: String,
    },
    #[error("site not found")]
    SiteNotFound,
    #[error("page not found")]
    PageNotFound,
    #[error("download not found")]
    DownloadNotFound,
    #[error("image not found")]
    ImageNotFound,
    #[error("login already registered")]
    LoginTaken,
    #[error("email already registered")]
    EmailTaken,
    #[error("slug already in use")]
    SlugTaken,
    #[error("filename already in use for this site")]
    FilenameTaken,
    #[error("social id must be exactly 7 digits")]
    InvalidSocialId,
    #[error("missing data")]
    MissingData,
    #[error("{0}")]
    InvalidUpload(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InactiveAccount => "INACTIVE_ACCOUNT",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::SiteNotFound => "SITE_NOT_FOUND",
            Self::PageNotFound => "PAGE_NOT_FOUND",
            Self::DownloadNotFound => "DOWNLOAD_NOT_FOUND",
            Self::ImageNotFound => "IMAGE_NOT_FOUND",
            Self::LoginTaken => "LOGIN_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::SlugTaken => "SLUG_TAKEN",
            Self::FilenameTaken => "FILENAME_TAKEN",
            Self::InvalidSocialId => "INVALID_SOCIAL_ID",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidUpload(_) => "INVALID_UPLOAD",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::SiteNotFound
            | Self::PageNotFound
            | Self::DownloadNotFound
            | Self::ImageNotFound => StatusCode::NOT_FOUND,
            Self::SlugTaken | Self::FilenameTaken => StatusCode::CONFLICT,
            Self::InactiveAccount
            | Self::LoginTaken
            | Self::EmailTaken
            | Self::InvalidSocialId
            | Self::MissingData
            | Self::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
