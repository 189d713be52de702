use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use gmpanel_domain::account::AccountStatus;

// ── Legacy game-server records ───────────────────────────────────────────────

/// Game account. `password_digest` is the 41-char game-compatible digest and
/// must never be serialized; handlers build explicit response structs.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i32,
    pub login: String,
    pub password_digest: String,
    pub social_id: String,
    pub email: String,
    pub status: AccountStatus,
}

/// GM grant from the common database. `authority` is the stored level name,
/// kept verbatim even when it is not a known level.
#[derive(Debug, Clone)]
pub struct GmRecord {
    pub account: String,
    pub name: Option<String>,
    pub authority: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub account_id: i32,
    pub name: Option<String>,
    pub job: Option<i32>,
    pub level: Option<i32>,
    pub exp: Option<i32>,
    pub last_play: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Guild {
    pub id: i32,
    pub name: Option<String>,
    pub master: Option<i32>,
    pub level: Option<i32>,
    pub exp: Option<i32>,
    pub win: Option<i32>,
    pub draw: Option<i32>,
    pub loss: Option<i32>,
    pub ladder_point: Option<i32>,
    pub gold: Option<i32>,
}

// ── Web content ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub initial_level: String,
    pub max_level: String,
    pub rates: Option<String>,
    pub facebook_url: Option<String>,
    pub facebook_enable: bool,
    pub footer_info: Option<String>,
    pub footer_menu_enable: bool,
    pub footer_info_enable: bool,
    pub forum_url: Option<String>,
    pub last_online: bool,
    pub is_active: bool,
    pub maintenance_mode: bool,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub site_id: String,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Download {
    pub id: i32,
    pub provider: String,
    pub size: String,
    pub link: String,
    pub published: bool,
    pub category: String,
    pub site_id: String,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

/// Supported image slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Logo,
    Bg,
}

impl ImageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Bg => "bg",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "logo" => Some(Self::Logo),
            "bg" => Some(Self::Bg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Image {
    pub id: i32,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub image_type: ImageKind,
    pub file_size: i64,
    pub site_id: String,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

// ── List filters ─────────────────────────────────────────────────────────────

/// Download listing filters, in the precedence order the routes apply them.
#[derive(Debug, Clone)]
pub enum DownloadFilter {
    Search(String),
    SiteAndCategory { site_id: String, category: String },
    Site(String),
    Category(String),
    Provider(String),
    PublishedOnly,
    All,
}

#[derive(Debug, Clone)]
pub enum PageFilter {
    Search(String),
    PublishedOnly,
    Site(String),
    SitePublished(String),
    All,
}

#[derive(Debug, Clone)]
pub enum SiteFilter {
    Search(String),
    ActiveOnly,
    MaintenanceOnly,
    All,
}

#[derive(Debug, Clone)]
pub enum ImageFilter {
    Search(String),
    SiteAndKind { site_id: String, kind: ImageKind },
    Site(String),
    Kind(ImageKind),
    All,
}

// ── Stats ────────────────────────────────────────────────────────────────────

/// Aggregate snapshot across the four stores. Not atomic: each count is a
/// separate query against an independently-updated database.
#[derive(Debug, Clone, Serialize)]
pub struct SiteStats {
    pub site_id: String,
    pub site_name: String,
    pub downloads_total: u64,
    pub downloads_published: u64,
    pub is_active: bool,
    pub maintenance_mode: bool,
    pub online_players_5_minutes: u64,
    pub online_players_24_hours: u64,
    pub total_players: u64,
    pub total_accounts: u64,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "gmpanel_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}
