use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use gmpanel_domain::authority::AuthorityLevel;
use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::types::{Image, ImageFilter, ImageKind};
use crate::error::ApiServiceError;
use crate::handlers::{BearerHeader, bearer_token};
use crate::state::AppState;
use crate::usecase::image::{
    DeleteImageUseCase, GetImageUseCase, ListImagesUseCase, ReplaceImageInput,
    ReplaceImageUseCase, UpdateImageInput, UpdateImageUseCase, UploadImageInput,
    UploadImageUseCase,
};

/// Pull the first `file` part out of a multipart body.
async fn read_file_part(
    mut multipart: Multipart,
) -> Result<(String, String, bytes::Bytes), ApiServiceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiServiceError::InvalidUpload("malformed multipart body".to_owned()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_filename = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field
            .content_type()
            .ok_or_else(|| {
                ApiServiceError::InvalidUpload("file part has no content type".to_owned())
            })?
            .to_owned();
        let bytes = field.bytes().await.map_err(|_| {
            ApiServiceError::InvalidUpload("failed to read uploaded file".to_owned())
        })?;
        return Ok((original_filename, content_type, bytes));
    }
    Err(ApiServiceError::InvalidUpload(
        "multipart body has no file part".to_owned(),
    ))
}

// ── GET /game/images ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ImageListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub site_id: Option<String>,
    pub image_type: Option<ImageKind>,
}

impl ImageListQuery {
    fn filter(&self) -> ImageFilter {
        if let Some(ref term) = self.search {
            ImageFilter::Search(term.clone())
        } else if let (Some(site_id), Some(kind)) = (&self.site_id, self.image_type) {
            ImageFilter::SiteAndKind {
                site_id: site_id.clone(),
                kind,
            }
        } else if let Some(ref site_id) = self.site_id {
            ImageFilter::Site(site_id.clone())
        } else if let Some(kind) = self.image_type {
            ImageFilter::Kind(kind)
        } else {
            ImageFilter::All
        }
    }

    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        }
    }
}

pub async fn get_images(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Query(query): Query<ImageListQuery>,
) -> Result<Json<Paginated<Image>>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = ListImagesUseCase {
        repo: state.image_repo(),
    };
    Ok(Json(
        usecase.execute(query.filter(), query.page_request()).await?,
    ))
}

// ── GET /game/images/site/{site_id} ──────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SiteImagesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub image_type: Option<ImageKind>,
}

pub async fn get_images_by_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    Query(query): Query<SiteImagesQuery>,
) -> Result<Json<Paginated<Image>>, ApiServiceError> {
    let filter = match query.image_type {
        Some(kind) => ImageFilter::SiteAndKind { site_id, kind },
        None => ImageFilter::Site(site_id),
    };
    let usecase = ListImagesUseCase {
        repo: state.image_repo(),
    };
    Ok(Json(
        usecase
            .execute(
                filter,
                PageRequest {
                    page: query.page.unwrap_or(1),
                    per_page: query.per_page.unwrap_or(20),
                },
            )
            .await?,
    ))
}

// ── GET /game/images/{id} ────────────────────────────────────────────────────

pub async fn get_image(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<Json<Image>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = GetImageUseCase {
        repo: state.image_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── POST /game/images/upload ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UploadQuery {
    pub image_type: ImageKind,
    pub site_id: String,
}

pub async fn upload_image(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Query(query): Query<UploadQuery>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Image>), ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let (original_filename, content_type, bytes) = read_file_part(multipart).await?;
    let usecase = UploadImageUseCase {
        repo: state.image_repo(),
        sites: state.site_repo(),
        files: state.file_store(),
    };
    let image = usecase
        .execute(UploadImageInput {
            original_filename,
            content_type,
            bytes,
            image_type: query.image_type,
            site_id: query.site_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

// ── PUT /game/images/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateImageRequest {
    pub original_filename: Option<String>,
    pub image_type: Option<ImageKind>,
    pub site_id: Option<String>,
}

pub async fn update_image(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateImageRequest>,
) -> Result<Json<Image>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = UpdateImageUseCase {
        repo: state.image_repo(),
        sites: state.site_repo(),
    };
    let image = usecase
        .execute(
            id,
            UpdateImageInput {
                original_filename: body.original_filename,
                image_type: body.image_type,
                site_id: body.site_id,
            },
        )
        .await?;
    Ok(Json(image))
}

// ── POST /game/images/{id}/replace ───────────────────────────────────────────

pub async fn replace_image(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<Image>, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let (original_filename, content_type, bytes) = read_file_part(multipart).await?;
    let usecase = ReplaceImageUseCase {
        repo: state.image_repo(),
        files: state.file_store(),
    };
    let image = usecase
        .execute(
            id,
            ReplaceImageInput {
                original_filename,
                content_type,
                bytes,
            },
        )
        .await?;
    Ok(Json(image))
}

// ── DELETE /game/images/{id} ─────────────────────────────────────────────────

pub async fn delete_image(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiServiceError> {
    state
        .guard()
        .require_level(bearer_token(&bearer)?, AuthorityLevel::Implementor)
        .await?;
    let usecase = DeleteImageUseCase {
        repo: state.image_repo(),
        files: state.file_store(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
