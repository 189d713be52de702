use bytes::Bytes;
use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::{FileStore, ImageRepository, NewImage, SiteRepository};
use crate::domain::types::{Image, ImageFilter, ImageKind};
use crate::error::ApiServiceError;

pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Reject disallowed MIME types and oversized payloads. Must run before any
/// filesystem write.
fn validate_upload(content_type: &str, size: usize) -> Result<(), ApiServiceError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(ApiServiceError::InvalidUpload(format!(
            "file type {content_type} not allowed; allowed: {}",
            ALLOWED_IMAGE_TYPES.join(", ")
        )));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ApiServiceError::InvalidUpload(
            "file too large (max 5 MiB)".to_owned(),
        ));
    }
    Ok(())
}

/// UUID filename keeping the original extension, so the upload directory
/// never collides on user-supplied names.
fn generate_filename(original: &str) -> String {
    match Path::new(original).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}

// ── ListImages / GetImage ────────────────────────────────────────────────────

pub struct ListImagesUseCase<I: ImageRepository> {
    pub repo: I,
}

impl<I: ImageRepository> ListImagesUseCase<I> {
    pub async fn execute(
        &self,
        filter: ImageFilter,
        page: PageRequest,
    ) -> Result<Paginated<Image>, ApiServiceError> {
        let page = page.clamped();
        let (images, total) = self.repo.list(&filter, page).await?;
        Ok(Paginated::new(images, total, page.page, page.per_page))
    }
}

pub struct GetImageUseCase<I: ImageRepository> {
    pub repo: I,
}

impl<I: ImageRepository> GetImageUseCase<I> {
    pub async fn execute(&self, id: i32) -> Result<Image, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::ImageNotFound)
    }
}

// ── UploadImage ──────────────────────────────────────────────────────────────

pub struct UploadImageInput {
    pub original_filename: String,
    pub content_type: String,
    pub bytes: Bytes,
    pub image_type: ImageKind,
    pub site_id: String,
}

pub struct UploadImageUseCase<I: ImageRepository, S: SiteRepository, F: FileStore> {
    pub repo: I,
    pub sites: S,
    pub files: F,
}

impl<I: ImageRepository, S: SiteRepository, F: FileStore> UploadImageUseCase<I, S, F> {
    /// Validates, writes the file, then inserts the row. File before row:
    /// a crash in between leaves an orphan file, never a row without a file.
    pub async fn execute(&self, input: UploadImageInput) -> Result<Image, ApiServiceError> {
        validate_upload(&input.content_type, input.bytes.len())?;
        if self.sites.find_by_id(&input.site_id).await?.is_none() {
            return Err(ApiServiceError::SiteNotFound);
        }
        let filename = generate_filename(&input.original_filename);
        if self
            .repo
            .filename_exists(&input.site_id, &filename)
            .await?
        {
            return Err(ApiServiceError::FilenameTaken);
        }
        let file_path = self.files.save(&filename, &input.bytes).await?;
        self.repo
            .create(&NewImage {
                filename,
                original_filename: input.original_filename,
                file_path,
                image_type: input.image_type,
                file_size: input.bytes.len() as i64,
                site_id: input.site_id,
            })
            .await
    }
}

// ── UpdateImage (metadata only) ──────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateImageInput {
    pub original_filename: Option<String>,
    pub image_type: Option<ImageKind>,
    pub site_id: Option<String>,
}

pub struct UpdateImageUseCase<I: ImageRepository, S: SiteRepository> {
    pub repo: I,
    pub sites: S,
}

impl<I: ImageRepository, S: SiteRepository> UpdateImageUseCase<I, S> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateImageInput,
    ) -> Result<Image, ApiServiceError> {
        let mut image = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::ImageNotFound)?;
        if let Some(site_id) = input.site_id {
            if self.sites.find_by_id(&site_id).await?.is_none() {
                return Err(ApiServiceError::SiteNotFound);
            }
            image.site_id = site_id;
        }
        if let Some(original_filename) = input.original_filename {
            image.original_filename = original_filename;
        }
        if let Some(image_type) = input.image_type {
            image.image_type = image_type;
        }
        image.updated_at = Utc::now();
        self.repo.update(&image).await?;
        Ok(image)
    }
}

// ── ReplaceImageFile ─────────────────────────────────────────────────────────

pub struct ReplaceImageInput {
    pub original_filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

pub struct ReplaceImageUseCase<I: ImageRepository, F: FileStore> {
    pub repo: I,
    pub files: F,
}

impl<I: ImageRepository, F: FileStore> ReplaceImageUseCase<I, F> {
    pub async fn execute(
        &self,
        id: i32,
        input: ReplaceImageInput,
    ) -> Result<Image, ApiServiceError> {
        let mut image = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::ImageNotFound)?;
        validate_upload(&input.content_type, input.bytes.len())?;

        self.files.delete(&image.file_path).await?;
        let filename = generate_filename(&input.original_filename);
        let file_path = self.files.save(&filename, &input.bytes).await?;

        image.filename = filename;
        image.original_filename = input.original_filename;
        image.file_path = file_path;
        image.file_size = input.bytes.len() as i64;
        image.updated_at = Utc::now();
        self.repo.update(&image).await?;
        Ok(image)
    }
}

// ── DeleteImage ──────────────────────────────────────────────────────────────

pub struct DeleteImageUseCase<I: ImageRepository, F: FileStore> {
    pub repo: I,
    pub files: F,
}

impl<I: ImageRepository, F: FileStore> DeleteImageUseCase<I, F> {
    /// File first, then row. A file already gone is tolerated so a
    /// half-finished earlier delete can be retried.
    pub async fn execute(&self, id: i32) -> Result<(), ApiServiceError> {
        let image = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::ImageNotFound)?;
        self.files.delete(&image.file_path).await?;
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::ImageNotFound);
        }
        Ok(())
    }
}
