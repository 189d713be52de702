use chrono::Utc;

use gmpanel_domain::pagination::{PageRequest, Paginated};

use crate::domain::repository::{NewPage, PageRepository};
use crate::domain::types::{Page, PageFilter};
use crate::error::ApiServiceError;

// ── ListPages ────────────────────────────────────────────────────────────────

pub struct ListPagesUseCase<P: PageRepository> {
    pub repo: P,
}

impl<P: PageRepository> ListPagesUseCase<P> {
    pub async fn execute(
        &self,
        filter: PageFilter,
        page: PageRequest,
    ) -> Result<Paginated<Page>, ApiServiceError> {
        let page = page.clamped();
        let (pages, total) = self.repo.list(&filter, page).await?;
        Ok(Paginated::new(pages, total, page.page, page.per_page))
    }
}

// ── GetPage ──────────────────────────────────────────────────────────────────

pub struct GetPageUseCase<P: PageRepository> {
    pub repo: P,
}

impl<P: PageRepository> GetPageUseCase<P> {
    pub async fn execute(&self, id: i32) -> Result<Page, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::PageNotFound)
    }

    /// Public slug lookup. Unpublished pages are indistinguishable from
    /// missing ones.
    pub async fn execute_by_slug(&self, slug: &str) -> Result<Page, ApiServiceError> {
        let page = self
            .repo
            .find_by_slug(slug)
            .await?
            .ok_or(ApiServiceError::PageNotFound)?;
        if !page.published {
            return Err(ApiServiceError::PageNotFound);
        }
        Ok(page)
    }
}

// ── CreatePage ───────────────────────────────────────────────────────────────

pub struct CreatePageUseCase<P: PageRepository> {
    pub repo: P,
}

impl<P: PageRepository> CreatePageUseCase<P> {
    pub async fn execute(&self, input: NewPage) -> Result<Page, ApiServiceError> {
        if self.repo.slug_exists(&input.slug, None).await? {
            return Err(ApiServiceError::SlugTaken);
        }
        self.repo.create(&input).await
    }
}

// ── UpdatePage ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdatePageInput {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

pub struct UpdatePageUseCase<P: PageRepository> {
    pub repo: P,
}

impl<P: PageRepository> UpdatePageUseCase<P> {
    pub async fn execute(&self, id: i32, input: UpdatePageInput) -> Result<Page, ApiServiceError> {
        let mut page = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::PageNotFound)?;
        if let Some(ref slug) = input.slug {
            if slug != &page.slug && self.repo.slug_exists(slug, Some(id)).await? {
                return Err(ApiServiceError::SlugTaken);
            }
            page.slug = slug.clone();
        }
        if let Some(title) = input.title {
            page.title = title;
        }
        if let Some(content) = input.content {
            page.content = content;
        }
        if let Some(published) = input.published {
            page.published = published;
        }
        if let Some(meta_description) = input.meta_description {
            page.meta_description = Some(meta_description);
        }
        if let Some(meta_keywords) = input.meta_keywords {
            page.meta_keywords = Some(meta_keywords);
        }
        page.updated_at = Utc::now();
        self.repo.update(&page).await?;
        Ok(page)
    }
}

// ── Publish flags ────────────────────────────────────────────────────────────

pub struct SetPagePublishedUseCase<P: PageRepository> {
    pub repo: P,
}

impl<P: PageRepository> SetPagePublishedUseCase<P> {
    pub async fn execute(&self, id: i32, published: bool) -> Result<Page, ApiServiceError> {
        let mut page = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::PageNotFound)?;
        self.repo.set_published(id, published).await?;
        page.published = published;
        page.updated_at = Utc::now();
        Ok(page)
    }
}

// ── DeletePage ───────────────────────────────────────────────────────────────

pub struct DeletePageUseCase<P: PageRepository> {
    pub repo: P,
}

impl<P: PageRepository> DeletePageUseCase<P> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::PageNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPageRepo {
        page: Option<Page>,
        taken_slug: Option<String>,
    }

    impl PageRepository for MockPageRepo {
        async fn list(
            &self,
            _filter: &PageFilter,
            _page: PageRequest,
        ) -> Result<(Vec<Page>, u64), ApiServiceError> {
            Ok((vec![], 0))
        }
        async fn find_by_id(&self, _id: i32) -> Result<Option<Page>, ApiServiceError> {
            Ok(self.page.clone())
        }
        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Page>, ApiServiceError> {
            Ok(self.page.clone())
        }
        async fn slug_exists(
            &self,
            slug: &str,
            _exclude_id: Option<i32>,
        ) -> Result<bool, ApiServiceError> {
            Ok(self.taken_slug.as_deref() == Some(slug))
        }
        async fn create(&self, page: &NewPage) -> Result<Page, ApiServiceError> {
            let now = Utc::now();
            Ok(Page {
                id: 1,
                slug: page.slug.clone(),
                title: page.title.clone(),
                content: page.content.clone(),
                published: page.published,
                meta_description: page.meta_description.clone(),
                meta_keywords: page.meta_keywords.clone(),
                site_id: page.site_id.clone(),
                created_at: now,
                updated_at: now,
            })
        }
        async fn update(&self, _page: &Page) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn set_published(&self, _id: i32, _p: bool) -> Result<(), ApiServiceError> {
            Ok(())
        }
        async fn delete(&self, _id: i32) -> Result<bool, ApiServiceError> {
            Ok(self.page.is_some())
        }
    }

    fn test_page(published: bool) -> Page {
        let now = Utc::now();
        Page {
            id: 1,
            slug: "rules".into(),
            title: "Server Rules".into(),
            content: "be nice".into(),
            published,
            meta_description: None,
            meta_keywords: None,
            site_id: "site-1".into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn new_page(slug: &str) -> NewPage {
        NewPage {
            slug: slug.into(),
            title: "Server Rules".into(),
            content: "be nice".into(),
            published: true,
            meta_description: None,
            meta_keywords: None,
            site_id: "site-1".into(),
        }
    }

    #[tokio::test]
    async fn should_reject_duplicate_slug_on_create() {
        let usecase = CreatePageUseCase {
            repo: MockPageRepo {
                page: None,
                taken_slug: Some("rules".into()),
            },
        };
        let result = usecase.execute(new_page("rules")).await;
        assert!(matches!(result, Err(ApiServiceError::SlugTaken)));
    }

    #[tokio::test]
    async fn should_hide_unpublished_page_from_slug_lookup() {
        let usecase = GetPageUseCase {
            repo: MockPageRepo {
                page: Some(test_page(false)),
                taken_slug: None,
            },
        };
        let result = usecase.execute_by_slug("rules").await;
        assert!(matches!(result, Err(ApiServiceError::PageNotFound)));
    }

    #[tokio::test]
    async fn should_serve_published_page_by_slug() {
        let usecase = GetPageUseCase {
            repo: MockPageRepo {
                page: Some(test_page(true)),
                taken_slug: None,
            },
        };
        assert!(usecase.execute_by_slug("rules").await.is_ok());
    }

    #[tokio::test]
    async fn should_allow_keeping_own_slug_on_update() {
        let usecase = UpdatePageUseCase {
            repo: MockPageRepo {
                page: Some(test_page(true)),
                taken_slug: Some("rules".into()),
            },
        };
        let result = usecase
            .execute(
                1,
                UpdatePageInput {
                    slug: Some("rules".into()),
                    title: Some("Rules v2".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_page() {
        let usecase = GetPageUseCase {
            repo: MockPageRepo {
                page: None,
                taken_slug: None,
            },
        };
        let result = usecase.execute(99).await;
        assert!(matches!(result, Err(ApiServiceError::PageNotFound)));
    }
}
