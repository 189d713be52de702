use std::sync::{Arc, Mutex};

use chrono::Utc;

use gmpanel_api::domain::repository::{
    AccountRepository, GmListRepository, NewAccount, NewPage, PageRepository, SiteRepository,
};
use gmpanel_api::domain::types::{Account, GmRecord, Page, PageFilter, Site, SiteFilter};
use gmpanel_api::error::ApiServiceError;
use gmpanel_domain::account::AccountStatus;
use gmpanel_domain::pagination::PageRequest;

pub const TEST_SECRET: &str = "integration-test-secret";

// ── MockAccountRepo ──────────────────────────────────────────────────────────

/// In-memory account store shared across usecases in a single scenario.
pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// A second handle over the same store, for wiring several usecases
    /// to one scenario.
    pub fn share(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
        }
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, ApiServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.login == login)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, ApiServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, ApiServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        let created = Account {
            id: accounts.len() as i32 + 1,
            login: account.login.clone(),
            password_digest: account.password_digest.clone(),
            social_id: account.social_id.clone(),
            email: account.email.clone(),
            status: AccountStatus::from_db("OK"),
        };
        accounts.push(created.clone());
        Ok(created)
    }

    async fn update_social_id(&self, id: i32, social_id: &str) -> Result<(), ApiServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.social_id = social_id.to_owned();
        }
        Ok(())
    }

    async fn update_password(
        &self,
        id: i32,
        password_digest: &str,
    ) -> Result<(), ApiServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.password_digest = password_digest.to_owned();
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, ApiServiceError> {
        Ok(self.accounts.lock().unwrap().len() as u64)
    }
}

// ── MockGmListRepo ───────────────────────────────────────────────────────────

pub struct MockGmListRepo {
    pub records: Vec<GmRecord>,
}

impl MockGmListRepo {
    pub fn empty() -> Self {
        Self { records: vec![] }
    }

    pub fn with_grant(account: &str, authority: &str) -> Self {
        Self {
            records: vec![GmRecord {
                account: account.to_owned(),
                name: None,
                authority: authority.to_owned(),
            }],
        }
    }
}

impl GmListRepository for MockGmListRepo {
    async fn find_by_account(&self, login: &str) -> Result<Option<GmRecord>, ApiServiceError> {
        Ok(self
            .records
            .iter()
            .find(|r| r.account == login)
            .cloned())
    }
}

// ── MockSiteRepo ─────────────────────────────────────────────────────────────

/// In-memory site store with the same filter semantics as the database
/// repository.
pub struct MockSiteRepo {
    pub sites: Arc<Mutex<Vec<Site>>>,
}

impl MockSiteRepo {
    pub fn empty() -> Self {
        Self {
            sites: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn share(&self) -> Self {
        Self {
            sites: Arc::clone(&self.sites),
        }
    }
}

impl SiteRepository for MockSiteRepo {
    async fn list(
        &self,
        filter: &SiteFilter,
        page: PageRequest,
    ) -> Result<(Vec<Site>, u64), ApiServiceError> {
        let sites = self.sites.lock().unwrap();
        let matched: Vec<Site> = sites
            .iter()
            .filter(|s| match filter {
                SiteFilter::Search(term) => {
                    s.name.contains(term)
                        || s.slug.contains(term)
                        || s.footer_info.as_deref().is_some_and(|f| f.contains(term))
                }
                SiteFilter::ActiveOnly => s.is_active,
                SiteFilter::MaintenanceOnly => s.maintenance_mode,
                SiteFilter::All => true,
            })
            .cloned()
            .collect();
        let total = matched.len() as u64;
        let start = ((page.page - 1) * page.per_page) as usize;
        let items = matched
            .into_iter()
            .skip(start)
            .take(page.per_page as usize)
            .collect();
        Ok((items, total))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Site>, ApiServiceError> {
        Ok(self
            .sites
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Site>, ApiServiceError> {
        Ok(self
            .sites
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.slug == slug)
            .cloned())
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, ApiServiceError> {
        Ok(self
            .sites
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.slug == slug && exclude_id != Some(s.id.as_str())))
    }

    async fn create(&self, site: &Site) -> Result<(), ApiServiceError> {
        self.sites.lock().unwrap().push(site.clone());
        Ok(())
    }

    async fn update(&self, site: &Site) -> Result<(), ApiServiceError> {
        let mut sites = self.sites.lock().unwrap();
        if let Some(existing) = sites.iter_mut().find(|s| s.id == site.id) {
            *existing = site.clone();
        }
        Ok(())
    }

    async fn set_active(&self, id: &str, active: bool) -> Result<(), ApiServiceError> {
        let mut sites = self.sites.lock().unwrap();
        if let Some(site) = sites.iter_mut().find(|s| s.id == id) {
            site.is_active = active;
        }
        Ok(())
    }

    async fn set_maintenance(&self, id: &str, maintenance: bool) -> Result<(), ApiServiceError> {
        let mut sites = self.sites.lock().unwrap();
        if let Some(site) = sites.iter_mut().find(|s| s.id == id) {
            site.maintenance_mode = maintenance;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, ApiServiceError> {
        let mut sites = self.sites.lock().unwrap();
        let before = sites.len();
        sites.retain(|s| s.id != id);
        Ok(sites.len() < before)
    }
}

// ── MockPageRepo ─────────────────────────────────────────────────────────────

pub struct MockPageRepo {
    pub pages: Arc<Mutex<Vec<Page>>>,
}

impl MockPageRepo {
    pub fn empty() -> Self {
        Self {
            pages: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn share(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
        }
    }
}

impl PageRepository for MockPageRepo {
    async fn list(
        &self,
        filter: &PageFilter,
        page: PageRequest,
    ) -> Result<(Vec<Page>, u64), ApiServiceError> {
        let pages = self.pages.lock().unwrap();
        let matched: Vec<Page> = pages
            .iter()
            .filter(|p| match filter {
                PageFilter::Search(term) => {
                    p.title.contains(term) || p.slug.contains(term) || p.content.contains(term)
                }
                PageFilter::PublishedOnly => p.published,
                PageFilter::Site(site_id) => &p.site_id == site_id,
                PageFilter::SitePublished(site_id) => &p.site_id == site_id && p.published,
                PageFilter::All => true,
            })
            .cloned()
            .collect();
        let total = matched.len() as u64;
        let start = ((page.page - 1) * page.per_page) as usize;
        let items = matched
            .into_iter()
            .skip(start)
            .take(page.per_page as usize)
            .collect();
        Ok((items, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Page>, ApiServiceError> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, ApiServiceError> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, ApiServiceError> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.slug == slug && exclude_id != Some(p.id)))
    }

    async fn create(&self, page: &NewPage) -> Result<Page, ApiServiceError> {
        let mut pages = self.pages.lock().unwrap();
        let now = Utc::now();
        let created = Page {
            id: pages.len() as i32 + 1,
            slug: page.slug.clone(),
            title: page.title.clone(),
            content: page.content.clone(),
            published: page.published,
            meta_description: page.meta_description.clone(),
            meta_keywords: page.meta_keywords.clone(),
            site_id: page.site_id.clone(),
            created_at: now,
            updated_at: now,
        };
        pages.push(created.clone());
        Ok(created)
    }

    async fn update(&self, page: &Page) -> Result<(), ApiServiceError> {
        let mut pages = self.pages.lock().unwrap();
        if let Some(existing) = pages.iter_mut().find(|p| p.id == page.id) {
            *existing = page.clone();
        }
        Ok(())
    }

    async fn set_published(&self, id: i32, published: bool) -> Result<(), ApiServiceError> {
        let mut pages = self.pages.lock().unwrap();
        if let Some(page) = pages.iter_mut().find(|p| p.id == id) {
            page.published = published;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let mut pages = self.pages.lock().unwrap();
        let before = pages.len();
        pages.retain(|p| p.id != id);
        Ok(pages.len() < before)
    }
}
