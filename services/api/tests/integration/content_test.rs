use gmpanel_api::domain::repository::NewPage;
use gmpanel_api::domain::types::{PageFilter, SiteFilter};
use gmpanel_api::error::ApiServiceError;
use gmpanel_api::usecase::page::{
    CreatePageUseCase, GetPageUseCase, SetPagePublishedUseCase,
};
use gmpanel_api::usecase::site::{
    CreateSiteInput, CreateSiteUseCase, DeleteSiteUseCase, GetSiteUseCase, ListSitesUseCase,
    SetSiteActiveUseCase, UpdateSiteInput, UpdateSiteUseCase,
};
use gmpanel_domain::pagination::PageRequest;

use crate::helpers::{MockPageRepo, MockSiteRepo};

fn site_input(name: &str, slug: &str) -> CreateSiteInput {
    CreateSiteInput {
        name: name.to_owned(),
        slug: slug.to_owned(),
        initial_level: "1".to_owned(),
        max_level: "105".to_owned(),
        rates: Some("exp x5".to_owned()),
        facebook_url: None,
        facebook_enable: false,
        footer_info: None,
        footer_menu_enable: false,
        footer_info_enable: false,
        forum_url: None,
        last_online: false,
    }
}

// ── site lifecycle ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_walk_a_site_through_its_lifecycle() {
    let repo = MockSiteRepo::empty();

    let site = CreateSiteUseCase { repo: repo.share() }
        .execute(site_input("Retro MT2", "retro"))
        .await
        .unwrap();
    assert!(site.is_active);
    assert!(!site.maintenance_mode);

    // Duplicate slug is rejected.
    let dup = CreateSiteUseCase { repo: repo.share() }
        .execute(site_input("Retro Clone", "retro"))
        .await;
    assert!(matches!(dup, Err(ApiServiceError::SlugTaken)));

    // Renaming to its own slug is fine.
    let updated = UpdateSiteUseCase { repo: repo.share() }
        .execute(
            &site.id,
            UpdateSiteInput {
                slug: Some("retro".to_owned()),
                name: Some("Retro MT2 Reborn".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Retro MT2 Reborn");

    // Deactivated sites vanish from the public slug lookup.
    SetSiteActiveUseCase { repo: repo.share() }
        .execute(&site.id, false)
        .await
        .unwrap();
    let hidden = GetSiteUseCase { repo: repo.share() }
        .execute_by_slug("retro")
        .await;
    assert!(matches!(hidden, Err(ApiServiceError::SiteNotFound)));

    // But the admin id lookup still sees them.
    assert!(GetSiteUseCase { repo: repo.share() }.execute(&site.id).await.is_ok());

    DeleteSiteUseCase { repo: repo.share() }
        .execute(&site.id)
        .await
        .unwrap();
    let gone = GetSiteUseCase { repo }.execute(&site.id).await;
    assert!(matches!(gone, Err(ApiServiceError::SiteNotFound)));
}

#[tokio::test]
async fn should_paginate_site_listing() {
    let repo = MockSiteRepo::empty();
    let create = CreateSiteUseCase { repo: repo.share() };
    for i in 0..45 {
        create
            .execute(site_input(&format!("Server {i}"), &format!("srv-{i}")))
            .await
            .unwrap();
    }

    let listing = ListSitesUseCase { repo }
        .execute(
            SiteFilter::All,
            PageRequest {
                page: 3,
                per_page: 20,
            },
        )
        .await
        .unwrap();
    assert_eq!(listing.total, 45);
    assert_eq!(listing.total_pages, 3);
    assert_eq!(listing.items.len(), 5);
    assert!(!listing.has_next);
    assert!(listing.has_prev);
}

#[tokio::test]
async fn should_find_site_by_footer_info_search() {
    let repo = MockSiteRepo::empty();
    let mut input = site_input("Retro MT2", "retro");
    input.footer_info = Some("hosted by dragonnet".to_owned());
    CreateSiteUseCase { repo: repo.share() }
        .execute(input)
        .await
        .unwrap();
    CreateSiteUseCase { repo: repo.share() }
        .execute(site_input("Other", "other"))
        .await
        .unwrap();

    let listing = ListSitesUseCase { repo }
        .execute(
            SiteFilter::Search("dragonnet".to_owned()),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.items[0].slug, "retro");
}

// ── page publish flow ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_a_page_until_it_is_published() {
    let repo = MockPageRepo::empty();

    let page = CreatePageUseCase { repo: repo.share() }
        .execute(NewPage {
            slug: "rules".to_owned(),
            title: "Server Rules".to_owned(),
            content: "be nice".to_owned(),
            published: false,
            meta_description: None,
            meta_keywords: None,
            site_id: "site-1".to_owned(),
        })
        .await
        .unwrap();

    let hidden = GetPageUseCase { repo: repo.share() }
        .execute_by_slug("rules")
        .await;
    assert!(matches!(hidden, Err(ApiServiceError::PageNotFound)));

    SetPagePublishedUseCase { repo: repo.share() }
        .execute(page.id, true)
        .await
        .unwrap();

    let visible = GetPageUseCase { repo }
        .execute_by_slug("rules")
        .await
        .unwrap();
    assert!(visible.published);
}

#[tokio::test]
async fn should_filter_pages_by_site_and_published() {
    let repo = MockPageRepo::empty();
    let create = CreatePageUseCase { repo: repo.share() };
    for (slug, site_id, published) in [
        ("rules", "site-1", true),
        ("events", "site-1", false),
        ("faq", "site-2", true),
    ] {
        create
            .execute(NewPage {
                slug: slug.to_owned(),
                title: slug.to_owned(),
                content: String::new(),
                published,
                meta_description: None,
                meta_keywords: None,
                site_id: site_id.to_owned(),
            })
            .await
            .unwrap();
    }

    let (pages, total) = {
        use gmpanel_api::domain::repository::PageRepository as _;
        repo.list(
            &PageFilter::SitePublished("site-1".to_owned()),
            PageRequest::default(),
        )
        .await
        .unwrap()
    };
    assert_eq!(total, 1);
    assert_eq!(pages[0].slug, "rules");
}
