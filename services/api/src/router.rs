use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use gmpanel_core::middleware::{propagate_request_id_layer, set_request_id_layer};

use crate::handlers::account::{
    change_password, get_me, is_admin, login, my_players, register, update_me,
};
use crate::handlers::download::{
    create_download, delete_download, get_download, get_downloads, get_downloads_by_site,
    publish_download, unpublish_download, update_download,
};
use crate::handlers::health::{healthz, readyz};
use crate::handlers::image::{
    delete_image, get_image, get_images, get_images_by_site, replace_image, update_image,
    upload_image,
};
use crate::handlers::page::{
    create_page, delete_page, get_page, get_page_by_slug, get_pages, get_pages_by_site,
    publish_page, unpublish_page, update_page,
};
use crate::handlers::player::{get_guilds, get_players};
use crate::handlers::site::{
    activate_site, create_site, deactivate_site, delete_site, disable_maintenance,
    enable_maintenance, get_site, get_site_by_slug, get_site_stats, get_sites, update_site,
};
use crate::state::AppState;
use crate::usecase::image::MAX_UPLOAD_BYTES;

pub fn build_router(state: AppState) -> Router {
    let account = Router::new()
        .route("/register", post(register))
        .route("/token", post(login))
        .route("/me", get(get_me).put(update_me))
        .route("/me/password", put(change_password))
        .route("/me/players", get(my_players))
        .route("/me/is_admin", get(is_admin));

    let game = Router::new()
        // Rankings
        .route("/players", get(get_players))
        .route("/guilds", get(get_guilds))
        // Sites
        .route("/sites", get(get_sites).post(create_site))
        .route("/sites/slug/{slug}", get(get_site_by_slug))
        .route(
            "/sites/{id}",
            get(get_site).put(update_site).delete(delete_site),
        )
        .route("/sites/{id}/activate", patch(activate_site))
        .route("/sites/{id}/deactivate", patch(deactivate_site))
        .route("/sites/{id}/maintenance/enable", patch(enable_maintenance))
        .route("/sites/{id}/maintenance/disable", patch(disable_maintenance))
        .route("/sites/{id}/stats", get(get_site_stats))
        // Pages
        .route("/pages", get(get_pages).post(create_page))
        .route("/pages/slug/{slug}", get(get_page_by_slug))
        .route("/pages/site/{site_id}", get(get_pages_by_site))
        .route(
            "/pages/{id}",
            get(get_page).put(update_page).delete(delete_page),
        )
        .route("/pages/{id}/publish", patch(publish_page))
        .route("/pages/{id}/unpublish", patch(unpublish_page))
        // Downloads
        .route("/downloads", get(get_downloads).post(create_download))
        .route("/downloads/site/{site_id}", get(get_downloads_by_site))
        .route(
            "/downloads/{id}",
            get(get_download).put(update_download).delete(delete_download),
        )
        .route("/downloads/{id}/publish", patch(publish_download))
        .route("/downloads/{id}/unpublish", patch(unpublish_download))
        // Images
        .route("/images", get(get_images))
        .route("/images/upload", post(upload_image))
        .route("/images/site/{site_id}", get(get_images_by_site))
        .route(
            "/images/{id}",
            get(get_image).put(update_image).delete(delete_image),
        )
        .route("/images/{id}/replace", post(replace_image));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api/v1/account", account)
        .nest("/api/v1/game", game)
        // Uploads may carry up to 5 MiB of file plus multipart framing.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        // Set wraps everything so the id is visible to the trace layer;
        // propagate sits inside it to copy the id onto responses.
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
        .with_state(state)
}
