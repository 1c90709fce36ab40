//! HTTP inbound adapter exposing the blog REST endpoints.

pub mod error;
pub mod health;
pub mod posts;
pub mod state;
pub mod stats;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// JSON extractor configuration turning malformed bodies into 400 responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Mount the `/api` routes.
///
/// Expects [`state::HttpState`] and [`json_config`] to be registered as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use blog_backend::inbound::http::{configure_api, json_config};
///
/// let app = App::new().app_data(json_config()).configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(users::create_user)
            .service(posts::create_post)
            .service(posts::list_posts)
            .service(posts::list_user_posts)
            .service(stats::total_bloggers)
            .service(stats::total_posts),
    );
}
