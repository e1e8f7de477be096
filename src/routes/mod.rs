// Route exports
pub mod matches;

use actix_web::web;

use crate::error::handle_json_payload_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(matches::configure);
}

/// JSON extractor settings for all routes
///
/// Browsers posting with `fetch` default to `text/plain`, so the body is
/// parsed regardless of Content-Type.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(handle_json_payload_error)
}
