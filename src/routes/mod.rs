// Route exports
pub mod errors;
pub mod matches;
pub mod records;

use actix_web::web;

pub use errors::{json_config, JsonError};
pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(records::configure),
    );
}
