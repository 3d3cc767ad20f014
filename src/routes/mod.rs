use actix_cors::Cors;
use actix_web::web;

use crate::controllers::status_controller::{index, schema, test_database};
use crate::errors::{json_error_handler, query_error_handler};

mod advisor_routes; // Module for advisor endpoints
mod booking_routes; // Module for booking endpoints

/// Permissive CORS for the demo front end: any origin, method and header,
/// with credentials. The request origin is echoed back.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(index)
        .service(test_database)
        .service(schema)
        .service(
            web::scope("/api")
                .configure(advisor_routes::init) // Register advisor routes
                .configure(booking_routes::init), // Register booking routes
        );
}
