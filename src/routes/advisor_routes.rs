// src/routes/advisor_routes.rs

use actix_web::web;
use crate::controllers::advisor_controller::list_advisors;

/// Registers the advisor endpoints, e.g. `/api/advisors`.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_advisors);
}
