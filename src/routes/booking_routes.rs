// src/routes/booking_routes.rs

use actix_web::web;
use crate::controllers::booking_controller::{create_booking, list_bookings};

/// Registers the booking endpoints. Both share the `/bookings` path and are
/// told apart by method.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_booking).service(list_bookings);
}
