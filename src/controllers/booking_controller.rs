// src/controllers/booking_controller.rs

use actix_web::{get, post, web, HttpResponse};
use mongodb::bson::doc;
use serde::Serialize;
use serde_json::Value;

use super::{resolve_limit, ListQuery};
use crate::db;
use crate::errors::ApiError;
use crate::models::booking::{Booking, STATUS_PENDING};
use crate::models::schema::Schema;
use crate::state::AppState;

const DEFAULT_BOOKING_LIMIT: i64 = 20;

/// Response structure for the booking-creation endpoint.
#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub id: String,
    pub status: String,
}

/// POST /bookings
/// Validates the payload, then stores it. Invalid payloads never reach the store.
#[post("/bookings")]
pub async fn create_booking(
    payload: web::Json<Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let booking = Booking::from_payload(&payload)?;
    let id = db::create_document(data.store()?, Booking::COLLECTION, &booking).await?;
    log::info!("booking {} created", id);

    Ok(HttpResponse::Ok().json(CreateBookingResponse {
        id,
        status: STATUS_PENDING.to_string(),
    }))
}

/// GET /bookings
#[get("/bookings")]
pub async fn list_bookings(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let limit = resolve_limit(query.limit, DEFAULT_BOOKING_LIMIT)?;
    let docs = db::get_documents(data.store()?, Booking::COLLECTION, doc! {}, limit).await?;
    Ok(HttpResponse::Ok().json(docs))
}
