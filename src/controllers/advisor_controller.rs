// src/controllers/advisor_controller.rs

use actix_web::{get, web, HttpResponse};
use mongodb::bson::doc;

use super::{resolve_limit, ListQuery};
use crate::db;
use crate::errors::ApiError;
use crate::models::advisor::Advisor;
use crate::models::schema::Schema;
use crate::state::AppState;

const DEFAULT_ADVISOR_LIMIT: i64 = 12;

/// GET /advisors
/// Lists advisor profiles, each with a string `id`.
#[get("/advisors")]
pub async fn list_advisors(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let limit = resolve_limit(query.limit, DEFAULT_ADVISOR_LIMIT)?;
    let docs = db::get_documents(data.store()?, Advisor::COLLECTION, doc! {}, limit).await?;
    Ok(HttpResponse::Ok().json(docs))
}
