// src/controllers/status_controller.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::models::schema_catalog;
use crate::state::AppState;

/// How many collection names the diagnostic report lists.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// GET /
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Spiritual Advice Booking API is running" }))
}

/// Diagnostic report returned by `/test`.
#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncated(message: &str) -> String {
    message.chars().take(50).collect()
}

fn set_or_not(present: bool) -> String {
    let label = if present { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

/// GET /test
/// Reports store connectivity and database configuration. Always answers
/// 200; failures show up as degraded fields.
#[get("/test")]
pub async fn test_database(data: web::Data<AppState>) -> impl Responder {
    let mut report = DatabaseReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_or_not(data.config.database_url_set()),
        database_name: set_or_not(data.config.database_name_set()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match data.store.as_deref() {
        Some(store) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();
            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_REPORTED_COLLECTIONS);
                    report.collections = names;
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    log::warn!("database check failed for '{}': {}", store.name(), e);
                    report.database =
                        format!("⚠️  Connected but Error: {}", truncated(&e.to_string()));
                }
            }
        }
        None => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
    }

    HttpResponse::Ok().json(report)
}

/// GET /schema
/// Field tables for every record type, for generic database viewers.
#[get("/schema")]
pub async fn schema() -> impl Responder {
    HttpResponse::Ok().json(schema_catalog())
}
