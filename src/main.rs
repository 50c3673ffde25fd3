use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;
use std::sync::Arc;

mod api;
mod config;
mod docs;
mod error;
mod model;
mod routes;
mod store;

use config::Config;
use store::firestore::FirestoreClient;
use store::sheets::SheetsClient;
use store::{AttendanceStatusStore, AttendanceStore, AuditLogStore, LeaveStore, NotificationStore};

use crate::docs::ApiDoc;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "StaffHub API"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    if config.spreadsheet_id.is_none() {
        warn!("ATTENDANCE_SPREADSHEET_ID is not set; Sheets-backed endpoints will answer 500");
    }

    let sheets = Arc::new(SheetsClient::new(
        &config.sheets_api_base,
        &config.google_api_key,
    ));
    let firestore = Arc::new(FirestoreClient::new(
        &config.firestore_api_base,
        &config.firebase_project_id,
        &config.google_api_key,
    ));

    let attendance_store: Arc<dyn AttendanceStore> = sheets.clone();
    let leave_store: Arc<dyn LeaveStore> = sheets;
    let status_store: Arc<dyn AttendanceStatusStore> = firestore.clone();
    let notification_store: Arc<dyn NotificationStore> = firestore.clone();
    let audit_store: Arc<dyn AuditLogStore> = firestore;

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(config.clone()))
            .app_data(Data::from(attendance_store.clone()))
            .app_data(Data::from(leave_store.clone()))
            .app_data(Data::from(status_store.clone()))
            .app_data(Data::from(notification_store.clone()))
            .app_data(Data::from(audit_store.clone()))
            .service(index)
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
