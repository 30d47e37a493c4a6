use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;

mod api;
mod config;
mod docs;
mod errors;
mod ingest;
mod model;
mod routes;
mod state;
mod store;

use config::Config;
use model::mode::Mode;
use state::AppState;
use store::event_log::EventLog;
use store::identity::EmployeeDirectory;

use crate::docs::ApiDoc;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

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
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    // Both loads degrade rather than fail: a missing employees file means
    // every scan resolves to unknown, a missing day log means today starts
    // empty.
    let directory = EmployeeDirectory::load(Path::new(&config.employees_file));
    let log = EventLog::load_most_recent(PathBuf::from(&config.logs_dir));
    let state = Data::new(AppState::new(Mode::default(), log, directory));

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    info!("App listening on {}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
