//! IgnitionLab Dynamics server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ignitionlab_lib::api;
use ignitionlab_lib::config::Config;
use ignitionlab_lib::db::{self, DbPool};
use ignitionlab_lib::middleware::RequestLogger;
use ignitionlab_lib::migration::Migrator;
use ignitionlab_lib::services::UploadStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - DATABASE_URL must point at a PostgreSQL instance");
            error!("  - In production, IGN_JWT_SECRET must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  IgnitionLab Dynamics Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    // Connect to the database and bring the schema up to date
    let connection = match db::connect(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    Migrator::up(&connection, None)
        .await
        .expect("Failed to run migrations");
    info!("Database migrations complete");

    let pool = DbPool::new(connection);

    // Seed the built-in admin account
    pool.ensure_default_admin()
        .await
        .expect("Failed to seed default admin");

    // Prepare upload storage
    let upload_store =
        UploadStore::new(config.upload_dir.clone()).expect("Failed to create upload directory");
    info!("Upload directory ready at {:?}", config.upload_dir);

    let bind_address = config.bind_address();
    let is_development = config.is_development();
    let cors_origins = config.cors_origins.clone();

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    let server = HttpServer::new(move || {
        // Configure CORS from the allow-list
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .max_age(3600);
        for origin in &cors_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            // CORS must wrap everything else
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(upload_store.clone()))
            .service(
                web::scope("/api")
                    .configure(api::health::configure_routes)
                    .configure(api::auth::configure_routes)
                    .configure(api::users::configure_routes)
                    .configure(api::customers::configure_routes)
                    .configure(api::vehicles::configure_routes)
                    .configure(api::jobs::configure_routes)
                    .configure(api::tune_revisions::configure_routes)
                    .configure(api::billing::configure_routes)
                    .configure(api::reminders::configure_routes)
                    .configure(api::appointments::configure_routes)
                    .configure(api::dashboard::configure_routes)
                    .configure(api::search::configure_routes)
                    .configure(api::uploads::configure_routes),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
