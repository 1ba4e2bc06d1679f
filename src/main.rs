use std::sync::Arc;

use tracing::info;

use letterbox::db::Database;
use letterbox::mail::ResendMailer;
use letterbox::web::handlers::AppState;
use letterbox::web::WebServer;
use letterbox::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = letterbox::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        letterbox::logging::init_console_only(&config.logging.level);
    }

    info!("Letterbox - delayed letter delivery service");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let mut app_state =
        AppState::new(db).with_dispatch_batch_size(config.dispatch.batch_size);

    if config.mail.is_configured() {
        match ResendMailer::new(&config.mail.api_key) {
            Ok(mailer) => {
                app_state = app_state.with_mailer(Arc::new(mailer), &config.mail.from_email);
                info!("Mail transport configured (from: {})", config.mail.from_email);
            }
            Err(e) => {
                tracing::error!("Failed to build mail transport: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        tracing::warn!(
            "Mail transport not configured; the dispatch endpoint will answer 500 until \
             LETTERBOX_RESEND_API_KEY and LETTERBOX_FROM_EMAIL are set"
        );
    }

    let server = WebServer::new(&config.server, Arc::new(app_state));
    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
