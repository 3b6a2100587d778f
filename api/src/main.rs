use std::sync::Arc;

use actix_web::{http::header::HeaderName, middleware::Logger, web, HttpServer};
use log::{info, warn};

use fa_api::{create_app, middleware::cors::create_cors, AppState};
use fa_core::services::token::TokenService;
use fa_infra::{load_food_generator, GoogleOAuthClient};
use fa_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting Food Names API ({})", config.environment);

    let auth_header = HeaderName::try_from(config.auth.header.name.as_str()).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("AUTH_HEADER_NAME is not a valid header name: {}", e),
        )
    })?;

    let foods = load_food_generator(&config.catalog)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    // One secret for the life of the process, shared by issue and verify
    let tokens = Arc::new(TokenService::from_auth_config(&config.auth));

    let mut state = AppState::new(tokens, foods, auth_header.clone());
    match config.auth.google.clone() {
        Some(google) => {
            let client = GoogleOAuthClient::new(google)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
            state = state.with_identity_provider(Arc::new(client));
            info!("Google login enabled");
        }
        None => warn!("GOOGLE_CLIENT_ID/SECRET/REDIRECT_URI not set; Google login disabled"),
    }
    let state = web::Data::new(state);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || {
        create_app(state.clone())
            .wrap(create_cors(environment, &cors_config, &auth_header))
            .wrap(Logger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
