//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin. Production only allows the origins listed
//! in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use fa_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance configured for the given environment.
///
/// `credential_header` is the header carrying the credential, which may be
/// something other than `Authorization`.
pub fn create_cors(
    environment: Environment,
    config: &CorsConfig,
    credential_header: &header::HeaderName,
) -> Cors {
    let allowed_headers = vec![
        header::AUTHORIZATION,
        header::ACCEPT,
        header::CONTENT_TYPE,
        credential_header.clone(),
    ];
    let methods = vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS];

    if !environment.is_production() {
        log::info!("Configuring CORS for {} environment", environment);
        return Cors::default()
            .allow_any_origin()
            .allowed_methods(methods)
            .allowed_headers(allowed_headers)
            .max_age(config.max_age);
    }

    log::info!("Configuring CORS for production environment");
    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(allowed_headers)
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
