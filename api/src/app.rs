//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{http::header::HeaderName, web, App, HttpResponse};

use fa_core::services::{
    catalog::ItemCatalog, food::FoodNameGenerator, identity::IdentityProvider,
    token::TokenService,
};

use crate::dto::ErrorResponse;
use crate::middleware::auth::JwtAuth;
use crate::routes::{
    auth::{google, login, me},
    foods, items, root,
};

/// Services shared by every worker
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub foods: FoodNameGenerator,
    pub catalog: ItemCatalog,
    /// External login provider, absent when not configured
    pub identity: Option<Arc<dyn IdentityProvider>>,
    /// Header carrying the credential on protected requests
    pub auth_header: HeaderName,
}

impl AppState {
    pub fn new(
        tokens: Arc<TokenService>,
        foods: FoodNameGenerator,
        auth_header: HeaderName,
    ) -> Self {
        Self {
            tokens,
            foods,
            catalog: ItemCatalog::new(),
            identity: None,
            auth_header,
        }
    }

    pub fn with_identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(provider);
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let auth = JwtAuth::new(
        Arc::clone(&app_state.tokens),
        app_state.auth_header.clone(),
    );

    App::new()
        .app_data(app_state)
        .route("/", web::get().to(root::read_root))
        .route("/health", web::get().to(root::health_check))
        // Authentication
        .route("/login", web::post().to(login::login))
        .route("/me", web::get().to(me::me).wrap(auth.clone()))
        .service(
            web::scope("/auth/google")
                .route("/login", web::get().to(google::google_login))
                .route("/callback", web::get().to(google::google_callback)),
        )
        // Food names
        .service(web::resource(["/foods", "/foods/"]).route(web::get().to(foods::read_foods)))
        .route("/foods/{id}", web::get().to(foods::read_food))
        // Item catalog; mutations require a credential
        .service(
            web::resource(["/items", "/items/"])
                .route(web::get().to(items::read_items))
                .route(web::post().to(items::create_item).wrap(auth.clone())),
        )
        .service(
            web::resource("/items/{id}")
                .route(web::get().to(items::read_item))
                .route(web::put().to(items::update_item).wrap(auth)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found"))
}
