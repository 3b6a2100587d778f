use actix_web::{web, HttpResponse};
use fa_core::domain::entities::item::Item;
use fa_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::PageQuery;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /items/{id}
pub async fn read_item(state: web::Data<AppState>, id: web::Path<usize>) -> HttpResponse {
    match state.catalog.get(id.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(error) => handle_domain_error(DomainError::from(error)),
    }
}

/// Handler for GET /items/?skip=0&limit=10
pub async fn read_items(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.list(query.skip, query.limit).await)
}

/// Handler for POST /items/
///
/// Requires a valid credential. Returns the stored record, including
/// `price_with_tax` when a non-zero tax was given.
pub async fn create_item(
    state: web::Data<AppState>,
    auth: AuthContext,
    item: web::Json<Item>,
) -> HttpResponse {
    let record = state.catalog.create(item.into_inner()).await;
    log::info!("Item '{}' created by {}", record.name, auth.username);
    HttpResponse::Ok().json(record)
}

/// Handler for PUT /items/{id}
///
/// Requires a valid credential.
///
/// ## Errors
/// - 404 Not Found: no item with that id
pub async fn update_item(
    state: web::Data<AppState>,
    auth: AuthContext,
    id: web::Path<usize>,
    item: web::Json<Item>,
) -> HttpResponse {
    let id = id.into_inner();
    match state.catalog.update(id, item.into_inner()).await {
        Ok(record) => {
            log::info!("Item {} updated by {}", id, auth.username);
            HttpResponse::Ok().json(record)
        }
        Err(error) => handle_domain_error(DomainError::from(error)),
    }
}
