use actix_web::{web, HttpResponse};
use fa_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::PageQuery;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /foods/{id}
///
/// The same id always yields the same name.
///
/// ## Errors
/// - 400 Bad Request: id outside `0..=2300000`
pub async fn read_food(state: web::Data<AppState>, id: web::Path<i64>) -> HttpResponse {
    match state.foods.name_for(id.into_inner()) {
        Ok(food) => HttpResponse::Ok().json(food),
        Err(error) => handle_domain_error(DomainError::from(error)),
    }
}

/// Handler for GET /foods/?skip=0&limit=10
pub async fn read_foods(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    let page = state.foods.page(query.skip as u64, query.limit as u64);
    HttpResponse::Ok().json(page)
}
