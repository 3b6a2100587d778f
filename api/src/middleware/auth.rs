//! Credential middleware for protecting API endpoints.
//!
//! The middleware reads the configured credential header, hands it to the
//! core `TokenService` for verification and injects the verified identity
//! into the request. Rejections short-circuit with a 401 and an
//! `{"error": ...}` body naming the failed check.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderName,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use fa_core::{errors::TokenError, services::token::TokenService};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::unauthorized;

/// Verified identity injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Username carried by the presented credential
    pub username: String,
}

/// Credential middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    tokens: Arc<TokenService>,
    header_name: HeaderName,
}

impl JwtAuth {
    /// Creates the middleware reading the credential from `header_name`
    pub fn new(tokens: Arc<TokenService>, header_name: HeaderName) -> Self {
        Self {
            tokens,
            header_name,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
            header_name: self.header_name.clone(),
        }))
    }
}

/// Credential middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
    header_name: HeaderName,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verified = self
            .tokens
            .verify(header_value(&req, &self.header_name).as_deref());

        Box::pin(async move {
            match verified {
                Ok(username) => {
                    req.extensions_mut().insert(AuthContext { username });
                    service.call(req).await
                }
                Err(rejection) => {
                    log::debug!("{} {} rejected: {:?}", req.method(), req.path(), rejection);
                    Err(unauthorized(rejection))
                }
            }
        })
    }
}

/// Reads the credential header; non-UTF-8 bytes are replaced so that the
/// value fails verification instead of looking absent
fn header_value(req: &ServiceRequest, name: &HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(TokenError::MissingCredential));

        ready(result)
    }
}
