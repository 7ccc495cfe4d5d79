/// HTTP middleware utilities for blog-service
///
/// Provides bearer-token authentication, which resolves every request to an
/// explicit caller identity, and request timing.
pub mod permissions;

pub use permissions::*;

use crate::auth::JwtKeys;
use crate::error::AppError;
use crate::metrics::HTTP_REQUEST_DURATION_SECONDS;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::Instant;
use uuid::Uuid;

// =====================================================================
// JWT Authentication
// =====================================================================

/// Authenticated caller, stored in request extensions by `JwtAuthMiddleware`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub Uuid);

/// Actix middleware that validates a Bearer token against the `JwtKeys`
/// registered as app data.
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // Rejections are rendered here so they carry the JSON error body.
            let caller = match authenticate(&req) {
                Ok(caller) => caller,
                Err(err) => return Ok(req.error_response(err).map_into_right_body()),
            };
            req.extensions_mut().insert(caller);

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<CallerId, AppError> {
    let keys = req
        .app_data::<web::Data<JwtKeys>>()
        .ok_or_else(|| AppError::Internal("JWT keys not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthenticated("Authentication credentials were not provided.".to_string())
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthenticated("Invalid Authorization scheme".to_string()))?;

    let token_data = keys.validate_token(token).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AppError::Unauthenticated("Invalid or expired token".to_string())
    })?;

    let user_id = Uuid::parse_str(&token_data.claims.sub).map_err(|_| {
        tracing::warn!("token subject is not a UUID");
        AppError::Unauthenticated("Invalid token: malformed user id".to_string())
    })?;

    Ok(CallerId(user_id))
}

impl FromRequest for CallerId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CallerId>()
                .copied()
                .ok_or_else(|| {
                    AppError::Unauthenticated("User not authenticated".to_string()).into()
                }),
        )
    }
}

// =====================================================================
// Metrics middleware
// =====================================================================

pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let path = req.path().to_string();
        let method = req.method().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let res = service.call(req).await;
            let elapsed = start.elapsed();
            let status = match &res {
                Ok(resp) => resp.status().as_u16(),
                Err(err) => err.as_response_error().status_code().as_u16(),
            };

            HTTP_REQUEST_DURATION_SECONDS
                .with_label_values(&[method.as_str(), &status.to_string()])
                .observe(elapsed.as_secs_f64());
            tracing::debug!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "request completed");
            res
        })
    }
}
