use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use anyhow::Context;
use domain_identity::model::entity::Role;
use domain_identity::model::vo::{CurrentUser, TokenKind};
use futures::future::LocalBoxFuture;
use service_identity::TokenSettings;
use tracing::debug;

use crate::api::error::WebError;

/// Resolves `Authorization: Bearer <token>` into a [`CurrentUser`] request
/// extension. Anything less than a valid access token is a 401.
pub struct JwtValidation {
    settings: Arc<TokenSettings>,
}

impl JwtValidation {
    pub fn new(settings: Arc<TokenSettings>) -> Self {
        Self { settings }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtValidation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtValidationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtValidationMiddleware {
            service: Rc::new(service),
            settings: self.settings.clone(),
        }))
    }
}

pub struct JwtValidationMiddleware<S> {
    service: Rc<S>,
    settings: Arc<TokenSettings>,
}

impl<S, B> Service<ServiceRequest> for JwtValidationMiddleware<S>
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
        let settings = self.settings.clone();
        Box::pin(async move {
            match resolve_current_user(&req, &settings) {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    service.call(req).await
                }
                Err(e) => {
                    debug!("rejected bearer token: {e}");
                    Err(WebError::unauthorized().into())
                }
            }
        })
    }
}

fn resolve_current_user(
    req: &ServiceRequest,
    settings: &TokenSettings,
) -> anyhow::Result<CurrentUser> {
    let header = req.headers().get("Authorization").context("no authorization header")?;
    let parts = header.to_str()?.split_whitespace().collect::<Vec<&str>>();
    if parts.len() < 2 || !parts[0].eq_ignore_ascii_case("Bearer") {
        anyhow::bail!("not a bearer token");
    }
    let claims = settings.decode(parts[1])?;
    if claims.kind != TokenKind::Access {
        anyhow::bail!("refresh token used as access token");
    }
    Ok(CurrentUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}

/// Lets a request through only when the caller's role is in the allowed set.
/// Everyone else receives the same generic 403 body, with no hint of which
/// role would have passed.
pub struct RequireRoles {
    allowed: &'static [Role],
}

impl RequireRoles {
    pub fn new(allowed: &'static [Role]) -> Self {
        Self { allowed }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRoles
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRolesMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRolesMiddleware {
            service: Rc::new(service),
            allowed: self.allowed,
        }))
    }
}

pub struct RequireRolesMiddleware<S> {
    service: Rc<S>,
    allowed: &'static [Role],
}

impl<S, B> Service<ServiceRequest> for RequireRolesMiddleware<S>
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
        let allowed = self.allowed;
        Box::pin(async move {
            let role = req.extensions().get::<CurrentUser>().map(|user| user.role);
            match role {
                None => Err(WebError::unauthorized().into()),
                Some(role) if !allowed.contains(&role) => Err(WebError::forbidden().into()),
                Some(_) => service.call(req).await,
            }
        })
    }
}
