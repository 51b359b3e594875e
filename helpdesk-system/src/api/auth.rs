use actix_web::{web, HttpRequest};
use domain_identity::exception::IdentityException;
use domain_identity::model::vo::TokenPair;

use crate::api::dtos::{LoginRequest, RefreshRequest};
use crate::api::error::{ApiResponder, ApiResult};
use crate::infrastructure::ServiceProvider;

fn client_ip(req: &HttpRequest) -> String {
    req.connection_info().realip_remote_addr().unwrap_or("unknown").to_string()
}

pub async fn login(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> ApiResult<TokenPair> {
    let ip = client_ip(&req);
    let body = body.0;
    // Only failed attempts consume the login budget.
    sp.login_guard().check(&ip, &body.email).await?;
    match sp.auth_service().authenticate(&body.email, &body.senha, &ip).await {
        Ok(pair) => Ok(ApiResponder(pair)),
        Err(e) => {
            if matches!(e, IdentityException::InvalidCredentials) {
                sp.login_guard().record_failure(&ip, &body.email).await;
            }
            Err(e.into())
        }
    }
}

pub async fn refresh(
    sp: web::Data<ServiceProvider>,
    body: web::Json<RefreshRequest>,
) -> ApiResult<TokenPair> {
    let pair = sp.auth_service().refresh(&body.refresh_token).await?;
    Ok(ApiResponder(pair))
}
