use actix_web::web;
use actix_web::web::Path;

use crate::api::dtos::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::error::{ApiResponder, ApiResult};
use crate::api::extract_uuid;
use crate::infrastructure::ServiceProvider;

pub async fn create(
    sp: web::Data<ServiceProvider>,
    body: web::Json<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    let user = sp.user_service().create(body.0.into()).await?;
    Ok(ApiResponder(user.into()))
}

pub async fn list(sp: web::Data<ServiceProvider>) -> ApiResult<Vec<UserResponse>> {
    let users = sp.user_service().list().await?;
    Ok(ApiResponder(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get(sp: web::Data<ServiceProvider>, id: Path<String>) -> ApiResult<UserResponse> {
    let id = extract_uuid(&id)?;
    let user = sp.user_service().get(id).await?;
    Ok(ApiResponder(user.into()))
}

pub async fn update(
    sp: web::Data<ServiceProvider>,
    id: Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    let id = extract_uuid(&id)?;
    let user = sp.user_service().update(id, body.0.into()).await?;
    Ok(ApiResponder(user.into()))
}

pub async fn deactivate(sp: web::Data<ServiceProvider>, id: Path<String>) -> ApiResult<()> {
    let id = extract_uuid(&id)?;
    sp.user_service().deactivate(id).await?;
    Ok(ApiResponder(()))
}
