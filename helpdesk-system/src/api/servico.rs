use actix_web::web;
use actix_web::web::Path;
use domain_identity::model::entity::Role;

use crate::api::dtos::{ActiveQuery, CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::api::error::{ApiResponder, ApiResult};
use crate::api::{extract_uuid, Caller};
use crate::infrastructure::ServiceProvider;

// Reads are open to any authenticated caller; mutations are admin-only and
// checked here because they share paths with the reads.

pub async fn list(
    sp: web::Data<ServiceProvider>,
    _caller: Caller,
    query: web::Query<ActiveQuery>,
) -> ApiResult<Vec<ServiceResponse>> {
    let services = sp.catalog_service().list(query.ativos.unwrap_or(false)).await?;
    Ok(ApiResponder(services.into_iter().map(ServiceResponse::from).collect()))
}

pub async fn get(
    sp: web::Data<ServiceProvider>,
    _caller: Caller,
    id: Path<String>,
) -> ApiResult<ServiceResponse> {
    let id = extract_uuid(&id)?;
    let service = sp.catalog_service().get(id).await?;
    Ok(ApiResponder(service.into()))
}

pub async fn create(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    body: web::Json<CreateServiceRequest>,
) -> ApiResult<ServiceResponse> {
    caller.require(&[Role::Admin])?;
    let service = sp.catalog_service().create(body.0.into()).await?;
    Ok(ApiResponder(service.into()))
}

pub async fn update(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
    body: web::Json<UpdateServiceRequest>,
) -> ApiResult<ServiceResponse> {
    caller.require(&[Role::Admin])?;
    let id = extract_uuid(&id)?;
    let service = sp.catalog_service().update(id, body.0.into()).await?;
    Ok(ApiResponder(service.into()))
}

pub async fn deactivate(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
) -> ApiResult<()> {
    caller.require(&[Role::Admin])?;
    let id = extract_uuid(&id)?;
    sp.catalog_service().deactivate(id).await?;
    Ok(ApiResponder(()))
}
