use actix_web::web;
use actix_web::web::Path;

use crate::api::dtos::{
    RegisterTechnicianRequest, ShiftRequest, ShiftResponse, TechnicianResponse, UserResponse,
};
use crate::api::error::{ApiResponder, ApiResult};
use crate::api::extract_uuid;
use crate::infrastructure::ServiceProvider;

pub async fn register(
    sp: web::Data<ServiceProvider>,
    body: web::Json<RegisterTechnicianRequest>,
) -> ApiResult<UserResponse> {
    let technician = sp.technician_service().register(body.0.into()).await?;
    Ok(ApiResponder(technician.into()))
}

pub async fn list(sp: web::Data<ServiceProvider>) -> ApiResult<Vec<TechnicianResponse>> {
    let technicians = sp.technician_service().list().await?;
    Ok(ApiResponder(technicians.into_iter().map(TechnicianResponse::from).collect()))
}

pub async fn set_shift(
    sp: web::Data<ServiceProvider>,
    id: Path<String>,
    body: web::Json<ShiftRequest>,
) -> ApiResult<ShiftResponse> {
    let id = extract_uuid(&id)?;
    let shift = sp.technician_service().set_shift(id, body.0.into()).await?;
    Ok(ApiResponder(shift.into()))
}
