use actix_web::web;

use crate::api::dtos::{StatusQuery, TicketResponse};
use crate::api::error::{ApiResponder, ApiResult};
use crate::api::Caller;
use crate::infrastructure::ServiceProvider;

pub async fn own(sp: web::Data<ServiceProvider>, caller: Caller) -> ApiResult<Vec<TicketResponse>> {
    let tickets = sp.queue_service().own_tickets(&caller.0).await?;
    Ok(ApiResponder(tickets.into_iter().map(TicketResponse::from).collect()))
}

pub async fn assigned(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
) -> ApiResult<Vec<TicketResponse>> {
    let tickets = sp.queue_service().assigned_tickets(&caller.0).await?;
    Ok(ApiResponder(tickets.into_iter().map(TicketResponse::from).collect()))
}

pub async fn all_by_status(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    query: web::Query<StatusQuery>,
) -> ApiResult<Vec<TicketResponse>> {
    let tickets = sp.queue_service().all_by_status(&caller.0, query.status.as_deref()).await?;
    Ok(ApiResponder(tickets.into_iter().map(TicketResponse::from).collect()))
}

pub async fn open_queue(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
) -> ApiResult<Vec<TicketResponse>> {
    let tickets = sp.queue_service().open_queue(&caller.0).await?;
    Ok(ApiResponder(tickets.into_iter().map(TicketResponse::from).collect()))
}
