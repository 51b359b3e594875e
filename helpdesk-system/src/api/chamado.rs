use actix_web::web;
use actix_web::web::Path;
use domain_identity::model::entity::Role;

use crate::api::dtos::{
    AssignTicketRequest, CloseTicketRequest, HistoryEntryResponse, OpenTicketRequest,
    TicketResponse,
};
use crate::api::error::{ApiResponder, ApiResult, WebError};
use crate::api::{extract_uuid, Caller};
use crate::infrastructure::ServiceProvider;

pub async fn open(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    body: web::Json<OpenTicketRequest>,
) -> ApiResult<TicketResponse> {
    let ticket = sp.ticket_service().open(&caller.0, body.0.into()).await?;
    Ok(ApiResponder(ticket.into()))
}

pub async fn get(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
) -> ApiResult<TicketResponse> {
    let id = extract_uuid(&id)?;
    let ticket = sp.ticket_service().get(id).await?;
    // Requesters see their own tickets; staff see them all.
    if caller.0.role == Role::User && ticket.requester_id != caller.0.id {
        return Err(WebError::forbidden());
    }
    Ok(ApiResponder(ticket.into()))
}

pub async fn history(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
) -> ApiResult<Vec<HistoryEntryResponse>> {
    let id = extract_uuid(&id)?;
    let ticket = sp.ticket_service().get(id).await?;
    if caller.0.role == Role::User && ticket.requester_id != caller.0.id {
        return Err(WebError::forbidden());
    }
    let entries = sp.ticket_service().history(id).await?;
    Ok(ApiResponder(entries.into_iter().map(HistoryEntryResponse::from).collect()))
}

pub async fn assign(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
    body: Option<web::Json<AssignTicketRequest>>,
) -> ApiResult<TicketResponse> {
    let id = extract_uuid(&id)?;
    let technician_id = body.and_then(|b| b.0.tecnico_id).unwrap_or(caller.0.id);
    let ticket = sp.ticket_service().assign(id, technician_id, &caller.0).await?;
    Ok(ApiResponder(ticket.into()))
}

pub async fn close(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
    body: web::Json<CloseTicketRequest>,
) -> ApiResult<TicketResponse> {
    let id = extract_uuid(&id)?;
    let ticket =
        sp.ticket_service().close(id, body.0.descricao_fechamento, &caller.0).await?;
    Ok(ApiResponder(ticket.into()))
}

pub async fn reopen(
    sp: web::Data<ServiceProvider>,
    caller: Caller,
    id: Path<String>,
) -> ApiResult<TicketResponse> {
    let id = extract_uuid(&id)?;
    let ticket = sp.ticket_service().reopen(id, &caller.0).await?;
    Ok(ApiResponder(ticket.into()))
}
