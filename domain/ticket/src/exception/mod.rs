use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::TicketStatus;

pub type TicketResult<T> = Result<T, TicketException>;

#[derive(Error, Debug)]
pub enum TicketException {
    /// The admin queue listing requires an explicit status filter.
    #[error("O parâmetro status é obrigatório.")]
    MissingStatus,

    #[error("Status inválido: {value}.")]
    InvalidStatus { value: String },

    #[error("Chamado não encontrado: {id}.")]
    TicketNotFound { id: Uuid },

    #[error("Serviço não encontrado: {id}.")]
    ServiceNotFound { id: Uuid },

    #[error("Serviço já cadastrado: {name}.")]
    DuplicatedServiceName { name: String },

    #[error("Transição de status inválida: {from} -> {to}.")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },

    #[error("Técnico inválido ou inativo: {id}.")]
    TechnicianUnavailable { id: Uuid },

    #[error("Acesso negado.")]
    Forbidden,

    #[error("Campo obrigatório ausente ou inválido: {field}.")]
    Validation { field: String },

    #[error("Ticket internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for TicketException {
    fn from(e: anyhow::Error) -> Self {
        TicketException::InternalError { source: e }
    }
}
