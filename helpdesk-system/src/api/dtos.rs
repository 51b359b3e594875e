use chrono::{DateTime, NaiveTime, Utc};
use domain_identity::command::{NewTechnician, NewUser, ShiftWindow, UserUpdate};
use domain_identity::model::entity::{Role, Shift, User};
use domain_identity::model::vo::TechnicianInfo;
use domain_ticket::command::{NewService, OpenTicket, ServiceUpdate};
use domain_ticket::model::entity::{Service, Ticket, TicketHistoryEntry, TicketStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub setor: String,
    #[serde(default)]
    pub role: Role,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.nome,
            email: req.email,
            password: req.senha,
            sector: req.setor,
            role: req.role,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub nome: Option<String>,
    pub setor: Option<String>,
    pub senha: Option<String>,
    pub role: Option<Role>,
    pub ativo: Option<bool>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.nome,
            sector: req.setor,
            password: req.senha,
            role: req.role,
            active: req.ativo,
        }
    }
}

/// Account view; the password digest never leaves the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub role: Role,
    pub setor: String,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
            role: user.role,
            setor: user.sector,
            ativo: user.active,
            criado_em: user.created_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenTicketRequest {
    pub descricao: String,
    pub servicos: Vec<Uuid>,
}

impl From<OpenTicketRequest> for OpenTicket {
    fn from(req: OpenTicketRequest) -> Self {
        Self {
            description: req.descricao,
            service_ids: req.servicos,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketRequest {
    /// Admins may hand a ticket to any technician; technicians take it
    /// themselves when this is absent.
    pub tecnico_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTicketRequest {
    pub descricao_fechamento: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: Uuid,
    pub numero_ordem: String,
    pub descricao: String,
    pub status: TicketStatus,
    pub solicitante_id: Uuid,
    pub tecnico_id: Option<Uuid>,
    pub descricao_fechamento: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub fechado_em: Option<DateTime<Utc>>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            numero_ordem: ticket.order_number,
            descricao: ticket.description,
            status: ticket.status,
            solicitante_id: ticket.requester_id,
            tecnico_id: ticket.technician_id,
            descricao_fechamento: ticket.closure_description,
            criado_em: ticket.created_time,
            atualizado_em: ticket.last_modified_time,
            fechado_em: ticket.closed_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponse {
    pub de: Option<TicketStatus>,
    pub para: TicketStatus,
    pub descricao: String,
    pub autor_id: Uuid,
    pub autor_nome: String,
    pub criado_em: DateTime<Utc>,
}

impl From<TicketHistoryEntry> for HistoryEntryResponse {
    fn from(entry: TicketHistoryEntry) -> Self {
        Self {
            de: entry.from_status,
            para: entry.to_status,
            descricao: entry.description,
            autor_id: entry.author_id,
            autor_nome: entry.author_name,
            criado_em: entry.created_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
}

impl From<CreateServiceRequest> for NewService {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            name: req.nome,
            description: req.descricao,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateServiceRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub ativo: Option<bool>,
}

impl From<UpdateServiceRequest> for ServiceUpdate {
    fn from(req: UpdateServiceRequest) -> Self {
        Self {
            name: req.nome,
            description: req.descricao,
            active: req.ativo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub ativo: bool,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            nome: service.name,
            descricao: service.description,
            ativo: service.active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterTechnicianRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub setor: String,
}

impl From<RegisterTechnicianRequest> for NewTechnician {
    fn from(req: RegisterTechnicianRequest) -> Self {
        Self {
            name: req.nome,
            email: req.email,
            password: req.senha,
            sector: req.setor,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShiftRequest {
    pub inicio: NaiveTime,
    pub fim: NaiveTime,
}

impl From<ShiftRequest> for ShiftWindow {
    fn from(req: ShiftRequest) -> Self {
        Self {
            start_time: req.inicio,
            end_time: req.fim,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResponse {
    pub id: Uuid,
    pub tecnico_id: Uuid,
    pub inicio: NaiveTime,
    pub fim: NaiveTime,
}

impl From<Shift> for ShiftResponse {
    fn from(shift: Shift) -> Self {
        Self {
            id: shift.id,
            tecnico_id: shift.technician_id,
            inicio: shift.start_time,
            fim: shift.end_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TechnicianResponse {
    pub usuario: UserResponse,
    pub expediente: Option<ShiftResponse>,
}

impl From<TechnicianInfo> for TechnicianResponse {
    fn from(info: TechnicianInfo) -> Self {
        Self {
            usuario: info.user.into(),
            expediente: info.shift.map(ShiftResponse::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActiveQuery {
    pub ativos: Option<bool>,
}
