use actix_http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use domain_identity::exception::IdentityException;
use domain_ticket::exception::TicketException;
use serde::Serialize;
use tracing::error;

/// The one error body every route promises: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct WebError {
    status: StatusCode,
    message: String,
}

impl WebError {
    pub fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Token ausente ou inválido.".to_string(),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: "Acesso negado.".to_string(),
        }
    }

    pub fn too_many_requests(message: String) -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            message,
        }
    }

    /// Driver/source detail stays in the log, never in the body.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Erro interno do servidor.".to_string(),
        }
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody {
            error: self.message.clone(),
        })
    }
}

impl From<IdentityException> for WebError {
    fn from(e: IdentityException) -> Self {
        use IdentityException::*;
        let status = match &e {
            InvalidCredentials | SessionExpired => StatusCode::UNAUTHORIZED,
            Forbidden => StatusCode::FORBIDDEN,
            UserNotFound { .. } => StatusCode::NOT_FOUND,
            EmailTaken { .. } | Validation { .. } | InvalidShiftWindow => StatusCode::BAD_REQUEST,
            InternalError { source } => {
                error!("identity operation failed: {source:#}");
                return Self::internal();
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl From<TicketException> for WebError {
    fn from(e: TicketException) -> Self {
        use TicketException::*;
        let status = match &e {
            MissingStatus
            | InvalidStatus { .. }
            | DuplicatedServiceName { .. }
            | InvalidTransition { .. }
            | TechnicianUnavailable { .. }
            | Validation { .. } => StatusCode::BAD_REQUEST,
            TicketNotFound { .. } | ServiceNotFound { .. } => StatusCode::NOT_FOUND,
            Forbidden => StatusCode::FORBIDDEN,
            InternalError { source } => {
                error!("ticket operation failed: {source:#}");
                return Self::internal();
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

/// 200 + JSON body for every successful handler.
pub struct ApiResponder<T: Serialize>(pub T);

pub type ApiResult<T> = Result<ApiResponder<T>, WebError>;

impl<T: Serialize> Responder for ApiResponder<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn exceptions_map_to_the_documented_status_codes() {
        let cases = [
            (WebError::from(IdentityException::InvalidCredentials), StatusCode::UNAUTHORIZED),
            (WebError::from(IdentityException::Forbidden), StatusCode::FORBIDDEN),
            (WebError::from(TicketException::MissingStatus), StatusCode::BAD_REQUEST),
            (
                WebError::from(TicketException::InvalidStatus {
                    value: "FOO".to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                WebError::from(TicketException::TicketNotFound { id: Uuid::nil() }),
                StatusCode::NOT_FOUND,
            ),
            (
                WebError::from(TicketException::InternalError {
                    source: anyhow::anyhow!("pg down"),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn internal_errors_never_leak_the_source() {
        let err = WebError::from(TicketException::InternalError {
            source: anyhow::anyhow!("password=hunter2 connection refused"),
        });
        assert!(!err.to_string().contains("hunter2"));
    }

    #[test]
    fn validation_messages_carry_the_required_markers() {
        assert!(WebError::from(TicketException::MissingStatus).to_string().contains("status"));
        assert!(WebError::from(TicketException::InvalidStatus {
            value: "X".to_string()
        })
        .to_string()
        .contains("inválido"));
    }
}
