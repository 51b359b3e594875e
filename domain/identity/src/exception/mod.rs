use thiserror::Error;
use uuid::Uuid;

pub type IdentityResult<T> = Result<T, IdentityException>;

#[derive(Error, Debug)]
pub enum IdentityException {
    /// Unknown e-mail, wrong password and deactivated account all collapse
    /// into this variant so the response leaks nothing.
    #[error("Credenciais inválidas.")]
    InvalidCredentials,

    #[error("Sessão inválida ou expirada, faça login novamente.")]
    SessionExpired,

    #[error("Acesso negado.")]
    Forbidden,

    #[error("Usuário não encontrado: {id}.")]
    UserNotFound { id: Uuid },

    #[error("E-mail já cadastrado: {email}.")]
    EmailTaken { email: String },

    #[error("Campo obrigatório ausente ou inválido: {field}.")]
    Validation { field: String },

    #[error("Expediente inválido: o início deve ser anterior ao fim.")]
    InvalidShiftWindow,

    #[error("Identity internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for IdentityException {
    fn from(e: anyhow::Error) -> Self {
        IdentityException::InternalError { source: e }
    }
}
