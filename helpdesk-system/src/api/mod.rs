use std::future::{ready, Ready};
use std::str::FromStr;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use domain_identity::model::entity::Role;
use domain_identity::model::vo::CurrentUser;
use uuid::Uuid;

pub mod admin;
pub mod auth;
pub mod chamado;
pub mod dtos;
pub mod error;
pub mod fila_de_chamados;
pub mod servico;
pub mod tecnico;
pub mod usuario;

use error::WebError;

fn extract_uuid(s: &str) -> Result<Uuid, WebError> {
    Uuid::from_str(s).map_err(|_| WebError::bad_request(format!("Identificador inválido: {s}.")))
}

/// The authenticated caller, as inserted by the JWT middleware.
pub struct Caller(pub CurrentUser);

impl Caller {
    /// Per-handler role check, for routes whose methods share a path but not
    /// a role set.
    pub fn require(&self, allowed: &[Role]) -> Result<(), WebError> {
        if allowed.contains(&self.0.role) {
            Ok(())
        } else {
            Err(WebError::forbidden())
        }
    }
}

impl FromRequest for Caller {
    type Error = WebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .map(Caller)
                .ok_or_else(WebError::unauthorized),
        )
    }
}
