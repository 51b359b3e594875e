//! `helpdesk-system cleanup` — wipes every entity set for dev resets. Each
//! entity is handled on its own so a single failing table does not abort
//! the rest of the pass.

use database_model::prelude::*;
use sea_orm::EntityTrait;
use tracing::{error, info};

use crate::infrastructure::ServiceProvider;

pub async fn run(sp: &ServiceProvider) {
    info!("cleanup: wiping helpdesk data");
    let database = sp.database();
    let conn = database.get_connection();

    // children before parents
    if let Err(e) = OrdemDeServicoEntity::delete_many().exec(conn).await {
        error!("cleanup: ordem_de_servico failed: {e}");
    }
    if let Err(e) = ChamadoEntity::delete_many().exec(conn).await {
        error!("cleanup: chamado failed: {e}");
    }
    if let Err(e) = ExpedienteEntity::delete_many().exec(conn).await {
        error!("cleanup: expediente failed: {e}");
    }
    if let Err(e) = ServicoEntity::delete_many().exec(conn).await {
        error!("cleanup: servico failed: {e}");
    }
    if let Err(e) = UsuarioEntity::delete_many().exec(conn).await {
        error!("cleanup: usuario failed: {e}");
    }
    match sp.history_repo().purge().await {
        Ok(count) => info!("cleanup: {count} history entries removed"),
        Err(e) => error!("cleanup: ticket history failed: {e}"),
    }
    info!("cleanup finished");
}
