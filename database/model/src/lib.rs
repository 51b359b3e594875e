pub mod chamado;
pub mod expediente;
pub mod ordem_de_servico;
pub mod servico;
pub mod usuario;

pub mod prelude {
    pub use super::{
        chamado::{
            ActiveModel as ChamadoActiveModel, Column as ChamadoColumn, Entity as ChamadoEntity,
            Model as ChamadoModel, PrimaryKey as ChamadoPrimaryKey, Relation as ChamadoRelation,
        },
        expediente::{
            ActiveModel as ExpedienteActiveModel, Column as ExpedienteColumn,
            Entity as ExpedienteEntity, Model as ExpedienteModel,
            PrimaryKey as ExpedientePrimaryKey, Relation as ExpedienteRelation,
        },
        ordem_de_servico::{
            ActiveModel as OrdemDeServicoActiveModel, Column as OrdemDeServicoColumn,
            Entity as OrdemDeServicoEntity, Model as OrdemDeServicoModel,
            PrimaryKey as OrdemDeServicoPrimaryKey, Relation as OrdemDeServicoRelation,
        },
        servico::{
            ActiveModel as ServicoActiveModel, Column as ServicoColumn, Entity as ServicoEntity,
            Model as ServicoModel, PrimaryKey as ServicoPrimaryKey, Relation as ServicoRelation,
        },
        usuario::{
            ActiveModel as UsuarioActiveModel, Column as UsuarioColumn, Entity as UsuarioEntity,
            Model as UsuarioModel, PrimaryKey as UsuarioPrimaryKey, Relation as UsuarioRelation,
        },
    };
}
