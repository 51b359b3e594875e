use std::sync::Arc;

use async_trait::async_trait;
use domain_ticket::command::{NewService, ServiceUpdate};
use domain_ticket::exception::{TicketException, TicketResult};
use domain_ticket::model::entity::Service;
use domain_ticket::repository::ServiceRepo;
use domain_ticket::service::CatalogService;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct CatalogServiceImpl {
    service_repo: Arc<dyn ServiceRepo>,
}

impl CatalogServiceImpl {
    async fn load(&self, id: Uuid) -> TicketResult<Service> {
        self.service_repo
            .find_by_id(id)
            .await?
            .ok_or(TicketException::ServiceNotFound { id })
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn create(&self, cmd: NewService) -> TicketResult<Service> {
        if cmd.name.trim().is_empty() {
            return Err(TicketException::Validation {
                field: "nome".to_string(),
            });
        }
        if self.service_repo.find_by_name(&cmd.name).await?.is_some() {
            return Err(TicketException::DuplicatedServiceName { name: cmd.name });
        }

        let service = Service {
            id: Uuid::new_v4(),
            name: cmd.name,
            description: cmd.description,
            active: true,
        };
        self.service_repo.insert(&service).await?;
        Ok(service)
    }

    async fn get(&self, id: Uuid) -> TicketResult<Service> {
        self.load(id).await
    }

    async fn list(&self, only_active: bool) -> TicketResult<Vec<Service>> {
        Ok(self.service_repo.get_all(only_active).await?)
    }

    async fn update(&self, id: Uuid, cmd: ServiceUpdate) -> TicketResult<Service> {
        let mut service = self.load(id).await?;
        if let Some(name) = cmd.name {
            if name.trim().is_empty() {
                return Err(TicketException::Validation {
                    field: "nome".to_string(),
                });
            }
            if let Some(other) = self.service_repo.find_by_name(&name).await? {
                if other.id != id {
                    return Err(TicketException::DuplicatedServiceName { name });
                }
            }
            service.name = name;
        }
        if let Some(description) = cmd.description {
            service.description = description;
        }
        if let Some(active) = cmd.active {
            service.active = active;
        }
        self.service_repo.update(&service).await?;
        Ok(service)
    }

    async fn deactivate(&self, id: Uuid) -> TicketResult<()> {
        let mut service = self.load(id).await?;
        service.active = false;
        self.service_repo.update(&service).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ticket::mock::MockServiceRepo;

    fn service(repo: MockServiceRepo) -> CatalogServiceImpl {
        CatalogServiceImpl::builder().service_repo(Arc::new(repo)).build()
    }

    #[tokio::test]
    async fn create_rejects_duplicated_names() {
        let mut repo = MockServiceRepo::new();
        repo.expect_find_by_name().returning(|name| {
            Ok(Some(Service {
                id: Uuid::new_v4(),
                name: name.to_string(),
                ..Default::default()
            }))
        });
        let err = service(repo)
            .create(NewService {
                name: "Manutenção de impressora".to_string(),
                description: String::new(),
            })
            .await;
        assert!(matches!(err, Err(TicketException::DuplicatedServiceName { .. })));
    }

    #[tokio::test]
    async fn create_rejects_blank_names() {
        let err = service(MockServiceRepo::new())
            .create(NewService {
                name: "   ".to_string(),
                description: String::new(),
            })
            .await;
        assert!(matches!(err, Err(TicketException::Validation { .. })));
    }

    #[tokio::test]
    async fn create_starts_active() {
        let mut repo = MockServiceRepo::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_insert().times(1).returning(|s| Ok(s.id));
        let created = service(repo)
            .create(NewService {
                name: "Troca de toner".to_string(),
                description: "Reposição de suprimentos.".to_string(),
            })
            .await
            .unwrap();
        assert!(created.active);
    }

    #[tokio::test]
    async fn deactivate_flips_the_flag() {
        let mut repo = MockServiceRepo::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Service {
                id,
                active: true,
                ..Default::default()
            }))
        });
        repo.expect_update()
            .times(1)
            .withf(|s| !s.active)
            .returning(|_| Ok(()));
        service(repo).deactivate(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn update_keeps_the_name_unique() {
        let id = Uuid::new_v4();
        let mut repo = MockServiceRepo::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Service {
                id,
                name: "Antigo".to_string(),
                active: true,
                ..Default::default()
            }))
        });
        repo.expect_find_by_name().returning(|name| {
            Ok(Some(Service {
                id: Uuid::new_v4(),
                name: name.to_string(),
                ..Default::default()
            }))
        });
        let err = service(repo)
            .update(
                id,
                ServiceUpdate {
                    name: Some("Tomado".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(err, Err(TicketException::DuplicatedServiceName { .. })));
    }
}
