use std::sync::Arc;

use domain_identity::service::{AuthService, TechnicianService, UserService};
use domain_ticket::service::{
    CatalogService, DashboardService, TicketLifecycleService, TicketQueueService,
};
use service_identity::{AuthServiceImpl, TechnicianServiceImpl, TokenSettings, UserServiceImpl};
use service_ticket::{
    CatalogServiceImpl, DashboardServiceImpl, TicketLifecycleServiceImpl, TicketQueueServiceImpl,
};
use tracing::{error, info};

use super::config::HelpMeConfig;
use super::database::{Database, DocumentStore, OrmRepo, RedisClient, RedisRepo};
use super::middleware::rate_limit::{CounterStore, LoginAttemptGuard, RedisCounterStore};
use super::repository::MongoHistoryRepo;

/// Composition root. Every persistence client is built exactly once here
/// and injected; nothing reaches for ambient globals. `shutdown` is the
/// matching teardown hook.
pub struct ServiceProvider {
    config: HelpMeConfig,
    database: Arc<Database>,
    document_store: Arc<DocumentStore>,
    history_repo: Arc<MongoHistoryRepo>,
    token_settings: Arc<TokenSettings>,
    counter_store: Arc<dyn CounterStore>,
    login_guard: Arc<LoginAttemptGuard>,
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    technician_service: Arc<dyn TechnicianService>,
    ticket_service: Arc<dyn TicketLifecycleService>,
    queue_service: Arc<dyn TicketQueueService>,
    catalog_service: Arc<dyn CatalogService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl ServiceProvider {
    pub async fn build(config: HelpMeConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::new(&config.db).await?);
        let document_store = Arc::new(DocumentStore::new(&config.mongo).await?);
        let redis_client = Arc::new(RedisClient::open(&config.redis)?);

        let orm_repo = Arc::new(OrmRepo::builder().db(database.clone()).build());
        let redis_repo = Arc::new(RedisRepo::builder().client(redis_client.clone()).build());
        let history_repo = Arc::new(MongoHistoryRepo::new(&document_store));

        let token_settings = Arc::new(TokenSettings {
            secret: config.jwt.secret.clone(),
            issuer: config.jwt.issuer.clone(),
            access_exp_secs: config.jwt.access_exp_secs,
            refresh_exp_secs: config.jwt.refresh_exp_secs,
            leeway: config.jwt.leeway,
        });

        let counter_store: Arc<dyn CounterStore> =
            Arc::new(RedisCounterStore::new(redis_client.clone()));
        let login_guard =
            Arc::new(LoginAttemptGuard::new(counter_store.clone(), config.rate_limit.login));

        let auth_service: Arc<dyn AuthService> = Arc::new(
            AuthServiceImpl::builder()
                .user_repo(orm_repo.clone())
                .sessions(redis_repo.clone())
                .tokens(token_settings.as_ref().clone())
                .build(),
        );
        let user_service: Arc<dyn UserService> =
            Arc::new(UserServiceImpl::builder().user_repo(orm_repo.clone()).build());
        let technician_service: Arc<dyn TechnicianService> = Arc::new(
            TechnicianServiceImpl::builder()
                .user_repo(orm_repo.clone())
                .shift_repo(orm_repo.clone())
                .build(),
        );
        let ticket_service: Arc<dyn TicketLifecycleService> = Arc::new(
            TicketLifecycleServiceImpl::builder()
                .ticket_repo(orm_repo.clone())
                .service_repo(orm_repo.clone())
                .service_order_repo(orm_repo.clone())
                .history_repo(history_repo.clone())
                .user_repo(orm_repo.clone())
                .build(),
        );
        let queue_service: Arc<dyn TicketQueueService> =
            Arc::new(TicketQueueServiceImpl::builder().ticket_repo(orm_repo.clone()).build());
        let catalog_service: Arc<dyn CatalogService> =
            Arc::new(CatalogServiceImpl::builder().service_repo(orm_repo.clone()).build());
        let dashboard_service: Arc<dyn DashboardService> = Arc::new(
            DashboardServiceImpl::builder()
                .ticket_repo(orm_repo.clone())
                .user_repo(orm_repo.clone())
                .service_repo(orm_repo)
                .build(),
        );

        Ok(Self {
            config,
            database,
            document_store,
            history_repo,
            token_settings,
            counter_store,
            login_guard,
            auth_service,
            user_service,
            technician_service,
            ticket_service,
            queue_service,
            catalog_service,
            dashboard_service,
        })
    }

    pub fn config(&self) -> &HelpMeConfig {
        &self.config
    }

    pub fn database(&self) -> Arc<Database> {
        self.database.clone()
    }

    pub fn history_repo(&self) -> Arc<MongoHistoryRepo> {
        self.history_repo.clone()
    }

    pub fn token_settings(&self) -> Arc<TokenSettings> {
        self.token_settings.clone()
    }

    pub fn counter_store(&self) -> Arc<dyn CounterStore> {
        self.counter_store.clone()
    }

    pub fn login_guard(&self) -> Arc<LoginAttemptGuard> {
        self.login_guard.clone()
    }

    pub fn auth_service(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn user_service(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    pub fn technician_service(&self) -> Arc<dyn TechnicianService> {
        self.technician_service.clone()
    }

    pub fn ticket_service(&self) -> Arc<dyn TicketLifecycleService> {
        self.ticket_service.clone()
    }

    pub fn queue_service(&self) -> Arc<dyn TicketQueueService> {
        self.queue_service.clone()
    }

    pub fn catalog_service(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    pub fn dashboard_service(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }

    /// Teardown hook for the process-wide persistence clients.
    pub async fn shutdown(&self) {
        if let Err(e) = self.database.close().await {
            error!("error closing database pool: {e:#}");
        }
        self.document_store.shutdown().await;
        info!("persistence clients closed");
    }
}
