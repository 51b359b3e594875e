use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_http::Method;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use redis::Cmd;
use tracing::{error, warn};

use crate::api::error::WebError;
use crate::infrastructure::config::GuardConfig;
use crate::infrastructure::database::RedisClient;

const RETRY_MESSAGE: &str = "Muitas requisições, tente novamente em alguns minutos.";

/// Fixed-window counters with a TTL per window. The store owns expiry; a
/// `current` call inside an elapsed window reads 0.
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn current(&self, key: &str) -> anyhow::Result<u64>;
    /// Increments and arms the window TTL on the first hit of a window;
    /// returns the new count.
    async fn incr(&self, key: &str, window_secs: u64) -> anyhow::Result<u64>;
}

pub struct RedisCounterStore {
    client: Arc<RedisClient>,
}

impl RedisCounterStore {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn current(&self, key: &str) -> anyhow::Result<u64> {
        let mut connection = self.client.get_connection()?;
        connection.check_open()?;
        Ok(connection.query::<Option<u64>>(&Cmd::get(key))?.unwrap_or(0))
    }

    async fn incr(&self, key: &str, window_secs: u64) -> anyhow::Result<u64> {
        let mut connection = self.client.get_connection()?;
        connection.check_open()?;
        let count: u64 = connection.query(&Cmd::incr(key, 1u64))?;
        if count == 1 {
            connection.query::<()>(&Cmd::expire(key, window_secs as i64))?;
        }
        Ok(count)
    }
}

/// In-memory counter store with the same window semantics; used by the
/// tests and usable as a single-process fallback.
pub struct MemoryCounterStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, (u64, std::time::Instant)>>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn current(&self, key: &str) -> anyhow::Result<u64> {
        let entries = self.entries.lock().unwrap();
        Ok(match entries.get(key) {
            Some((count, expires_at)) if *expires_at > std::time::Instant::now() => *count,
            _ => 0,
        })
    }

    async fn incr(&self, key: &str, window_secs: u64) -> anyhow::Result<u64> {
        let mut entries = self.entries.lock().unwrap();
        let now = std::time::Instant::now();
        let entry = match entries.get(key) {
            Some((count, expires_at)) if *expires_at > now => (count + 1, *expires_at),
            _ => (1, now + std::time::Duration::from_secs(window_secs)),
        };
        entries.insert(key.to_string(), entry);
        Ok(entry.0)
    }
}

/// Which requests a guard watches and which responses consume its budget.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum GuardKind {
    /// Every request counts.
    General,
    /// Only mutating methods are guarded; failed requests are excluded from
    /// the count.
    Write,
}

fn guard_applies(kind: GuardKind, method: &Method) -> bool {
    match kind {
        GuardKind::General => true,
        GuardKind::Write => {
            *method == Method::POST
                || *method == Method::PUT
                || *method == Method::PATCH
                || *method == Method::DELETE
        }
    }
}

fn response_counts(kind: GuardKind, status: actix_http::StatusCode) -> bool {
    match kind {
        GuardKind::General => true,
        GuardKind::Write => status.is_success(),
    }
}

fn guard_key(kind: GuardKind, ip: &str) -> String {
    match kind {
        GuardKind::General => format!("rl_general_{ip}"),
        GuardKind::Write => format!("rl_write_{ip}"),
    }
}

/// Per-ip fixed-window request budget. The check runs before the handler;
/// the consumption is recorded after it, so each kind can decide which
/// outcomes count.
pub struct RateGuard {
    store: Arc<dyn CounterStore>,
    kind: GuardKind,
    config: GuardConfig,
}

impl RateGuard {
    pub fn new(store: Arc<dyn CounterStore>, kind: GuardKind, config: GuardConfig) -> Self {
        Self { store, kind, config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateGuardMiddleware {
            service: Rc::new(service),
            store: self.store.clone(),
            kind: self.kind,
            config: self.config,
        }))
    }
}

pub struct RateGuardMiddleware<S> {
    service: Rc<S>,
    store: Arc<dyn CounterStore>,
    kind: GuardKind,
    config: GuardConfig,
}

impl<S, B> Service<ServiceRequest> for RateGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let store = self.store.clone();
        let kind = self.kind;
        let config = self.config;
        Box::pin(async move {
            if !guard_applies(kind, req.method()) {
                return service.call(req).await;
            }
            let ip = req
                .connection_info()
                .realip_remote_addr()
                .unwrap_or("unknown")
                .to_string();
            let key = guard_key(kind, &ip);

            // A broken counter store must not take the API down with it.
            let count = match store.current(&key).await {
                Ok(count) => count,
                Err(e) => {
                    error!("rate guard store unavailable: {e}");
                    0
                }
            };
            if count >= config.limit {
                warn!(ip = %ip, "request budget exceeded");
                return Err(WebError::too_many_requests(RETRY_MESSAGE.to_string()).into());
            }

            let res = service.call(req).await?;
            if response_counts(kind, res.status()) {
                if let Err(e) = store.incr(&key, config.window_secs).await {
                    error!("rate guard store unavailable: {e}");
                }
            }
            Ok(res)
        })
    }
}

fn login_key(ip: &str, email: &str) -> String {
    format!("rl_login_{ip}_{email}")
}

/// Failed-login budget, keyed by ip and attempted e-mail. Only failures
/// consume it; a successful login leaves the counter untouched.
pub struct LoginAttemptGuard {
    store: Arc<dyn CounterStore>,
    config: GuardConfig,
}

impl LoginAttemptGuard {
    pub fn new(store: Arc<dyn CounterStore>, config: GuardConfig) -> Self {
        Self { store, config }
    }

    pub async fn check(&self, ip: &str, email: &str) -> Result<(), WebError> {
        let count = match self.store.current(&login_key(ip, email)).await {
            Ok(count) => count,
            Err(e) => {
                error!("rate guard store unavailable: {e}");
                0
            }
        };
        if count >= self.config.limit {
            warn!(ip, email, "login budget exceeded");
            return Err(WebError::too_many_requests(RETRY_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub async fn record_failure(&self, ip: &str, email: &str) {
        if let Err(e) = self.store.incr(&login_key(ip, email), self.config.window_secs).await {
            error!("could not record failed login: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_guard(limit: u64) -> LoginAttemptGuard {
        LoginAttemptGuard::new(
            Arc::new(MemoryCounterStore::new()),
            GuardConfig {
                window_secs: 900,
                limit,
            },
        )
    }

    #[tokio::test]
    async fn sixth_failed_attempt_is_limited() {
        let guard = login_guard(5);
        for _ in 0..5 {
            guard.check("10.0.0.1", "maria@helpme.dev").await.unwrap();
            guard.record_failure("10.0.0.1", "maria@helpme.dev").await;
        }
        assert!(guard.check("10.0.0.1", "maria@helpme.dev").await.is_err());
    }

    #[tokio::test]
    async fn successful_logins_do_not_consume_the_budget() {
        let guard = login_guard(5);
        // 4 failures then a success: check passes, nothing recorded
        for _ in 0..4 {
            guard.record_failure("10.0.0.1", "maria@helpme.dev").await;
        }
        guard.check("10.0.0.1", "maria@helpme.dev").await.unwrap();
        guard.check("10.0.0.1", "maria@helpme.dev").await.unwrap();
    }

    #[tokio::test]
    async fn budgets_are_keyed_by_ip_and_email() {
        let guard = login_guard(1);
        guard.record_failure("10.0.0.1", "maria@helpme.dev").await;
        assert!(guard.check("10.0.0.1", "maria@helpme.dev").await.is_err());
        guard.check("10.0.0.2", "maria@helpme.dev").await.unwrap();
        guard.check("10.0.0.1", "joao@helpme.dev").await.unwrap();
    }

    #[tokio::test]
    async fn counters_expire_with_the_window() {
        let store = MemoryCounterStore::new();
        store.incr("k", 0).await.unwrap();
        assert_eq!(store.current("k").await.unwrap(), 0);

        store.incr("k", 900).await.unwrap();
        store.incr("k", 900).await.unwrap();
        assert_eq!(store.current("k").await.unwrap(), 2);
    }

    #[test]
    fn write_guard_watches_mutations_only() {
        assert!(guard_applies(GuardKind::Write, &Method::POST));
        assert!(guard_applies(GuardKind::Write, &Method::PUT));
        assert!(guard_applies(GuardKind::Write, &Method::DELETE));
        assert!(!guard_applies(GuardKind::Write, &Method::GET));
        assert!(guard_applies(GuardKind::General, &Method::GET));
    }

    #[test]
    fn write_guard_excludes_failed_requests() {
        use actix_http::StatusCode;
        assert!(response_counts(GuardKind::Write, StatusCode::OK));
        assert!(!response_counts(GuardKind::Write, StatusCode::BAD_REQUEST));
        assert!(!response_counts(GuardKind::Write, StatusCode::INTERNAL_SERVER_ERROR));
        assert!(response_counts(GuardKind::General, StatusCode::BAD_REQUEST));
    }
}
