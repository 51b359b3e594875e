use async_trait::async_trait;

use crate::exception::TicketResult;
use crate::model::vo::DashboardSummary;

#[async_trait]
pub trait DashboardService: Send + Sync {
    async fn summary(&self) -> TicketResult<DashboardSummary>;
}
