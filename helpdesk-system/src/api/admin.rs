use actix_web::web;
use domain_ticket::model::vo::DashboardSummary;

use crate::api::error::{ApiResponder, ApiResult};
use crate::infrastructure::ServiceProvider;

pub async fn dashboard(sp: web::Data<ServiceProvider>) -> ApiResult<DashboardSummary> {
    let summary = sp.dashboard_service().summary().await?;
    Ok(ApiResponder(summary))
}
