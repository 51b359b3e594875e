mod catalog;
mod dashboard;
mod lifecycle;
mod queue;

#[rustfmt::skip]
pub use {
    catalog::CatalogService,
    dashboard::DashboardService,
    lifecycle::TicketLifecycleService,
    queue::TicketQueueService,
};
