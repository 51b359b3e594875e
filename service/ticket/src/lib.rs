mod catalog;
mod dashboard;
mod lifecycle;
mod queue;

#[rustfmt::skip]
pub use {
    catalog::CatalogServiceImpl,
    dashboard::DashboardServiceImpl,
    lifecycle::TicketLifecycleServiceImpl,
    queue::TicketQueueServiceImpl,
};
