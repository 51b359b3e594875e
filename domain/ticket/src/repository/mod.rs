mod history;
mod service;
mod service_order;
mod ticket;

#[rustfmt::skip]
pub use {
    history::TicketHistoryRepo,
    service::ServiceRepo,
    service_order::ServiceOrderRepo,
    ticket::TicketRepo,
};
