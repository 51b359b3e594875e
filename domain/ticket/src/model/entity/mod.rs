mod history;
mod service;
mod service_order;
mod ticket;

#[rustfmt::skip]
pub use {
    history::TicketHistoryEntry,
    service::Service,
    service_order::ServiceOrder,
    ticket::{Ticket, TicketStatus},
};
