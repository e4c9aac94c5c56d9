pub mod tickets_schema;
pub mod tickets_service;

pub use tickets_schema::Ticket;
pub use tickets_service::{TicketView, TicketsService};
