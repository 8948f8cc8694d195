pub mod app;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod form;
pub mod session;
pub mod shell;
pub mod store;
pub mod types;

pub use app::App;
pub use config::Config;
pub use error::{HelpdeskError, Result};
pub use form::{Draft, FormField, IdSequence, TicketForm, ValidationFailure, format_phone};
pub use session::{
    AcceptAll, Authenticator, Credentials, SessionAction, SessionState, View, reduce_session,
};
pub use store::TicketStore;
pub use types::{ProblemType, Ticket, TicketId, TicketStatus, VALID_STATUSES};
