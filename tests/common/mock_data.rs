//! Mock data builders for creating test tickets and drafts.

use helpdesk::{App, Credentials, FormField, ProblemType, Ticket, TicketId, TicketStatus};
use jiff::Timestamp;

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: TicketId::new(id),
                title: format!("Ticket {id}"),
                problem_type: ProblemType::Other,
                device_number: String::new(),
                description: "Something is wrong".to_string(),
                contact_person: "Test User".to_string(),
                phone: "+7 (900) 000-00-00".to_string(),
                status: TicketStatus::New,
                created_at: "2024-01-01T00:00:00Z"
                    .parse()
                    .expect("test timestamp should be valid"),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn device(mut self, device: &str) -> Self {
        self.ticket.device_number = device.to_string();
        self
    }

    pub fn created_at(mut self, created_at: &str) -> Self {
        self.ticket.created_at = created_at.parse().expect("test timestamp should be valid");
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// The fully filled draft used by the end-to-end scenario
pub const PRINTER_DRAFT: [(FormField, &str); 5] = [
    (FormField::Title, "Printer broken"),
    (FormField::ProblemType, "Hardware fault"),
    (FormField::ContactPerson, "A. Ivanov"),
    (FormField::Phone, "79123456789"),
    (FormField::Description, "No power"),
];

pub fn credentials() -> Credentials {
    Credentials::new("user@example.com", "password")
}

pub fn logged_in_app() -> App {
    let mut app = App::default();
    app.login(&credentials()).expect("default login always succeeds");
    app
}

/// Fill the draft with every field except `skip`
pub fn fill_draft_except(app: &mut App, skip: Option<FormField>) {
    for (field, value) in PRINTER_DRAFT {
        if Some(field) != skip {
            app.set_field(field, value).expect("field should accept value");
        }
    }
}

pub fn fixed_time() -> Timestamp {
    "2024-09-01T10:30:00Z".parse().expect("valid timestamp")
}
