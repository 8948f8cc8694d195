//! Sample tickets for demonstrations.

use jiff::Timestamp;

use crate::error::Result;
use crate::form::TicketForm;
use crate::store::TicketStore;
use crate::types::{ProblemType, Ticket, TicketStatus};

struct Sample {
    title: &'static str,
    problem_type: ProblemType,
    device_number: &'static str,
    description: &'static str,
    contact_person: &'static str,
    phone: &'static str,
    status: TicketStatus,
    created_at: &'static str,
}

/// In insertion order; the last sample ends up at the top of the list
const SAMPLES: &[Sample] = &[
    Sample {
        title: "Slow computer",
        problem_type: ProblemType::SoftwareIssue,
        device_number: "PC-125-2024",
        description: "The computer has become very slow: Windows takes a long time to boot \
                      and programs open with a delay.",
        contact_person: "Anna Sidorova",
        phone: "+7 (923) 456-78-90",
        status: TicketStatus::New,
        created_at: "2024-09-02T09:15:00Z",
    },
    Sample {
        title: "HP LaserJet printer not working",
        problem_type: ProblemType::HardwareFault,
        device_number: "HP-001-2024",
        description: "The printer does not print and the red indicator is blinking. \
                      Paper and toner were checked and are fine.",
        contact_person: "Petr Ivanov",
        phone: "+7 (912) 345-67-89",
        status: TicketStatus::InProgress,
        created_at: "2024-09-01T10:30:00Z",
    },
];

/// Insert the sample tickets, taking ids from the form's sequence
pub fn seed(store: &mut TicketStore, form: &mut TicketForm) -> Result<()> {
    for sample in SAMPLES {
        let created_at: Timestamp = sample.created_at.parse()?;
        store.add(Ticket {
            id: form.next_id(),
            title: sample.title.to_string(),
            problem_type: sample.problem_type,
            device_number: sample.device_number.to_string(),
            description: sample.description.to_string(),
            contact_person: sample.contact_person.to_string(),
            phone: sample.phone.to_string(),
            status: sample.status,
            created_at,
        });
    }
    tracing::info!(count = SAMPLES.len(), "seeded demo tickets");
    Ok(())
}
