//! Ticket form: the draft of a not-yet-submitted ticket.
//!
//! The form is edited one field at a time. Submission validates the required
//! fields, materializes a [`Ticket`], hands it to the [`TicketStore`] and
//! resets the draft.

pub mod id;
pub mod phone;
pub mod validation;

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;

use crate::error::{HelpdeskError, Result};
use crate::store::TicketStore;
use crate::types::{ProblemType, Ticket, TicketId, TicketStatus};

pub use id::IdSequence;
pub use phone::format_phone;
pub use validation::{REQUIRED_FIELDS, ValidationFailure, validate_draft};

/// Editable fields of the ticket form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    ProblemType,
    DeviceNumber,
    ContactPerson,
    Phone,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::ProblemType,
        FormField::DeviceNumber,
        FormField::ContactPerson,
        FormField::Phone,
        FormField::Description,
    ];

    /// Field name as used in the data model
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::ProblemType => "problemType",
            FormField::DeviceNumber => "deviceNumber",
            FormField::ContactPerson => "contactPerson",
            FormField::Phone => "phone",
            FormField::Description => "description",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Ticket title",
            FormField::ProblemType => "Problem type",
            FormField::DeviceNumber => "Device number",
            FormField::ContactPerson => "Contact person",
            FormField::Phone => "Phone",
            FormField::Description => "Problem description",
        }
    }

    pub fn is_required(&self) -> bool {
        REQUIRED_FIELDS.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = HelpdeskError;

    /// Accepts camelCase, kebab-case or snake_case names and a few short aliases
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "title" => Ok(FormField::Title),
            "problemtype" | "type" => Ok(FormField::ProblemType),
            "devicenumber" | "device" => Ok(FormField::DeviceNumber),
            "contactperson" | "contact" => Ok(FormField::ContactPerson),
            "phone" => Ok(FormField::Phone),
            "description" | "desc" => Ok(FormField::Description),
            _ => Err(HelpdeskError::UnknownField(s.to_string())),
        }
    }
}

/// Partial ticket being filled in on the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub problem_type: Option<ProblemType>,
    pub device_number: String,
    pub description: String,
    pub contact_person: String,
    pub phone: String,
}

impl Draft {
    /// Current value of a field as text; an unset problem type is empty
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::ProblemType => self.problem_type.map(|t| t.label()).unwrap_or(""),
            FormField::DeviceNumber => &self.device_number,
            FormField::ContactPerson => &self.contact_person,
            FormField::Phone => &self.phone,
            FormField::Description => &self.description,
        }
    }

    /// Whether a field holds any text at all
    pub fn has_value(&self, field: FormField) -> bool {
        !self.value(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}

/// Ticket form state plus the id source for tickets it produces
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    draft: Draft,
    ids: IdSequence,
}

impl TicketForm {
    pub fn new(ids: IdSequence) -> Self {
        Self {
            draft: Draft::default(),
            ids,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Update exactly one field of the draft.
    ///
    /// The phone field is passed through [`format_phone`] on every change.
    /// The problem type must name one of the fixed choices (an empty value
    /// clears it); anything else is rejected and the draft is left as is.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::Title => self.draft.title = value.to_string(),
            FormField::ProblemType => {
                self.draft.problem_type = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            FormField::DeviceNumber => self.draft.device_number = value.to_string(),
            FormField::ContactPerson => self.draft.contact_person = value.to_string(),
            FormField::Phone => self.draft.phone = format_phone(value),
            FormField::Description => self.draft.description = value.to_string(),
        }
        tracing::debug!(field = %field, "draft field updated");
        Ok(())
    }

    /// Reset the draft to all-empty fields
    pub fn discard(&mut self) {
        self.draft = Draft::default();
    }

    /// Reserve the next ticket id without submitting anything
    pub fn next_id(&mut self) -> TicketId {
        self.ids.next_id()
    }

    /// Submit the draft.
    ///
    /// On success the new ticket is added to `store`, the draft is reset and a
    /// copy of the ticket is returned. On failure nothing is inserted and the
    /// draft keeps its contents.
    pub fn submit(
        &mut self,
        store: &mut TicketStore,
        now: Timestamp,
    ) -> std::result::Result<Ticket, ValidationFailure> {
        let valid = validate_draft(&self.draft).inspect_err(|failure| {
            tracing::warn!("ticket submission rejected: {failure}");
        })?;

        let ticket = Ticket {
            id: self.ids.next_id(),
            title: valid.title,
            problem_type: valid.problem_type,
            device_number: valid.device_number,
            description: valid.description,
            contact_person: valid.contact_person,
            phone: valid.phone,
            status: TicketStatus::New,
            created_at: now,
        };
        tracing::info!(id = %ticket.id, "ticket submitted");

        store.add(ticket.clone());
        self.discard();
        Ok(ticket)
    }
}
