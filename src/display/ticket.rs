//! Ticket list and detail rendering
//!
//! View models are computed first and rendered second so the field logic
//! (fallbacks, date formatting) is testable without comparing whole strings.

use crate::types::Ticket;

use super::{DisplayOptions, format_created_at, format_status_badge, paint_badge, status_label};

/// Shown in place of an empty device number
pub const NOT_SPECIFIED: &str = "Not specified";

pub const EMPTY_STATE_TITLE: &str = "No tickets yet";
pub const EMPTY_STATE_HINT: &str = "Create your first support ticket";

/// One row of the ticket list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryViewModel {
    /// 1-based position used to open the detail view
    pub position: usize,
    pub title: String,
    pub status: String,
    pub status_label: String,
    pub problem_type: String,
    pub device_number: String,
    pub created: String,
}

impl SummaryViewModel {
    pub fn new(position: usize, ticket: &Ticket, options: &DisplayOptions) -> Self {
        let status = ticket.status.as_str();
        Self {
            position,
            title: ticket.title.clone(),
            status: status.to_string(),
            status_label: status_label(status).to_string(),
            problem_type: ticket.problem_type.label().to_string(),
            device_number: device_or_fallback(&ticket.device_number),
            created: format_created_at(ticket.created_at, &options.time_zone),
        }
    }
}

/// Every field of a ticket, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub id: String,
    pub title: String,
    pub status: String,
    pub problem_type: String,
    pub device_number: String,
    pub contact_person: String,
    pub phone: String,
    pub description: String,
    pub created: String,
}

impl DetailViewModel {
    pub fn new(ticket: &Ticket, options: &DisplayOptions) -> Self {
        Self {
            id: ticket.id.to_string(),
            title: ticket.title.clone(),
            status: ticket.status.as_str().to_string(),
            problem_type: ticket.problem_type.label().to_string(),
            device_number: device_or_fallback(&ticket.device_number),
            contact_person: ticket.contact_person.clone(),
            phone: ticket.phone.clone(),
            description: ticket.description.clone(),
            created: format_created_at(ticket.created_at, &options.time_zone),
        }
    }
}

fn device_or_fallback(device_number: &str) -> String {
    if device_number.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        device_number.to_string()
    }
}

/// Render the ticket list, newest first, or the empty-state message
pub fn render_list<'a, I>(tickets: I, options: &DisplayOptions) -> String
where
    I: ExactSizeIterator<Item = &'a Ticket>,
{
    let mut output = format!("My tickets ({})\n", tickets.len());

    if tickets.len() == 0 {
        output.push_str(&format!("\n{}\n{}\n", EMPTY_STATE_TITLE, EMPTY_STATE_HINT));
        return output;
    }

    for (i, ticket) in tickets.enumerate() {
        let row = SummaryViewModel::new(i + 1, ticket, options);
        output.push('\n');
        output.push_str(&render_summary(&row, options.color));
    }
    output
}

fn render_summary(row: &SummaryViewModel, color: bool) -> String {
    let badge = format!("[{}]", row.status_label);
    let badge = if color {
        paint_badge(&row.status, badge)
    } else {
        badge
    };
    let mut output = format!("{}. {} {}\n", row.position, row.title, badge);
    output.push_str(&format!("   Type: {}\n", row.problem_type));
    output.push_str(&format!("   Device: {}\n", row.device_number));
    output.push_str(&format!("   Date: {}\n", row.created));
    output
}

/// Render the expanded view of one ticket, including the full description
pub fn render_detail(ticket: &Ticket, options: &DisplayOptions) -> String {
    let detail = DetailViewModel::new(ticket, options);

    let mut output = format!(
        "{} {}\n",
        detail.title,
        format_status_badge(&detail.status, options.color)
    );
    output.push_str(&format!("ID: {}\n", detail.id));
    output.push_str(&format!("Problem type: {}\n", detail.problem_type));
    output.push_str(&format!("Device number: {}\n", detail.device_number));
    output.push_str(&format!("Contact person: {}\n", detail.contact_person));
    output.push_str(&format!("Phone: {}\n", detail.phone));
    output.push_str("\nProblem description:\n");
    for line in detail.description.lines() {
        if line.is_empty() {
            output.push('\n');
        } else {
            output.push_str(&format!("  {}\n", line));
        }
    }
    output.push_str(&format!("\nCreated: {}\n", detail.created));
    output
}
