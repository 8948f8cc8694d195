//! Text rendering for tickets, statuses and the ticket form

use jiff::Timestamp;
use jiff::tz::TimeZone;
use owo_colors::OwoColorize;

pub mod form;
pub mod ticket;

pub use form::{render_draft, render_problem_types};
pub use ticket::{
    DetailViewModel, EMPTY_STATE_HINT, EMPTY_STATE_TITLE, NOT_SPECIFIED, SummaryViewModel,
    render_detail, render_list,
};

/// Visual category of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Info,
    Warning,
    Success,
    Neutral,
}

impl StatusCategory {
    /// Category for a raw status value; unrecognized values are neutral
    pub fn from_raw(status: &str) -> Self {
        match status {
            "new" => StatusCategory::Info,
            "in-progress" => StatusCategory::Warning,
            "resolved" => StatusCategory::Success,
            _ => StatusCategory::Neutral,
        }
    }
}

/// Display label for a raw status value; unrecognized values pass through
pub fn status_label(status: &str) -> &str {
    match status {
        "new" => "New",
        "in-progress" => "In progress",
        "resolved" => "Resolved",
        other => other,
    }
}

/// Rendering settings shared by every view
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub color: bool,
    pub time_zone: TimeZone,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: true,
            time_zone: TimeZone::system(),
        }
    }
}

impl DisplayOptions {
    pub fn plain(time_zone: TimeZone) -> Self {
        Self {
            color: false,
            time_zone,
        }
    }
}

pub fn format_status_badge(status: &str, color: bool) -> String {
    let badge = format!("[{}]", status_label(status));
    if !color {
        return badge;
    }
    paint_badge(status, badge)
}

/// Color an already-labelled badge by the category of its raw status
pub(crate) fn paint_badge(status: &str, badge: String) -> String {
    match StatusCategory::from_raw(status) {
        StatusCategory::Info => badge.blue().to_string(),
        StatusCategory::Warning => badge.yellow().to_string(),
        StatusCategory::Success => badge.green().to_string(),
        StatusCategory::Neutral => badge.dimmed().to_string(),
    }
}

/// Long-form date plus hour and minute in the given zone
///
/// # Examples
///
/// ```
/// use helpdesk::display::format_created_at;
/// use jiff::{Timestamp, tz::TimeZone};
///
/// let ts: Timestamp = "2024-09-01T10:30:00Z".parse().unwrap();
/// assert_eq!(format_created_at(ts, &TimeZone::UTC), "September 1, 2024, 10:30");
/// ```
pub fn format_created_at(created_at: Timestamp, time_zone: &TimeZone) -> String {
    created_at
        .to_zoned(time_zone.clone())
        .strftime("%B %-d, %Y, %H:%M")
        .to_string()
}
