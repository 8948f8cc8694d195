use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HelpdeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const VALID_STATUSES: &[&str] = &["new", "in-progress", "resolved"];

/// Category of the reported problem, chosen from a fixed list on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemType {
    #[serde(rename = "Hardware fault")]
    HardwareFault,
    #[serde(rename = "Software issue")]
    SoftwareIssue,
    #[serde(rename = "Network issue")]
    NetworkIssue,
    #[serde(rename = "Other")]
    Other,
}

impl ProblemType {
    /// All problem types in the order the form offers them
    pub const ALL: [ProblemType; 4] = [
        ProblemType::HardwareFault,
        ProblemType::SoftwareIssue,
        ProblemType::NetworkIssue,
        ProblemType::Other,
    ];

    /// Human-readable label, also used as the stored value
    pub fn label(&self) -> &'static str {
        match self {
            ProblemType::HardwareFault => "Hardware fault",
            ProblemType::SoftwareIssue => "Software issue",
            ProblemType::NetworkIssue => "Network issue",
            ProblemType::Other => "Other",
        }
    }

    /// Short stable key accepted as an alternative to the label
    pub fn key(&self) -> &'static str {
        match self {
            ProblemType::HardwareFault => "hardware",
            ProblemType::SoftwareIssue => "software",
            ProblemType::NetworkIssue => "network",
            ProblemType::Other => "other",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProblemType {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ProblemType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle) || t.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| HelpdeskError::InvalidProblemType(s.to_string()))
    }
}

/// Unique identifier of a submitted ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        TicketId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submitted support ticket. Never mutated after it enters the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub problem_type: ProblemType,
    /// Empty when the reporter did not specify a device
    pub device_number: String,
    pub description: String,
    pub contact_person: String,
    pub phone: String,
    pub status: TicketStatus,
    pub created_at: Timestamp,
}
