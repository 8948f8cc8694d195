//! Required-field validation for ticket drafts.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::types::ProblemType;

use super::{Draft, FormField};

/// Fields that must be non-empty before a draft can be submitted
pub const REQUIRED_FIELDS: [FormField; 5] = [
    FormField::Title,
    FormField::ProblemType,
    FormField::ContactPerson,
    FormField::Phone,
    FormField::Description,
];

/// A draft was submitted with one or more required fields left empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationFailure {
    missing: BTreeSet<FormField>,
}

impl ValidationFailure {
    /// Missing fields in form order
    pub fn missing(&self) -> impl Iterator<Item = FormField> + '_ {
        self.missing.iter().copied()
    }

    pub fn is_missing(&self, field: FormField) -> bool {
        self.missing.contains(&field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(|f| f.name()).collect();
        write!(f, "missing required fields: {}", names.join(", "))
    }
}

/// Draft contents that passed validation
#[derive(Debug, Clone)]
pub struct ValidDraft {
    pub title: String,
    pub problem_type: ProblemType,
    pub device_number: String,
    pub description: String,
    pub contact_person: String,
    pub phone: String,
}

/// Check every required field of a draft.
///
/// Any non-empty value satisfies a field, whitespace included. The draft
/// itself is untouched, so a failed submission can be corrected and retried.
pub fn validate_draft(draft: &Draft) -> Result<ValidDraft, ValidationFailure> {
    let missing: BTreeSet<FormField> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !draft.has_value(*field))
        .collect();

    match draft.problem_type {
        Some(problem_type) if missing.is_empty() => Ok(ValidDraft {
            title: draft.title.clone(),
            problem_type,
            device_number: draft.device_number.clone(),
            description: draft.description.clone(),
            contact_person: draft.contact_person.clone(),
            phone: draft.phone.clone(),
        }),
        _ => Err(ValidationFailure { missing }),
    }
}
