use crate::form::{Draft, FormField};
use crate::types::ProblemType;

/// Render the ticket form with the current draft values.
///
/// Required fields carry a `*` after their label.
pub fn render_draft(draft: &Draft) -> String {
    let mut output = String::from("New support ticket\n\n");
    for field in FormField::ALL {
        let marker = if field.is_required() { " *" } else { "" };
        let value = draft.value(field);
        if value.is_empty() {
            output.push_str(&format!("{}{} ({}):\n", field.label(), marker, field.name()));
        } else {
            output.push_str(&format!(
                "{}{} ({}): {}\n",
                field.label(),
                marker,
                field.name(),
                value
            ));
        }
    }
    output
}

/// Numbered list of problem type choices
pub fn render_problem_types() -> String {
    ProblemType::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| format!("  {}. {} ({})\n", i + 1, t.label(), t.key()))
        .collect()
}
