//! Ticket intake flow tests
//!
//! These exercise the store, form and session together through `App`,
//! the same surface a front end uses.

mod common;

use common::mock_data::{
    PRINTER_DRAFT, TicketBuilder, credentials, fill_draft_except, fixed_time, logged_in_app,
};
use common::plain_options;
use helpdesk::display::{EMPTY_STATE_TITLE, render_list};
use helpdesk::form::REQUIRED_FIELDS;
use helpdesk::{
    App, FormField, HelpdeskError, ProblemType, TicketStatus, TicketStore, View, format_phone,
};

// ============================================================================
// Phone formatting
// ============================================================================

#[test]
fn test_phone_exact_example() {
    assert_eq!(format_phone("79123456789"), "+7 (912) 345-67-89");
}

#[test]
fn test_phone_pass_through() {
    assert_eq!(format_phone("12345"), "12345");
}

#[test]
fn test_phone_idempotent_while_typing() {
    // Every prefix of a typed number, as the form sees it keystroke by keystroke
    let typed = "+7 (912) 345-67-89";
    for end in 0..=typed.len() {
        let partial = &typed[..end];
        let once = format_phone(partial);
        assert_eq!(format_phone(&once), once);
    }
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_store_insertion_order() {
    let mut store = TicketStore::new();
    let a = TicketBuilder::new("A").build();
    let b = TicketBuilder::new("B").build();
    store.add(a.clone());
    store.add(b.clone());
    let all: Vec<_> = store.all().cloned().collect();
    assert_eq!(all, vec![b, a]);
}

#[test]
fn test_empty_store_renders_empty_state() {
    let store = TicketStore::new();
    assert_eq!(store.count(), 0);
    assert_eq!(store.all().count(), 0);
    let output = render_list(store.all(), &plain_options());
    assert!(output.contains(EMPTY_STATE_TITLE));
}

#[test]
fn test_list_shows_every_status() {
    let mut store = TicketStore::new();
    store.add(TicketBuilder::new("1").status(TicketStatus::Resolved).build());
    store.add(TicketBuilder::new("2").status(TicketStatus::InProgress).build());
    store.add(TicketBuilder::new("3").device("PC-1").build());

    let output = render_list(store.all(), &plain_options());
    assert!(output.starts_with("My tickets (3)\n"));
    assert!(output.contains("1. Ticket 3 [New]"));
    assert!(output.contains("2. Ticket 2 [In progress]"));
    assert!(output.contains("3. Ticket 1 [Resolved]"));
    assert!(output.contains("Device: PC-1"));
    assert_eq!(output.matches("Device: Not specified").count(), 2);
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submission_round_trip() {
    let mut app = logged_in_app();
    fill_draft_except(&mut app, None);
    app.set_field(FormField::DeviceNumber, "PC-125-2024").unwrap();
    let draft = app.draft().clone();

    let ticket = app.submit_at(fixed_time()).unwrap();

    assert_eq!(ticket.title, draft.title);
    assert_eq!(Some(ticket.problem_type), draft.problem_type);
    assert_eq!(ticket.device_number, draft.device_number);
    assert_eq!(ticket.description, draft.description);
    assert_eq!(ticket.contact_person, draft.contact_person);
    assert_eq!(ticket.phone, draft.phone);
    assert_eq!(ticket.status, TicketStatus::New);
    assert_eq!(ticket.created_at, fixed_time());
    assert!(app.draft().is_empty());
    for field in FormField::ALL {
        assert_eq!(app.draft().value(field), "");
    }
}

#[test]
fn test_required_field_gating() {
    for required in REQUIRED_FIELDS {
        let mut app = logged_in_app();
        fill_draft_except(&mut app, Some(required));

        let err = app.submit_at(fixed_time()).unwrap_err();

        let HelpdeskError::Validation(failure) = err else {
            panic!("expected validation failure for {required}");
        };
        assert_eq!(failure.missing().collect::<Vec<_>>(), vec![required]);
        assert_eq!(app.store().count(), 0, "ticket inserted without {required}");
        assert_eq!(app.visible_view(), View::CreateTicket);
    }
}

#[test]
fn test_whitespace_only_values_are_kept_verbatim() {
    let mut app = logged_in_app();
    fill_draft_except(&mut app, Some(FormField::Title));
    app.set_field(FormField::Title, "   ").unwrap();
    app.set_field(FormField::DeviceNumber, "  ").unwrap();

    let ticket = app.submit_at(fixed_time()).unwrap();

    assert_eq!(ticket.title, "   ");
    assert_eq!(ticket.device_number, "  ");
    let list = render_list(app.store().all(), &plain_options());
    assert!(list.contains("   Device:   \n"));
}

#[test]
fn test_device_number_is_optional() {
    let mut app = logged_in_app();
    fill_draft_except(&mut app, None);
    assert!(!FormField::DeviceNumber.is_required());
    assert!(app.submit_at(fixed_time()).is_ok());
}

#[test]
fn test_rapid_submissions_get_unique_ids() {
    let mut app = logged_in_app();
    for _ in 0..50 {
        fill_draft_except(&mut app, None);
        app.submit_at(fixed_time()).unwrap();
    }
    let mut ids: Vec<_> = app.store().all().map(|t| t.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_auth_gating() {
    let mut app = App::default();
    app.navigate_to(View::TicketList);
    assert!(!app.is_authenticated());
    assert_eq!(app.active_view(), View::Login);
}

#[test]
fn test_tickets_survive_logout() {
    let mut app = logged_in_app();
    fill_draft_except(&mut app, None);
    app.submit_at(fixed_time()).unwrap();
    app.logout();
    assert_eq!(app.visible_view(), View::Login);

    app.login(&credentials()).unwrap();
    app.navigate_to(View::TicketList);
    assert_eq!(app.store().count(), 1);
}

#[test]
fn test_end_to_end_scenario() {
    let mut app = App::default();
    assert!(!app.is_authenticated());

    app.login(&credentials()).unwrap();
    assert_eq!(app.active_view(), View::CreateTicket);

    for (field, value) in PRINTER_DRAFT {
        app.set_field(field, value).unwrap();
    }
    app.submit().unwrap();

    assert_eq!(app.store().count(), 1);
    let ticket = app.ticket(1).unwrap();
    assert_eq!(ticket.phone, "+7 (912) 345-67-89");
    assert_eq!(ticket.problem_type, ProblemType::HardwareFault);
    assert_eq!(app.active_view(), View::TicketList);
}
