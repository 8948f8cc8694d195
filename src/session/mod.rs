//! Session state and view navigation.
//!
//! The session tracks whether the user is logged in and which screen is
//! active. Transitions are a pure reducer over [`SessionState`] so they can
//! be tested without any front end attached.

pub mod auth;

use std::fmt;
use std::str::FromStr;

use crate::error::HelpdeskError;

pub use auth::{AcceptAll, Authenticator, Credentials};

/// The three screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    CreateTicket,
    TicketList,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::CreateTicket => "create-ticket",
            View::TicketList => "ticket-list",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "login" => Ok(View::Login),
            "create-ticket" | "create" | "new" => Ok(View::CreateTicket),
            "ticket-list" | "list" | "tickets" => Ok(View::TicketList),
            _ => Err(HelpdeskError::UnknownView(s.to_string())),
        }
    }
}

/// Authentication flag plus the requested screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub active_view: View,
}

impl SessionState {
    /// The screen that may actually be shown.
    ///
    /// Without authentication only the login screen is reachable, whatever
    /// `active_view` says.
    pub fn visible_view(&self) -> View {
        if self.is_authenticated {
            self.active_view
        } else {
            View::Login
        }
    }
}

/// Session transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Credentials were accepted
    LoggedIn,
    LoggedOut,
    NavigateTo(View),
}

/// Pure function: apply an action to the session state.
///
/// Navigation is ignored while logged out, and only the ticket screens are
/// valid navigation targets.
pub fn reduce_session(state: SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::LoggedIn => SessionState {
            is_authenticated: true,
            active_view: View::CreateTicket,
        },
        SessionAction::LoggedOut => SessionState {
            is_authenticated: false,
            active_view: View::Login,
        },
        SessionAction::NavigateTo(view) => {
            if !state.is_authenticated || view == View::Login {
                return state;
            }
            SessionState {
                active_view: view,
                ..state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> SessionState {
        reduce_session(SessionState::default(), SessionAction::LoggedIn)
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();
        assert!(!state.is_authenticated);
        assert_eq!(state.active_view, View::Login);
        assert_eq!(state.visible_view(), View::Login);
    }

    #[test]
    fn test_login_opens_create_ticket() {
        let state = logged_in();
        assert!(state.is_authenticated);
        assert_eq!(state.active_view, View::CreateTicket);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let state = reduce_session(logged_in(), SessionAction::NavigateTo(View::TicketList));
        let state = reduce_session(state, SessionAction::LoggedOut);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_navigate_requires_authentication() {
        let state = reduce_session(
            SessionState::default(),
            SessionAction::NavigateTo(View::TicketList),
        );
        assert_eq!(state.active_view, View::Login);
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_navigate_between_ticket_views() {
        let state = reduce_session(logged_in(), SessionAction::NavigateTo(View::TicketList));
        assert_eq!(state.visible_view(), View::TicketList);
        let state = reduce_session(state, SessionAction::NavigateTo(View::CreateTicket));
        assert_eq!(state.visible_view(), View::CreateTicket);
    }

    #[test]
    fn test_navigate_to_login_is_ignored() {
        let state = reduce_session(logged_in(), SessionAction::NavigateTo(View::Login));
        assert_eq!(state, logged_in());
    }

    #[test]
    fn test_visible_view_gates_on_auth() {
        let state = SessionState {
            is_authenticated: false,
            active_view: View::TicketList,
        };
        assert_eq!(state.visible_view(), View::Login);
    }

    #[test]
    fn test_view_parse() {
        assert_eq!("ticket-list".parse::<View>().unwrap(), View::TicketList);
        assert_eq!("create".parse::<View>().unwrap(), View::CreateTicket);
        assert!("settings".parse::<View>().is_err());
    }
}
