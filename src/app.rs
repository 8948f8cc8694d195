//! Application state: the session, the ticket store and the ticket form.
//!
//! `App` is what a front end talks to. It receives plain callbacks
//! (`login`, `logout`, `navigate_to`, `set_field`, `submit`) and exposes
//! plain data back; it knows nothing about how anything is drawn.

use jiff::Timestamp;

use crate::config::Config;
use crate::demo;
use crate::display::{self, DisplayOptions};
use crate::error::{HelpdeskError, Result};
use crate::form::{Draft, FormField, IdSequence, TicketForm};
use crate::session::{
    AcceptAll, Authenticator, Credentials, SessionAction, SessionState, View, reduce_session,
};
use crate::store::TicketStore;
use crate::types::Ticket;

pub struct App {
    session: SessionState,
    store: TicketStore,
    form: TicketForm,
    authenticator: Box<dyn Authenticator>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(IdSequence::default())
    }
}

impl App {
    pub fn new(ids: IdSequence) -> Self {
        Self {
            session: SessionState::default(),
            store: TicketStore::new(),
            form: TicketForm::new(ids),
            authenticator: Box::new(AcceptAll),
        }
    }

    /// Build the app described by a configuration, seeding sample tickets if asked
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut app = Self::new(IdSequence::new(config.id_prefix.trim()));
        if config.demo_tickets {
            app.seed_demo()?;
        }
        Ok(app)
    }

    /// Replace the credential check
    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Box::new(authenticator);
        self
    }

    pub fn seed_demo(&mut self) -> Result<()> {
        demo::seed(&mut self.store, &mut self.form)
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn active_view(&self) -> View {
        self.session.active_view
    }

    /// The screen a front end should show right now
    pub fn visible_view(&self) -> View {
        self.session.visible_view()
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    fn dispatch(&mut self, action: SessionAction) {
        let next = reduce_session(self.session, action);
        if next != self.session {
            tracing::debug!(
                from = %self.session.active_view,
                to = %next.active_view,
                authenticated = next.is_authenticated,
                "session transition"
            );
        }
        self.session = next;
    }

    /// Check the credentials and open the ticket form.
    ///
    /// A refused login leaves the session logged out.
    pub fn login(&mut self, credentials: &Credentials) -> Result<()> {
        if let Err(e) = self.authenticator.authenticate(credentials) {
            tracing::warn!(email = %credentials.email, "login refused: {e}");
            return Err(e);
        }
        self.dispatch(SessionAction::LoggedIn);
        tracing::info!(email = %credentials.email, "logged in");
        Ok(())
    }

    /// Return to the login screen and discard any unsent draft.
    ///
    /// Submitted tickets stay in the store.
    pub fn logout(&mut self) {
        self.dispatch(SessionAction::LoggedOut);
        if !self.form.draft().is_empty() {
            tracing::debug!("discarding unsent draft on logout");
        }
        self.form.discard();
        tracing::info!("logged out");
    }

    /// Switch between the ticket screens; ignored while logged out
    pub fn navigate_to(&mut self, view: View) {
        if !self.session.is_authenticated {
            tracing::debug!(target_view = %view, "navigation ignored while logged out");
        }
        self.dispatch(SessionAction::NavigateTo(view));
    }

    /// `Err(NotAuthenticated)` unless logged in
    pub fn ensure_authenticated(&self) -> Result<()> {
        if self.session.is_authenticated {
            Ok(())
        } else {
            Err(HelpdeskError::NotAuthenticated)
        }
    }

    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<()> {
        self.ensure_authenticated()?;
        self.form.set_field(field, value)
    }

    /// Submit the draft stamped with the current time
    pub fn submit(&mut self) -> Result<Ticket> {
        self.submit_at(Timestamp::now())
    }

    /// Submit the draft with an explicit creation time.
    ///
    /// On success the ticket list becomes the active view.
    pub fn submit_at(&mut self, now: Timestamp) -> Result<Ticket> {
        self.ensure_authenticated()?;
        let ticket = self.form.submit(&mut self.store, now)?;
        self.dispatch(SessionAction::NavigateTo(View::TicketList));
        Ok(ticket)
    }

    /// Ticket at a 1-based list position
    pub fn ticket(&self, position: usize) -> Result<&Ticket> {
        position
            .checked_sub(1)
            .and_then(|index| self.store.get(index))
            .ok_or(HelpdeskError::TicketNotFound(position))
    }

    /// Text of the visible screen
    pub fn render(&self, options: &DisplayOptions) -> String {
        match self.visible_view() {
            View::Login => LOGIN_SCREEN.to_string(),
            View::CreateTicket => display::render_draft(self.form.draft()),
            View::TicketList => display::render_list(self.store.all(), options),
        }
    }
}

const LOGIN_SCREEN: &str = "Technical support\nLog in to submit tickets\n";
