//! Interactive line-oriented front end
//!
//! Reads one command per line and drives an [`App`]. After every command
//! the visible screen (or the requested output) is printed.

pub mod prompt;

use std::io::{BufRead, Write};

use crate::app::App;
use crate::display::{self, DisplayOptions};
use crate::error::{HelpdeskError, Result};
use crate::form::FormField;
use crate::session::{Credentials, View};
use crate::types::{ProblemType, Ticket};

/// Line input cannot hide keystrokes, so the prompt says so
pub const PASSWORD_PROMPT: &str = "Password (visible as typed): ";

pub const HELP: &str = "\
Commands:
  login [email]          log in (asks for email and password; the password
                         is not masked)
  logout                 log out and discard the unsent draft
  new                    open the ticket form
  list [--json]          show submitted tickets, newest first
  show <n>               show ticket number <n> from the list
  set <field> [value]    fill in a form field
  clear <field>          empty a form field
  types                  list problem types
  submit                 submit the ticket form
  form                   redraw the current screen
  help                   show this help
  quit                   leave (all tickets are lost)

Fields: title, problemType, deviceNumber, contactPerson, phone, description
";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { email: Option<String> },
    Logout,
    Navigate(View),
    ListJson,
    Show(usize),
    Set { field: FormField, value: Option<String> },
    Clear(FormField),
    Types,
    Submit,
    Redraw,
    Help,
    Quit,
}

/// Pure function: parse one input line.
///
/// Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "login" => ShellCommand::Login {
            email: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "logout" => ShellCommand::Logout,
        "new" | "create" => ShellCommand::Navigate(View::CreateTicket),
        "list" | "ls" | "tickets" => match rest {
            "" => ShellCommand::Navigate(View::TicketList),
            "--json" => ShellCommand::ListJson,
            _ => return Err(HelpdeskError::Usage("list [--json]")),
        },
        "show" => {
            let position = rest
                .parse()
                .map_err(|_| HelpdeskError::Usage("show <n>"))?;
            ShellCommand::Show(position)
        }
        "set" => {
            if rest.is_empty() {
                return Err(HelpdeskError::Usage("set <field> [value]"));
            }
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, Some(value.trim().to_string())),
                None => (rest, None),
            };
            ShellCommand::Set {
                field: field.parse()?,
                value,
            }
        }
        "clear" => {
            if rest.is_empty() {
                return Err(HelpdeskError::Usage("clear <field>"));
            }
            ShellCommand::Clear(rest.parse()?)
        }
        "types" => ShellCommand::Types,
        "submit" | "send" => ShellCommand::Submit,
        "form" | "view" | "redraw" => ShellCommand::Redraw,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => return Err(HelpdeskError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

/// Shell bound to an input and an output stream
pub struct Shell<R, W> {
    app: App,
    options: DisplayOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: App, options: DisplayOptions, input: R, output: W) -> Self {
        Self {
            app,
            options,
            input,
            output,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Consume the shell, returning the app and the output stream
    pub fn into_parts(self) -> (App, W) {
        (self.app, self.output)
    }

    /// Run until `quit` or end of input.
    ///
    /// Command errors are reported on the output and the loop continues; only
    /// I/O failures end the session early.
    pub fn run(&mut self) -> Result<()> {
        self.redraw()?;
        loop {
            let prompt = format!("{}> ", self.app.visible_view());
            let Some(line) = prompt::prompt_line(&mut self.input, &mut self.output, &prompt)?
            else {
                writeln!(self.output)?;
                break;
            };
            let outcome = match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => {}
                Err(HelpdeskError::Io(e)) => return Err(HelpdeskError::Io(e)),
                Err(e) => writeln!(self.output, "error: {e}")?,
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Login { email } => self.login(email),
            ShellCommand::Logout => {
                self.app.logout();
                self.redraw()
            }
            ShellCommand::Navigate(view) => {
                self.app.navigate_to(view);
                self.redraw()
            }
            ShellCommand::ListJson => self.print_json(),
            ShellCommand::Show(position) => self.show(position),
            ShellCommand::Set { field, value } => self.set(field, value),
            ShellCommand::Clear(field) => {
                self.app.set_field(field, "")?;
                self.redraw()
            }
            ShellCommand::Types => {
                write!(self.output, "{}", display::render_problem_types())?;
                Ok(())
            }
            ShellCommand::Submit => {
                let ticket = self.app.submit()?;
                writeln!(self.output, "Ticket {} submitted\n", ticket.id)?;
                self.redraw()
            }
            ShellCommand::Redraw => self.redraw(),
            ShellCommand::Help => {
                write!(self.output, "{}", HELP)?;
                Ok(())
            }
            ShellCommand::Quit => Ok(()),
        }
    }

    fn redraw(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.app.render(&self.options))?;
        Ok(())
    }

    fn login(&mut self, email: Option<String>) -> Result<()> {
        let email = match email {
            Some(email) => email,
            None => {
                match prompt::prompt_text(&mut self.input, &mut self.output, "Email", None)? {
                    Some(email) => email,
                    None => return Ok(()),
                }
            }
        };
        let Some(password) =
            prompt::prompt_line(&mut self.input, &mut self.output, PASSWORD_PROMPT)?
        else {
            return Ok(());
        };
        self.app.login(&Credentials::new(email, password))?;
        self.redraw()
    }

    fn set(&mut self, field: FormField, value: Option<String>) -> Result<()> {
        self.app.ensure_authenticated()?;
        let value = match (field, value) {
            (_, Some(value)) => Self::resolve_choice(field, value),
            (FormField::Description, None) => {
                prompt::read_multiline(&mut self.input, &mut self.output)?
            }
            (FormField::ProblemType, None) => {
                let labels: Vec<&str> = ProblemType::ALL.iter().map(|t| t.label()).collect();
                match prompt::select_option(
                    &mut self.input,
                    &mut self.output,
                    "Problem type",
                    &labels,
                )? {
                    Some(index) => labels[index].to_string(),
                    None => return Ok(()),
                }
            }
            (_, None) => return Err(HelpdeskError::Usage("set <field> <value>")),
        };
        self.app.set_field(field, &value)?;
        self.redraw()
    }

    /// A number picks from the problem type list
    fn resolve_choice(field: FormField, value: String) -> String {
        if field != FormField::ProblemType {
            return value;
        }
        value
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ProblemType::ALL.get(i))
            .map(|t| t.label().to_string())
            .unwrap_or(value)
    }

    fn show(&mut self, position: usize) -> Result<()> {
        self.app.ensure_authenticated()?;
        let detail = display::render_detail(self.app.ticket(position)?, &self.options);
        writeln!(self.output, "{}", detail)?;
        Ok(())
    }

    fn print_json(&mut self) -> Result<()> {
        self.app.ensure_authenticated()?;
        let tickets: Vec<&Ticket> = self.app.store().all().collect();
        let json = serde_json::to_string_pretty(&tickets)?;
        writeln!(self.output, "{}", json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_set_with_value() {
        assert_eq!(
            parse_command("set title  Printer broken ").unwrap(),
            Some(ShellCommand::Set {
                field: FormField::Title,
                value: Some("Printer broken".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_set_without_value() {
        assert_eq!(
            parse_command("set description").unwrap(),
            Some(ShellCommand::Set {
                field: FormField::Description,
                value: None,
            })
        );
    }

    #[test]
    fn test_parse_set_unknown_field() {
        assert!(matches!(
            parse_command("set email x"),
            Err(HelpdeskError::UnknownField(_))
        ));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            parse_command("list").unwrap(),
            Some(ShellCommand::Navigate(View::TicketList))
        );
        assert_eq!(parse_command("list --json").unwrap(), Some(ShellCommand::ListJson));
        assert_eq!(
            parse_command("NEW").unwrap(),
            Some(ShellCommand::Navigate(View::CreateTicket))
        );
    }

    #[test]
    fn test_parse_show() {
        assert_eq!(parse_command("show 2").unwrap(), Some(ShellCommand::Show(2)));
        assert!(matches!(
            parse_command("show two"),
            Err(HelpdeskError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_login_email() {
        assert_eq!(
            parse_command("login me@example.com").unwrap(),
            Some(ShellCommand::Login {
                email: Some("me@example.com".to_string())
            })
        );
        assert_eq!(
            parse_command("login").unwrap(),
            Some(ShellCommand::Login { email: None })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_command("frobnicate"),
            Err(HelpdeskError::UnknownCommand(w)) if w == "frobnicate"
        ));
    }

    #[test]
    fn test_numeric_problem_type_choice() {
        type S = Shell<std::io::Empty, Vec<u8>>;
        assert_eq!(
            S::resolve_choice(FormField::ProblemType, "3".to_string()),
            "Network issue"
        );
        assert_eq!(S::resolve_choice(FormField::ProblemType, "9".to_string()), "9");
        assert_eq!(S::resolve_choice(FormField::Title, "3".to_string()), "3");
    }
}
