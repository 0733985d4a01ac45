//! # Operator Shell
//!
//! The interactive menu loop.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shell::run                                           │
//! │                                                                         │
//! │   ┌──────────────┐                                                      │
//! │   │  print menu  │◄──────────────────────────────────────────┐          │
//! │   └──────┬───────┘                                           │          │
//! │          ▼                                                   │          │
//! │   read option ── EOF or "0" ──► "Exiting..." ──► return      │          │
//! │          │                                                   │          │
//! │          ▼                                                   │          │
//! │   dispatch 1..6 ──► command ──► Ok: render result            │          │
//! │          │                 └──► Err: print message           │          │
//! │          ▼                                                   │          │
//! │   "Press Enter to continue..." ── read line ─────────────────┘          │
//! │                                                                         │
//! │  Only I/O errors on the console streams leave the loop with Err.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its streams so whole sessions can be scripted:
//! ```rust,ignore
//! let input = Cursor::new("4\n\n0\n");
//! let mut shell = Shell::new(input, Vec::new(), Session::default());
//! shell.run()?;
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::commands::{guest, reservation, suite};
use crate::error::CliError;
use crate::render;
use crate::state::{OutputFormat, Session};

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop over an input and an output stream.
pub struct Shell<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Shell {
            input,
            output,
            session,
        }
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// ## Errors
    /// Only console I/O failures; every command error is printed and the
    /// loop continues.
    pub fn run(&mut self) -> Result<(), CliError> {
        info!("Console session started");

        loop {
            self.print_menu()?;

            let flow = match self.read_line() {
                Ok(Some(choice)) => self.dispatch(choice.trim())?,
                Ok(None) => {
                    writeln!(self.output)?;
                    self.say("Exiting...")?;
                    Flow::Exit
                }
                // an undecodable option is just another invalid option
                Err(err) if err.is_recoverable() => self.dispatch("")?,
                Err(err) => return Err(err),
            };
            if flow == Flow::Exit {
                break;
            }

            write!(self.output, "\nPress Enter to continue...")?;
            self.output.flush()?;
            match self.read_line() {
                Ok(None) => {
                    writeln!(self.output)?;
                    break;
                }
                Ok(Some(_)) => {}
                Err(err) if err.is_recoverable() => {}
                Err(err) => return Err(err),
            }
            writeln!(self.output)?;
        }

        info!(
            guests = self.session.registry.guests().len(),
            suites = self.session.registry.suites().len(),
            reservations = self.session.registry.reservations().len(),
            "Console session ended"
        );
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, CliError> {
        debug!(choice, "Menu option");

        let result = match choice {
            "1" => self.register_guest(),
            "2" => self.register_suite(),
            "3" => self.create_reservation(),
            "4" => self.list_guests(),
            "5" => self.list_suites(),
            "6" => self.list_reservations(),
            "0" => {
                self.say("Exiting...")?;
                return Ok(Flow::Exit);
            }
            _ => Err(CliError::validation("Invalid option")),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(err) if err.is_recoverable() => {
                self.report(&err)?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn register_guest(&mut self) -> Result<Flow, CliError> {
        self.section("REGISTER GUEST")?;

        let Some(first_name) = self.prompt("First name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(last_name) = self.prompt("Last name: ")? else {
            return Ok(Flow::Exit);
        };

        let dto = guest::register_guest(&mut self.session.registry, &first_name, &last_name)?;
        match self.session.config.output {
            OutputFormat::Text => {
                let line = format!("Guest {} registered successfully!", dto.full_name);
                self.say(&render::success(&self.session.config, &line))?;
            }
            OutputFormat::Json => self.say(&render::json(&dto)?)?,
        }
        Ok(Flow::Continue)
    }

    fn register_suite(&mut self) -> Result<Flow, CliError> {
        self.section("REGISTER SUITE")?;

        let Some(label) = self.prompt("Suite type: ")? else {
            return Ok(Flow::Exit);
        };
        suite::check_label(&label)?;

        let Some(capacity) = self.prompt("Capacity: ")? else {
            return Ok(Flow::Exit);
        };
        let capacity = suite::parse_capacity(&capacity)?;

        let Some(rate) = self.prompt("Nightly rate: ")? else {
            return Ok(Flow::Exit);
        };
        let rate = suite::parse_nightly_rate(&rate)?;

        let dto = suite::register_suite(&mut self.session.registry, label.trim(), capacity, rate)?;
        match self.session.config.output {
            OutputFormat::Text => {
                let line = format!("Suite {} registered successfully!", dto.label);
                self.say(&render::success(&self.session.config, &line))?;
            }
            OutputFormat::Json => self.say(&render::json(&dto)?)?,
        }
        Ok(Flow::Continue)
    }

    fn create_reservation(&mut self) -> Result<Flow, CliError> {
        reservation::ensure_bookable(&self.session.registry)?;
        self.section("CREATE RESERVATION")?;

        // Guests
        self.say("Available guests:")?;
        let guests = guest::list_guests(&self.session.registry);
        for dto in &guests {
            self.say(&render::guest_line(dto))?;
        }
        let Some(input) = self.prompt("Guest numbers (comma separated, repeats count once): ")? else {
            return Ok(Flow::Exit);
        };
        let selection = reservation::parse_guest_selection(&input, guests.len());
        for entry in &selection.rejected {
            self.say(&format!("Ignoring invalid guest selection: {}", entry))?;
        }
        if selection.is_empty() {
            return Err(CliError::validation("No guests selected"));
        }

        // Suite
        self.say("Available suites:")?;
        let suites = suite::list_suites(&self.session.registry);
        for dto in &suites {
            self.say(&render::suite_line(&self.session.config, dto))?;
        }
        let Some(input) = self.prompt("Suite number: ")? else {
            return Ok(Flow::Exit);
        };
        let suite_position = reservation::parse_suite_selection(&input, suites.len())?;
        reservation::check_capacity(
            &self.session.registry,
            suite_position,
            selection.positions.len(),
        )?;

        // Days
        let Some(input) = self.prompt("Days: ")? else {
            return Ok(Flow::Exit);
        };
        let days = reservation::parse_days(&input)?;

        let dto = reservation::create_reservation(
            &mut self.session.registry,
            days,
            suite_position,
            &selection.positions,
        )?;
        let text = match self.session.config.output {
            OutputFormat::Text => render::reservation_created(&self.session.config, &dto),
            OutputFormat::Json => render::json(&dto)?,
        };
        self.say(&text)?;
        Ok(Flow::Continue)
    }

    fn list_guests(&mut self) -> Result<Flow, CliError> {
        let guests = guest::list_guests(&self.session.registry);
        if self.session.config.output == OutputFormat::Json {
            self.say(&render::json(&guests)?)?;
            return Ok(Flow::Continue);
        }

        self.section("GUESTS")?;
        if guests.is_empty() {
            self.say("No guests registered.")?;
        }
        for dto in &guests {
            self.say(&render::guest_line(dto))?;
        }
        Ok(Flow::Continue)
    }

    fn list_suites(&mut self) -> Result<Flow, CliError> {
        let suites = suite::list_suites(&self.session.registry);
        if self.session.config.output == OutputFormat::Json {
            self.say(&render::json(&suites)?)?;
            return Ok(Flow::Continue);
        }

        self.section("SUITES")?;
        if suites.is_empty() {
            self.say("No suites registered.")?;
        }
        for dto in &suites {
            self.say(&render::suite_line(&self.session.config, dto))?;
        }
        Ok(Flow::Continue)
    }

    fn list_reservations(&mut self) -> Result<Flow, CliError> {
        let reservations = reservation::list_reservations(&self.session.registry)?;
        if self.session.config.output == OutputFormat::Json {
            self.say(&render::json(&reservations)?)?;
            return Ok(Flow::Continue);
        }

        self.section("RESERVATIONS")?;
        if reservations.is_empty() {
            self.say("No reservations registered.")?;
        }
        for dto in &reservations {
            writeln!(self.output)?;
            self.say(&render::reservation_entry(&self.session.config, dto))?;
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Console I/O
    // =========================================================================

    fn print_menu(&mut self) -> Result<(), CliError> {
        let title = render::header(&self.session.config, "LODGE RESERVATIONS");
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "1 - Register guest")?;
        writeln!(self.output, "2 - Register suite")?;
        writeln!(self.output, "3 - Create reservation")?;
        writeln!(self.output, "4 - List guests")?;
        writeln!(self.output, "5 - List suites")?;
        writeln!(self.output, "6 - List reservations")?;
        writeln!(self.output, "0 - Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<(), CliError> {
        let title = render::header(&self.session.config, title);
        writeln!(self.output, "\n{}", title)?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<(), CliError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn report(&mut self, err: &CliError) -> Result<(), CliError> {
        let text = match self.session.config.output {
            OutputFormat::Text => render::error(&self.session.config, err),
            OutputFormat::Json => render::json(err)?,
        };
        self.say(&text)
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its line ending; `None` at end of input.
    ///
    /// A line that is not UTF-8 is consumed and rejected as invalid input.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }

        String::from_utf8(line).map(Some).map_err(|_| {
            warn!("Input line is not valid UTF-8");
            CliError::validation("Input is not valid UTF-8 text")
        })
    }
}
