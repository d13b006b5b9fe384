//! Line-driven shell over the flow controller.
//!
//! One command per input line; after each command the current screen is
//! printed. Cooldown ticks are applied on the same task as input, so screen
//! state is only ever touched from one place.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::str::FromStr;

use cams_core::{
    AccountServiceTrait, Advisory, CooldownTick, DomainError, FlowController,
    ImageryServiceTrait, Screen, ScreenState, TickOutcome,
};
use cams_shared::Coordinate;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::AppError;
use crate::i18n::{self, format_message, MESSAGES};

/// Form fields addressable with `set` and `toggle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Confirm,
    ApiKey,
    Code,
    Name,
    Crop,
}

impl FromStr for Field {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Field::Email),
            "password" | "new-password" => Ok(Field::Password),
            "confirm" | "confirm-password" => Ok(Field::Confirm),
            "api-key" | "apikey" | "key" => Ok(Field::ApiKey),
            "code" => Ok(Field::Code),
            "name" => Ok(Field::Name),
            "crop" => Ok(Field::Crop),
            other => Err(CommandError::UnknownField(other.to_string())),
        }
    }
}

/// Screens reachable with `open`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Register,
    Forgot,
    AddProject,
}

impl FromStr for Target {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "register" => Ok(Target::Register),
            "forgot" | "forgot-password" => Ok(Target::Forgot),
            "add-project" | "project" => Ok(Target::AddProject),
            other => Err(CommandError::UnknownTarget(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { field: Field, value: String },
    Toggle(Field),
    Submit,
    Send,
    Back,
    Open(Target),
    Point(Coordinate),
    Undo,
    Clear,
    Start(NaiveDate),
    End(NaiveDate),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Unknown screen '{0}'")]
    UnknownTarget(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("'{0}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = split_word(line);

        match word.to_lowercase().as_str() {
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                Ok(Command::Set {
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "toggle" => {
                let (field, _) = split_word(rest);
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                Ok(Command::Toggle(field.parse()?))
            }
            "submit" => Ok(Command::Submit),
            "send" => Ok(Command::Send),
            "back" => Ok(Command::Back),
            "open" => {
                let (target, _) = split_word(rest);
                if target.is_empty() {
                    return Err(CommandError::MissingArgument("screen"));
                }
                Ok(Command::Open(target.parse()?))
            }
            "point" => {
                let (lat, rest) = split_word(rest);
                let (lon, _) = split_word(rest);
                if lat.is_empty() || lon.is_empty() {
                    return Err(CommandError::MissingArgument("latitude and longitude"));
                }
                Ok(Command::Point(Coordinate::new(
                    parse_number(lat)?,
                    parse_number(lon)?,
                )))
            }
            "undo" => Ok(Command::Undo),
            "clear" => Ok(Command::Clear),
            "start" => Ok(Command::Start(parse_date(rest)?)),
            "end" => Ok(Command::End(parse_date(rest)?)),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], s[at..].trim()),
        None => (s, ""),
    }
}

fn parse_number(s: &str) -> Result<f64, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CommandError::MissingArgument("date"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CommandError::InvalidDate(s.to_string()))
}

/// Picked calendar dates are taken at local noon in the reference zone
fn date_to_instant(date: NaiveDate, zone: Tz) -> Option<DateTime<Utc>> {
    let noon = date.and_hms_opt(12, 0, 0)?;
    zone.from_local_datetime(&noon)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

fn picked_date<A, I>(controller: &FlowController<A, I>, date: NaiveDate) -> Result<DateTime<Utc>, String>
where
    A: AccountServiceTrait,
    I: ImageryServiceTrait,
{
    date_to_instant(date, controller.settings().reference_tz)
        .ok_or_else(|| CommandError::InvalidDate(date.to_string()).to_string())
}

/// Result of handling one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellStep {
    Continue(String),
    Quit,
}

pub struct Shell<A, I>
where
    A: AccountServiceTrait,
    I: ImageryServiceTrait,
{
    controller: FlowController<A, I>,
}

impl<A, I> Shell<A, I>
where
    A: AccountServiceTrait,
    I: ImageryServiceTrait,
{
    pub fn new(controller: FlowController<A, I>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &FlowController<A, I> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FlowController<A, I> {
        &mut self.controller
    }

    /// Read commands until `quit` or end of input, applying cooldown ticks
    /// as they arrive.
    pub async fn run<R, W>(
        &mut self,
        input: R,
        mut output: W,
        mut ticks: UnboundedReceiver<CooldownTick>,
    ) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        write_block(&mut output, &self.render()).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("Input closed, leaving shell");
                        break;
                    };
                    match self.handle_line(&line).await {
                        ShellStep::Continue(text) => write_block(&mut output, &text).await?,
                        ShellStep::Quit => break,
                    }
                }
                Some(tick) = ticks.recv() => {
                    if let Some(text) = self.handle_tick(tick) {
                        write_block(&mut output, &text).await?;
                    }
                }
            }
        }

        output.flush().await?;
        Ok(())
    }

    /// Apply a tick; returns text to print when the cooldown finished
    pub fn handle_tick(&mut self, tick: CooldownTick) -> Option<String> {
        match self.controller.apply_tick(tick) {
            TickOutcome::Finished => Some(format!(
                "{}\n{}",
                MESSAGES.shell_text("resend_ready"),
                self.render()
            )),
            TickOutcome::Counting(_) | TickOutcome::Ignored => None,
        }
    }

    pub async fn handle_line(&mut self, line: &str) -> ShellStep {
        if line.trim().is_empty() {
            return ShellStep::Continue(String::new());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                return ShellStep::Continue(format!("! {}\n{}", e, MESSAGES.shell_text("help")))
            }
        };
        if command == Command::Quit {
            return ShellStep::Quit;
        }

        let status = match self.apply(command).await {
            Ok(Some(message)) => format!("* {}\n", message),
            Ok(None) => String::new(),
            Err(message) => format!("! {}\n", message),
        };
        ShellStep::Continue(format!("{}{}", status, self.render()))
    }

    /// Apply one command. `Ok` carries an optional confirmation, `Err` the
    /// inline message for a failed action.
    pub async fn apply(&mut self, command: Command) -> Result<Option<String>, String> {
        if command == Command::Submit {
            return self.submit().await;
        }

        let c = &mut self.controller;
        match command {
            Command::Set { field, value } => set_field(c.current_mut(), field, value),
            Command::Toggle(field) => toggle_field(c.current_mut(), field),
            Command::Submit => Ok(None),
            Command::Send => {
                c.send_reset_code().await.map_err(|e| i18n::error_text(&e))?;
                Ok(Some(MESSAGES.shell_text("code_sent")))
            }
            Command::Back => {
                c.back().map_err(|e| i18n::error_text(&e))?;
                Ok(None)
            }
            Command::Open(target) => {
                let result = match target {
                    Target::Register => c.open_register(),
                    Target::Forgot => c.open_forgot_password(),
                    Target::AddProject => c.open_add_project(),
                };
                result.map_err(|e| i18n::error_text(&e))?;
                Ok(None)
            }
            Command::Point(point) => {
                let map = c
                    .map_selection_mut()
                    .map_err(|e| i18n::error_text(&e.into()))?;
                if map.add_point(point) {
                    Ok(None)
                } else {
                    let mut params = HashMap::new();
                    params.insert("point", point.to_string());
                    Err(format_message(
                        &MESSAGES.shell_text("point_rejected"),
                        &params,
                    ))
                }
            }
            Command::Undo => {
                c.map_selection_mut()
                    .map_err(|e| i18n::error_text(&e.into()))?
                    .undo_last_point();
                Ok(None)
            }
            Command::Clear => {
                c.map_selection_mut()
                    .map_err(|e| i18n::error_text(&e.into()))?
                    .clear();
                Ok(None)
            }
            Command::Start(date) => {
                let instant = picked_date(c, date)?;
                c.set_project_start_date(instant)
                    .map_err(|e| i18n::error_text(&e))?;
                Ok(None)
            }
            Command::End(date) => {
                let instant = picked_date(c, date)?;
                c.set_project_end_date(instant)
                    .map_err(|e| i18n::error_text(&e))?;
                Ok(None)
            }
            Command::Show => Ok(None),
            Command::Help => Ok(Some(MESSAGES.shell_text("help"))),
            Command::Quit => Ok(None),
        }
    }

    async fn submit(&mut self) -> Result<Option<String>, String> {
        let c = &mut self.controller;
        let result: Result<Option<String>, DomainError> = match c.current_screen() {
            Screen::Login => c.submit_login().map(|_| None),
            Screen::Register => c
                .submit_registration()
                .await
                .map(|_| Some(MESSAGES.shell_text("account_created"))),
            Screen::ForgotPassword => {
                // Submit verifies once a code was entered, otherwise it sends one
                let has_code = c
                    .forgot_password()
                    .map_or(false, |screen| screen.can_submit_code());
                if has_code {
                    c.submit_reset_code().await.map(|_| None)
                } else {
                    c.send_reset_code()
                        .await
                        .map(|_| Some(MESSAGES.shell_text("code_sent")))
                }
            }
            Screen::ChangePassword => c
                .submit_new_password()
                .await
                .map(|_| Some(MESSAGES.shell_text("password_changed"))),
            Screen::ProjectList => c.open_add_project().map(|_| None),
            Screen::AddProject => c.submit_project().map(|_| None),
            Screen::MapSelection => c.confirm_area().await.map(|job| {
                let mut params = HashMap::new();
                params.insert("job", job.id.to_string());
                Some(format_message(
                    &MESSAGES.shell_text("imagery_requested"),
                    &params,
                ))
            }),
        };
        result.map_err(|e| i18n::error_text(&e))
    }

    /// Text rendering of the current screen
    pub fn render(&self) -> String {
        let mut out = String::new();
        let screen = self.controller.current_screen();
        let _ = writeln!(out, "== {} ==", screen.title());

        match self.controller.current() {
            ScreenState::Login(s) => {
                let _ = writeln!(out, "email: {}", s.email());
                let _ = writeln!(out, "password: {}", s.password().display());
                render_advisories(&mut out, &s.advisories());
                render_gate(&mut out, "Login", s.can_submit());
            }
            ScreenState::Register(s) => {
                let _ = writeln!(out, "email: {}", s.email());
                let _ = writeln!(out, "password: {}", s.password().display());
                let _ = writeln!(out, "confirm: {}", s.confirm_password().display());
                let _ = writeln!(out, "api-key: {}", s.api_key());
                render_advisories(&mut out, &s.advisories());
                if let Some(error) = s.submit_error() {
                    let _ = writeln!(out, "! {}", i18n::auth_error_text(error));
                }
                render_gate(&mut out, "Register", s.can_submit());
            }
            ScreenState::ForgotPassword(s) => {
                let _ = writeln!(out, "email: {}", s.email());
                render_advisories(&mut out, &s.advisories());
                render_gate(&mut out, &s.button_label(), s.can_send_code());
                if s.session().code_sent() {
                    let _ = writeln!(out, "code: {}", s.verification_code());
                    render_gate(&mut out, "Submit", s.can_submit_code());
                }
                if let Some(error) = s.submit_error() {
                    let _ = writeln!(out, "! {}", i18n::auth_error_text(error));
                }
            }
            ScreenState::ChangePassword(s) => {
                let _ = writeln!(out, "password: {}", s.new_password().display());
                let _ = writeln!(out, "confirm: {}", s.confirm_password().display());
                render_advisories(&mut out, &s.advisories());
                if let Some(error) = s.submit_error() {
                    let _ = writeln!(out, "! {}", i18n::auth_error_text(error));
                }
                render_gate(&mut out, "Change Password", s.can_submit());
            }
            ScreenState::ProjectList(s) => {
                let zone = self.controller.settings().reference_tz;
                if s.is_empty() {
                    let _ = writeln!(out, "(no projects yet)");
                }
                for project in s.projects() {
                    let _ = writeln!(
                        out,
                        "- {} ({}) {} to {}",
                        project.name,
                        project.crop_name,
                        project.start_date.with_timezone(&zone).date_naive(),
                        project.end_date.with_timezone(&zone).date_naive()
                    );
                }
                render_gate(&mut out, "+ Add New Project", true);
            }
            ScreenState::AddProject(s) => {
                let zone = self.controller.settings().reference_tz;
                let _ = writeln!(out, "name: {}", s.name());
                let _ = writeln!(out, "crop: {}", s.crop_name());
                let _ = writeln!(
                    out,
                    "start: {}",
                    s.start_date().with_timezone(&zone).date_naive()
                );
                let _ = writeln!(out, "end: {}", s.end_date().with_timezone(&zone).date_naive());
                render_advisories(&mut out, &s.advisories());
                render_gate(&mut out, "Continue to Map", s.can_submit());
            }
            ScreenState::MapSelection(s) => {
                let region = s.region();
                let _ = writeln!(
                    out,
                    "project: {} ({})",
                    s.project().name,
                    s.project().crop_name
                );
                let _ = writeln!(
                    out,
                    "region: {} span {:.3}x{:.3}",
                    region.center, region.span.latitude_delta, region.span.longitude_delta
                );
                for (index, point) in s.selection().points().iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}", index + 1, point);
                }
                if let Some(job) = s.job() {
                    let _ = writeln!(out, "job: {} at {}", job.id, job.submitted_at.to_rfc3339());
                }
                if let Some(error) = s.submit_error() {
                    let _ = writeln!(out, "! {}", i18n::imagery_error_text(error));
                }
                render_gate(&mut out, "Confirm Selection", s.can_confirm());
            }
        }
        out
    }
}

fn set_field(state: &mut ScreenState, field: Field, value: String) -> Result<Option<String>, String> {
    match (state, field) {
        (ScreenState::Login(s), Field::Email) => s.set_email(value),
        (ScreenState::Login(s), Field::Password) => s.set_password(value),
        (ScreenState::Register(s), Field::Email) => s.set_email(value),
        (ScreenState::Register(s), Field::Password) => s.set_password(value),
        (ScreenState::Register(s), Field::Confirm) => s.set_confirm_password(value),
        (ScreenState::Register(s), Field::ApiKey) => s.set_api_key(value),
        (ScreenState::ForgotPassword(s), Field::Email) => s.set_email(value),
        (ScreenState::ForgotPassword(s), Field::Code) => s.set_verification_code(value),
        (ScreenState::ChangePassword(s), Field::Password) => s.set_new_password(value),
        (ScreenState::ChangePassword(s), Field::Confirm) => s.set_confirm_password(value),
        (ScreenState::AddProject(s), Field::Name) => s.set_name(value),
        (ScreenState::AddProject(s), Field::Crop) => s.set_crop_name(value),
        (_, field) => return Err(unknown_field(field)),
    }
    Ok(None)
}

fn toggle_field(state: &mut ScreenState, field: Field) -> Result<Option<String>, String> {
    match (state, field) {
        (ScreenState::Login(s), Field::Password) => s.toggle_password_visibility(),
        (ScreenState::Register(s), Field::Password) => s.toggle_password_visibility(),
        (ScreenState::Register(s), Field::Confirm) => s.toggle_confirm_visibility(),
        (ScreenState::ChangePassword(s), Field::Password) => s.toggle_new_password_visibility(),
        (ScreenState::ChangePassword(s), Field::Confirm) => s.toggle_confirm_visibility(),
        (_, field) => return Err(unknown_field(field)),
    }
    Ok(None)
}

fn unknown_field(field: Field) -> String {
    let mut params = HashMap::new();
    params.insert("field", format!("{:?}", field).to_lowercase());
    format_message(&MESSAGES.shell_text("unknown_field"), &params)
}

fn render_advisories(out: &mut String, advisories: &[Advisory]) {
    for advisory in advisories {
        let _ = writeln!(out, "! {}", i18n::advisory_text(advisory));
    }
}

fn render_gate(out: &mut String, label: &str, enabled: bool) {
    let state = if enabled { "enabled" } else { "disabled" };
    let _ = writeln!(out, "[{}] {}", label, state);
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            "set name North field 2".parse::<Command>().unwrap(),
            Command::Set {
                field: Field::Name,
                value: "North field 2".to_string()
            }
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        assert_eq!(
            "set email".parse::<Command>().unwrap(),
            Command::Set {
                field: Field::Email,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_point_and_dates() {
        assert_eq!(
            "point 37.77 -122.42".parse::<Command>().unwrap(),
            Command::Point(Coordinate::new(37.77, -122.42))
        );
        assert_eq!(
            "start 2024-01-05".parse::<Command>().unwrap(),
            Command::Start(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
        assert_eq!(
            "end 2024-13-01".parse::<Command>(),
            Err(CommandError::InvalidDate("2024-13-01".to_string()))
        );
        assert_eq!(
            "point 37.77".parse::<Command>(),
            Err(CommandError::MissingArgument("latitude and longitude"))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "fly away".parse::<Command>(),
            Err(CommandError::Unknown("fly".to_string()))
        );
        assert_eq!(
            "open settings".parse::<Command>(),
            Err(CommandError::UnknownTarget("settings".to_string()))
        );
        assert_eq!(
            "toggle colour".parse::<Command>(),
            Err(CommandError::UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_date_to_instant_uses_local_noon() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let instant = date_to_instant(date, chrono_tz::America::Chicago).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap());
    }
}
