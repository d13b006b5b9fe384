//! Flow controller implementation

use std::sync::Arc;

use cams_shared::email::mask_email;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::value_objects::{JobHandle, TickOutcome};
use crate::errors::{DomainResult, NavigationError};
use crate::services::account::AccountServiceTrait;
use crate::services::clock::Clock;
use crate::services::cooldown::CooldownTick;
use crate::services::imagery::ImageryServiceTrait;
use crate::services::navigation::{NavigationStack, Routable, Screen};
use crate::services::screens::{
    AddProjectScreen, ChangePasswordScreen, ForgotPasswordScreen, LoginScreen,
    MapSelectionScreen, ProjectListScreen, RegisterScreen, ScreenState,
};

use super::{AppState, FlowSettings};

// Typed access to the top of the stack
macro_rules! screen_accessors {
    ($($variant:ident => $ty:ty, $get:ident, $get_mut:ident;)*) => {
        $(
            pub fn $get(&self) -> Result<&$ty, NavigationError> {
                match self.stack.top() {
                    ScreenState::$variant(screen) => Ok(screen),
                    other => Err(NavigationError::WrongScreen {
                        expected: Screen::$variant,
                        actual: other.screen(),
                    }),
                }
            }

            pub fn $get_mut(&mut self) -> Result<&mut $ty, NavigationError> {
                match self.stack.top_mut() {
                    ScreenState::$variant(screen) => Ok(screen),
                    other => Err(NavigationError::WrongScreen {
                        expected: Screen::$variant,
                        actual: other.screen(),
                    }),
                }
            }
        )*
    };
}

/// Drives the screens of the client.
///
/// Owns the navigation stack (and therefore every live screen), the
/// process-wide [`AppState`], and the sending half of the cooldown tick
/// channel. Callers feed ticks from the returned receiver back through
/// [`FlowController::apply_tick`] on the same task that handles input.
pub struct FlowController<A, I>
where
    A: AccountServiceTrait,
    I: ImageryServiceTrait,
{
    /// Account backend
    account_service: Arc<A>,
    /// Satellite imagery backend
    imagery_service: Arc<I>,
    /// Source of "now" for date checks
    clock: Arc<dyn Clock>,
    settings: FlowSettings,
    state: AppState,
    stack: NavigationStack<ScreenState>,
    tick_sender: UnboundedSender<CooldownTick>,
}

impl<A, I> FlowController<A, I>
where
    A: AccountServiceTrait,
    I: ImageryServiceTrait,
{
    /// Create a controller sitting on the root screen
    ///
    /// # Arguments
    ///
    /// * `account_service` - Backend for registration and password reset
    /// * `imagery_service` - Backend for satellite imagery requests
    /// * `clock` - Source of the current time
    /// * `settings` - Cooldown, time zone and map settings
    ///
    /// Returns the controller and the receiver its cooldown ticks arrive on.
    pub fn new(
        account_service: Arc<A>,
        imagery_service: Arc<I>,
        clock: Arc<dyn Clock>,
        settings: FlowSettings,
    ) -> (Self, UnboundedReceiver<CooldownTick>) {
        let (tick_sender, tick_receiver) = mpsc::unbounded_channel();
        let state = AppState::new();
        let root = match state.root_screen() {
            Screen::Login => ScreenState::Login(LoginScreen::new()),
            other => {
                tracing::warn!(screen = %other, "Unsupported root screen, using Login");
                ScreenState::Login(LoginScreen::new())
            }
        };

        let controller = Self {
            account_service,
            imagery_service,
            clock,
            settings,
            state,
            stack: NavigationStack::new(root),
            tick_sender,
        };
        (controller, tick_receiver)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    pub fn stack(&self) -> &NavigationStack<ScreenState> {
        &self.stack
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.current_screen()
    }

    pub fn current(&self) -> &ScreenState {
        self.stack.top()
    }

    /// Mutable access to the top screen's form state
    pub fn current_mut(&mut self) -> &mut ScreenState {
        self.stack.top_mut()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    screen_accessors! {
        Login => LoginScreen, login, login_mut;
        Register => RegisterScreen, register, register_mut;
        ForgotPassword => ForgotPasswordScreen, forgot_password, forgot_password_mut;
        ChangePassword => ChangePasswordScreen, change_password, change_password_mut;
        ProjectList => ProjectListScreen, project_list, project_list_mut;
        AddProject => AddProjectScreen, add_project, add_project_mut;
        MapSelection => MapSelectionScreen, map_selection, map_selection_mut;
    }

    /// Leave the current screen, dropping its state
    pub fn back(&mut self) -> DomainResult<Screen> {
        let left = self.stack.pop()?;
        tracing::debug!(
            from = %left.screen(),
            to = %self.stack.current_screen(),
            "Navigated back"
        );
        Ok(self.stack.current_screen())
    }

    // ---- Login ----

    pub fn open_register(&mut self) -> DomainResult<()> {
        self.login()?;
        self.stack.push(ScreenState::Register(RegisterScreen::new()))?;
        Ok(())
    }

    pub fn open_forgot_password(&mut self) -> DomainResult<()> {
        self.login()?;
        let screen = ForgotPasswordScreen::new(self.settings.resend_cooldown_seconds);
        self.stack.push(ScreenState::ForgotPassword(screen))?;
        Ok(())
    }

    /// Proceed to the project list when both credentials pass
    pub fn submit_login(&mut self) -> DomainResult<()> {
        let screen = self.login()?;
        if !screen.can_submit() {
            return Err(NavigationError::GateClosed {
                screen: Screen::Login,
            }
            .into());
        }

        tracing::info!(
            email = %mask_email(screen.email()),
            event = "login_submitted",
            "Login accepted"
        );
        self.stack
            .push(ScreenState::ProjectList(ProjectListScreen::new()))?;
        Ok(())
    }

    // ---- Register ----

    /// Create the account and return to Login on success
    pub async fn submit_registration(&mut self) -> DomainResult<()> {
        let form = {
            let screen = self.register()?;
            if !screen.can_submit() {
                return Err(NavigationError::GateClosed {
                    screen: Screen::Register,
                }
                .into());
            }
            screen.form()
        };
        let masked = mask_email(&form.credentials.email);

        let result = self
            .account_service
            .register(
                &form.credentials.email,
                &form.credentials.password,
                &form.api_key,
            )
            .await;

        match result {
            Ok(()) => {
                tracing::info!(email = %masked, event = "account_registered", "Account created");
                self.stack.pop()?;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    email = %masked,
                    error = %e,
                    code = e.code(),
                    event = "registration_failed",
                    "Registration failed"
                );
                self.register_mut()?.set_submit_error(e.clone());
                Err(e.into())
            }
        }
    }

    // ---- Forgot password ----

    /// Request a reset code and start the resend cooldown.
    ///
    /// The cooldown only starts once the backend accepted the request.
    pub async fn send_reset_code(&mut self) -> DomainResult<()> {
        let email = {
            let screen = self.forgot_password()?;
            if !screen.can_send_code() {
                return Err(NavigationError::GateClosed {
                    screen: Screen::ForgotPassword,
                }
                .into());
            }
            screen.email().to_string()
        };
        let masked = mask_email(&email);

        match self.account_service.request_password_reset_code(&email).await {
            Ok(()) => {
                let period = self.settings.tick_interval;
                let sender = self.tick_sender.clone();
                let screen = self.forgot_password_mut()?;
                screen.begin_cooldown(period, sender);
                tracing::info!(
                    email = %masked,
                    cooldown_seconds = screen.seconds_remaining(),
                    event = "reset_code_requested",
                    "Reset code sent"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    email = %masked,
                    error = %e,
                    code = e.code(),
                    event = "reset_code_request_failed",
                    "Reset code request failed"
                );
                self.forgot_password_mut()?.set_submit_error(e.clone());
                Err(e.into())
            }
        }
    }

    /// Verify the entered code and move on to choosing a new password
    pub async fn submit_reset_code(&mut self) -> DomainResult<()> {
        let (email, code) = {
            let screen = self.forgot_password_mut()?;
            if !screen.can_submit_code() {
                return Err(NavigationError::GateClosed {
                    screen: Screen::ForgotPassword,
                }
                .into());
            }
            screen.mark_awaiting_verification();
            (
                screen.email().to_string(),
                screen.verification_code().to_string(),
            )
        };
        let masked = mask_email(&email);

        match self.account_service.verify_reset_code(&email, &code).await {
            Ok(()) => {
                self.forgot_password_mut()?.mark_verified();
                tracing::info!(email = %masked, event = "reset_code_verified", "Reset code verified");
                self.stack
                    .push(ScreenState::ChangePassword(ChangePasswordScreen::new()))?;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    email = %masked,
                    code = e.code(),
                    event = "reset_code_rejected",
                    "Reset code verification failed"
                );
                self.forgot_password_mut()?
                    .mark_verification_failed(e.clone());
                Err(e.into())
            }
        }
    }

    /// Apply a cooldown tick to the forgot-password screen, wherever it sits
    /// in the stack. Ticks for a screen that is gone are ignored.
    pub fn apply_tick(&mut self, tick: CooldownTick) -> TickOutcome {
        let outcome = match self.stack.find_mut(Screen::ForgotPassword) {
            Some(ScreenState::ForgotPassword(screen)) => screen.apply_tick(tick),
            _ => TickOutcome::Ignored,
        };

        match outcome {
            TickOutcome::Finished => tracing::debug!(
                generation = tick.generation,
                event = "resend_cooldown_finished",
                "Resend available again"
            ),
            TickOutcome::Ignored => tracing::trace!(
                generation = tick.generation,
                "Dropped stale cooldown tick"
            ),
            TickOutcome::Counting(_) => {}
        }
        outcome
    }

    // ---- Change password ----

    /// Persist the new password, mark the session logged out and unwind to
    /// Login.
    pub async fn submit_new_password(&mut self) -> DomainResult<()> {
        let new_password = {
            let screen = self.change_password()?;
            if !screen.can_submit() {
                return Err(NavigationError::GateClosed {
                    screen: Screen::ChangePassword,
                }
                .into());
            }
            screen.new_password().value().to_string()
        };

        match self.account_service.change_password(&new_password).await {
            Ok(()) => {
                self.state.mark_logged_out();
                let dropped = self.stack.pop_to(Screen::Login)?;
                tracing::info!(
                    screens_closed = dropped.len(),
                    event = "password_changed",
                    "Password changed, returning to login"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    code = e.code(),
                    event = "password_change_failed",
                    "Password change failed"
                );
                self.change_password_mut()?.set_submit_error(e.clone());
                Err(e.into())
            }
        }
    }

    // ---- Projects ----

    pub fn open_add_project(&mut self) -> DomainResult<()> {
        self.project_list()?;
        let screen = AddProjectScreen::new(self.clock.now(), self.settings.reference_tz);
        self.stack.push(ScreenState::AddProject(screen))?;
        Ok(())
    }

    pub fn set_project_start_date(&mut self, start: DateTime<Utc>) -> DomainResult<()> {
        let now = self.clock.now();
        self.add_project_mut()?.set_start_date(start, now);
        Ok(())
    }

    pub fn set_project_end_date(&mut self, end: DateTime<Utc>) -> DomainResult<()> {
        let now = self.clock.now();
        self.add_project_mut()?.set_end_date(end, now);
        Ok(())
    }

    /// Validate the project, add or update it in the session list and open the map
    pub fn submit_project(&mut self) -> DomainResult<()> {
        let now = self.clock.now();
        let project = {
            let screen = self.add_project_mut()?;
            if !screen.can_submit() {
                return Err(NavigationError::GateClosed {
                    screen: Screen::AddProject,
                }
                .into());
            }
            screen.submit(now)?
        };

        let created = match self.stack.find_mut(Screen::ProjectList) {
            Some(ScreenState::ProjectList(list)) => list.upsert(project.clone()),
            _ => true,
        };
        if created {
            tracing::info!(
                project_id = %project.id,
                duration_days = project.duration_days(),
                event = "project_created",
                "Project created"
            );
        } else {
            tracing::info!(
                project_id = %project.id,
                duration_days = project.duration_days(),
                event = "project_updated",
                "Project updated"
            );
        }

        let map = MapSelectionScreen::new(project, &self.settings.map);
        self.stack.push(ScreenState::MapSelection(map))?;
        Ok(())
    }

    // ---- Map ----

    /// Request imagery for the drawn area over the project's date range
    pub async fn confirm_area(&mut self) -> DomainResult<JobHandle> {
        let (points, start, end) = {
            let screen = self.map_selection()?;
            if !screen.can_confirm() {
                return Err(NavigationError::GateClosed {
                    screen: Screen::MapSelection,
                }
                .into());
            }
            (
                screen.selection().points().to_vec(),
                screen.project().start_date,
                screen.project().end_date,
            )
        };

        let result = self
            .imagery_service
            .request_satellite_imagery(&points, start, end)
            .await;

        match result {
            Ok(job) => {
                tracing::info!(
                    job_id = %job.id,
                    points = points.len(),
                    event = "imagery_requested",
                    "Imagery request submitted"
                );
                self.map_selection_mut()?.record_job(job);
                Ok(job)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    code = e.code(),
                    event = "imagery_request_failed",
                    "Imagery request failed"
                );
                self.map_selection_mut()?.set_submit_error(e.clone());
                Err(e.into())
            }
        }
    }
}
