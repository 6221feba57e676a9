//! The admin console controller.
//!
//! Every operation runs against an explicit [`AppState`]. Remote failures
//! are logged, turned into an inline [`StatusMessage`] and returned; prior
//! state is left untouched and nothing is retried.
//!
//! Once a remote mutation has gone through, the action succeeds even if
//! the follow-up list refresh fails; that failure becomes a warning.

use serde_json::Value;

use super::services::{Backend, Session};
use super::state::{AppState, DashboardStats, Page, StatusMessage};
use crate::config::Config;
use crate::error::{ConsoleError, ValidationError};
use crate::filter::{distinct_values, filter, FilterCriteria, FilterField};
use crate::log_event;
use crate::logging::structured::LogContext;
use crate::pipeline::context::RenderContext;
use crate::records::{parse_rows, FromRow, InspectionRecord, QualityReportRecord};
use crate::render::{invoice_number, render_inspection, render_quality, Document};
use crate::storage::models::{Table, UserProfile};
use crate::storage::queries::{CountQuery, ListQuery};
use crate::validation::{validate_email, validate_password, UserForm};

type Reload<B> = fn(&mut AdminConsole<B>) -> Result<(), ConsoleError>;

pub struct AdminConsole<B: Backend> {
    backend: B,
    config: Config,
    state: AppState,
}

impl<B: Backend> AdminConsole<B> {
    pub fn new(backend: B, config: Config) -> Self {
        Self {
            backend,
            config,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn clear_message(&mut self) {
        self.state.message = None;
    }

    /// Log `err`, show it inline and hand it back.
    fn fail<T>(&mut self, ctx: &LogContext, err: ConsoleError) -> Result<T, ConsoleError> {
        log_event!(Warn, ctx, "ACTION_FAILED", error = err.to_string());
        self.state.message = Some(StatusMessage::error(err.to_string()));
        Err(err)
    }

    fn succeed(&mut self, ctx: &LogContext, text: String) {
        log_event!(Info, ctx, "ACTION_SUCCEEDED", message = text);
        self.state.message = Some(StatusMessage::success(text));
    }

    /// Report a remote mutation that went through, then refresh the
    /// affected list. A failed refresh leaves a warning, not an error.
    fn finish_mutation(&mut self, ctx: &LogContext, done: String, reload: Reload<B>) {
        match reload(self) {
            Ok(()) => self.succeed(ctx, done),
            Err(e) => {
                log_event!(Warn, ctx, "RELOAD_FAILED", error = e.to_string());
                self.state.message = Some(StatusMessage::warning(format!(
                    "{}, but the list could not be refreshed: {}",
                    done, e
                )));
            }
        }
    }

    fn is_permitted(&self, session: &Session) -> bool {
        session
            .role
            .as_str()
            .eq_ignore_ascii_case(&self.config.console.required_role)
    }

    fn require_manager(&self) -> Result<(), ConsoleError> {
        match &self.state.session {
            Some(session) if self.is_permitted(session) => Ok(()),
            Some(session) => Err(ValidationError::AccessDenied(session.role.to_string()).into()),
            None => Err(ConsoleError::NotSignedIn),
        }
    }

    // --- session -------------------------------------------------------

    /// Sign in; only the configured role gets past the login page.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("sign_in");
        if let Err(e) = validate_email(email) {
            return self.fail(&ctx, e.into());
        }
        if password.is_empty() {
            return self.fail(&ctx, ValidationError::MissingField("password").into());
        }

        let session = match self.backend.sign_in(email, password) {
            Ok(session) => session,
            Err(e) => return self.fail(&ctx, e.into()),
        };

        if !self.is_permitted(&session) {
            if let Err(e) = self.backend.sign_out() {
                log_event!(Warn, ctx, "SIGN_OUT_FAILED", error = e.message);
            }
            let role = session.role.to_string();
            return self.fail(&ctx, ValidationError::AccessDenied(role).into());
        }

        log_event!(Info, ctx, "SIGNED_IN", user = session.user_id, role = session.role.to_string());
        self.state = AppState {
            page: Page::Dashboard,
            session: Some(session),
            ..AppState::default()
        };
        Ok(())
    }

    /// Pick up a session persisted by the identity provider. Returns
    /// whether a manager session was restored; other roles are signed out.
    pub fn restore_session(&mut self) -> Result<bool, ConsoleError> {
        let ctx = LogContext::action("restore_session");
        let session = match self.backend.current_session() {
            Ok(session) => session,
            Err(e) => return self.fail(&ctx, e.into()),
        };

        match session {
            Some(session) if self.is_permitted(&session) => {
                log_event!(Info, ctx, "SESSION_RESTORED", user = session.user_id);
                self.state.session = Some(session);
                self.state.page = Page::Dashboard;
                Ok(true)
            }
            Some(session) => {
                log_event!(Info, ctx, "SESSION_REJECTED", role = session.role.to_string());
                if let Err(e) = self.backend.sign_out() {
                    log_event!(Warn, ctx, "SIGN_OUT_FAILED", error = e.message);
                }
                self.state = AppState::default();
                Ok(false)
            }
            None => Ok(false),
        }
    }

    pub fn sign_out(&mut self) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("sign_out");
        if let Err(e) = self.backend.sign_out() {
            return self.fail(&ctx, e.into());
        }
        log_event!(Info, ctx, "SIGNED_OUT");
        self.state = AppState::default();
        Ok(())
    }

    pub fn request_password_reset(&mut self, email: &str) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("password_reset");
        if let Err(e) = validate_email(email) {
            return self.fail(&ctx, e.into());
        }
        let email = email.trim();
        if let Err(e) = self.backend.send_password_reset(email) {
            return self.fail(&ctx, e.into());
        }
        self.succeed(&ctx, format!("Password reset link sent to {}", email));
        Ok(())
    }

    /// Change the signed-in user's password. Confirmation and length are
    /// checked before the identity provider is called.
    pub fn change_password(&mut self, new_password: &str, confirm: &str) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("change_password");
        if self.state.session.is_none() {
            return self.fail(&ctx, ConsoleError::NotSignedIn);
        }
        let min = self.config.console.min_password_len;
        if let Err(e) = validate_password(new_password, confirm, min) {
            return self.fail(&ctx, e.into());
        }
        if let Err(e) = self.backend.update_password(new_password) {
            return self.fail(&ctx, e.into());
        }
        self.succeed(&ctx, "Password updated".to_string());
        Ok(())
    }

    // --- navigation and loading -----------------------------------------

    /// Switch page and load its data. Every page but the login page needs
    /// a manager session.
    pub fn navigate(&mut self, page: Page) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("navigate");
        if page == Page::Login {
            self.state.page = page;
            return Ok(());
        }
        if let Err(e) = self.require_manager() {
            return self.fail(&ctx, e);
        }

        log_event!(Debug, ctx, "PAGE_OPENED", page = page);
        self.state.page = page;
        self.state.message = None;
        match page {
            Page::Dashboard => self.load_dashboard(),
            Page::Inspections => self.load_inspections(),
            Page::QualityReports => self.load_quality_reports(),
            Page::Users => self.load_users(),
            Page::Settings | Page::Login => Ok(()),
        }
    }

    pub fn load_dashboard(&mut self) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("load_dashboard");
        if let Err(e) = self.require_manager() {
            return self.fail(&ctx, e);
        }
        match self.fetch_dashboard(&ctx) {
            Ok(stats) => {
                log_event!(
                    Info,
                    ctx,
                    "DASHBOARD_LOADED",
                    users = stats.total_users,
                    inspections = stats.total_inspections,
                    completed = stats.completed_inspections,
                    quality_reports = stats.total_quality_reports
                );
                self.state.dashboard = Some(stats);
                Ok(())
            }
            Err(e) => self.fail(&ctx, e),
        }
    }

    fn fetch_dashboard(&self, ctx: &LogContext) -> Result<DashboardStats, ConsoleError> {
        let recent = self.backend.list(&ListQuery::newest_first(
            Table::Inspections,
            self.config.console.dashboard_recent,
        ))?;

        Ok(DashboardStats {
            total_users: self.backend.count(&CountQuery::new(Table::Profiles))?,
            total_inspections: self.backend.count(&CountQuery::new(Table::Inspections))?,
            completed_inspections: self
                .backend
                .count(&CountQuery::new(Table::Inspections).eq("status", "completed"))?,
            total_quality_reports: self.backend.count(&CountQuery::new(Table::QualityReports))?,
            recent_inspections: parse_rows(&recent, ctx),
        })
    }

    fn fetch_rows(&self, table: Table, ctx: &LogContext) -> Result<Vec<Value>, ConsoleError> {
        self.require_manager()?;
        let query = ListQuery::newest_first(table, self.config.console.list_limit);
        let rows = self.backend.list(&query)?;
        log_event!(Info, ctx, "RECORDS_LOADED", table = table.as_str(), count = rows.len());
        Ok(rows)
    }

    pub fn load_inspections(&mut self) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("load_inspections");
        match self.fetch_rows(Table::Inspections, &ctx) {
            Ok(rows) => {
                self.state.inspections = parse_rows(&rows, &ctx);
                Ok(())
            }
            Err(e) => self.fail(&ctx, e),
        }
    }

    pub fn load_quality_reports(&mut self) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("load_quality_reports");
        match self.fetch_rows(Table::QualityReports, &ctx) {
            Ok(rows) => {
                self.state.quality_reports = parse_rows(&rows, &ctx);
                Ok(())
            }
            Err(e) => self.fail(&ctx, e),
        }
    }

    pub fn load_users(&mut self) -> Result<(), ConsoleError> {
        let ctx = LogContext::action("load_users");
        match self.fetch_rows(Table::Profiles, &ctx) {
            Ok(rows) => {
                self.state.users = rows.iter().filter_map(UserProfile::from_row).collect();
                Ok(())
            }
            Err(e) => self.fail(&ctx, e),
        }
    }

    // --- filtering ------------------------------------------------------

    pub fn set_inspection_criteria(&mut self, criteria: FilterCriteria) {
        self.state.inspection_criteria = criteria;
    }

    pub fn set_quality_criteria(&mut self, criteria: FilterCriteria) {
        self.state.quality_criteria = criteria;
    }

    pub fn visible_inspections(&self) -> Vec<&InspectionRecord> {
        filter(&self.state.inspections, &self.state.inspection_criteria)
    }

    pub fn visible_quality_reports(&self) -> Vec<&QualityReportRecord> {
        filter(&self.state.quality_reports, &self.state.quality_criteria)
    }

    /// Options for an inspection picker, from the loaded collection.
    pub fn inspection_options(&self, field: FilterField) -> Vec<String> {
        distinct_values(&self.state.inspections, field)
    }

    pub fn quality_options(&self, field: FilterField) -> Vec<String> {
        distinct_values(&self.state.quality_reports, field)
    }

    // --- destructive actions ---------------------------------------------

    /// Delete one row. When the store no longer has it, the stale list
    /// is reloaded before reporting `RecordNotFound`.
    fn delete_record(
        &mut self,
        table: Table,
        id: &str,
        ctx: &LogContext,
        reload: Reload<B>,
    ) -> Result<(), ConsoleError> {
        if self.backend.delete(table, id)? {
            log_event!(Info, ctx, "RECORD_DELETED", table = table.as_str());
            return Ok(());
        }
        log_event!(Warn, ctx, "RECORD_ALREADY_DELETED", table = table.as_str());
        if let Err(e) = reload(self) {
            log_event!(Warn, ctx, "RELOAD_FAILED", error = e.to_string());
        }
        Err(ConsoleError::RecordNotFound(id.to_string()))
    }

    pub fn delete_inspection<F>(&mut self, id: &str, confirm: F) -> Result<(), ConsoleError>
    where
        F: FnOnce(&str) -> bool,
    {
        let ctx = LogContext::action("delete_inspection").with_record(id);
        if let Err(e) = self.require_manager() {
            return self.fail(&ctx, e);
        }
        let truck = match self.state.inspections.iter().find(|r| r.id == id) {
            Some(record) => record.truck_number.clone().unwrap_or_else(|| id.to_string()),
            None => return self.fail(&ctx, ConsoleError::RecordNotFound(id.to_string())),
        };

        let prompt = format!("Delete the inspection for truck {}? This cannot be undone.", truck);
        confirm_action(&ctx, &prompt, confirm)?;
        if let Err(e) = self.delete_record(Table::Inspections, id, &ctx, Self::load_inspections) {
            return self.fail(&ctx, e);
        }
        self.finish_mutation(&ctx, "Inspection deleted".to_string(), Self::load_inspections);
        Ok(())
    }

    pub fn delete_quality_report<F>(&mut self, id: &str, confirm: F) -> Result<(), ConsoleError>
    where
        F: FnOnce(&str) -> bool,
    {
        let ctx = LogContext::action("delete_quality_report").with_record(id);
        if let Err(e) = self.require_manager() {
            return self.fail(&ctx, e);
        }
        let truck = match self.state.quality_reports.iter().find(|r| r.id == id) {
            Some(record) => record.truck_number.clone().unwrap_or_else(|| id.to_string()),
            None => return self.fail(&ctx, ConsoleError::RecordNotFound(id.to_string())),
        };

        let prompt = format!("Delete the quality report for truck {}? This cannot be undone.", truck);
        confirm_action(&ctx, &prompt, confirm)?;
        if let Err(e) =
            self.delete_record(Table::QualityReports, id, &ctx, Self::load_quality_reports)
        {
            return self.fail(&ctx, e);
        }
        self.finish_mutation(&ctx, "Quality report deleted".to_string(), Self::load_quality_reports);
        Ok(())
    }

    pub fn delete_user<F>(&mut self, id: &str, confirm: F) -> Result<(), ConsoleError>
    where
        F: FnOnce(&str) -> bool,
    {
        let ctx = LogContext::action("delete_user").with_record(id);
        if let Err(e) = self.require_manager() {
            return self.fail(&ctx, e);
        }
        let label = match self.state.users.iter().find(|u| u.id == id) {
            Some(user) => user
                .name
                .clone()
                .or_else(|| user.email.clone())
                .unwrap_or_else(|| id.to_string()),
            None => return self.fail(&ctx, ConsoleError::RecordNotFound(id.to_string())),
        };

        let prompt = format!("Delete user {}? This cannot be undone.", label);
        confirm_action(&ctx, &prompt, confirm)?;
        if let Err(e) = self.backend.delete_user(id) {
            return self.fail(&ctx, e.into());
        }
        self.finish_mutation(&ctx, format!("User {} deleted", label), Self::load_users);
        Ok(())
    }

    /// Validate the form, then call the create-user function.
    pub fn create_user(&mut self, form: &UserForm) -> Result<String, ConsoleError> {
        let ctx = LogContext::action("create_user");
        if let Err(e) = self.require_manager() {
            return self.fail(&ctx, e);
        }
        let new_user = match form.validate(self.config.console.min_password_len) {
            Ok(user) => user,
            Err(e) => return self.fail(&ctx, e.into()),
        };
        let user_id = match self.backend.create_user(&new_user) {
            Ok(id) => id,
            Err(e) => return self.fail(&ctx, e.into()),
        };

        let done = format!("User {} created", new_user.email);
        self.finish_mutation(&ctx.with_record(&user_id), done, Self::load_users);
        Ok(user_id)
    }

    // --- reports --------------------------------------------------------

    fn render_context(&self) -> RenderContext {
        RenderContext::new(self.config.report.clone())
    }

    /// Render a loaded inspection as a printable document.
    pub fn inspection_report(&mut self, id: &str) -> Result<Document, ConsoleError> {
        let ctx = LogContext::action("inspection_report").with_record(id);
        let document = match self.state.inspections.iter().find(|r| r.id() == id) {
            Some(record) => render_inspection(record, &self.render_context()),
            None => return self.fail(&ctx, ConsoleError::RecordNotFound(id.to_string())),
        };
        log_event!(Info, ctx, "REPORT_OPENED", file = document.file_name);
        Ok(document)
    }

    /// Render a loaded quality report. The invoice number is drawn fresh
    /// on every call.
    pub fn quality_report(&mut self, id: &str) -> Result<Document, ConsoleError> {
        let ctx = LogContext::action("quality_report").with_record(id);
        let invoice = invoice_number(&mut rand::thread_rng());
        let document = match self.state.quality_reports.iter().find(|r| r.id() == id) {
            Some(record) => render_quality(record, &self.render_context(), &invoice),
            None => return self.fail(&ctx, ConsoleError::RecordNotFound(id.to_string())),
        };
        log_event!(Info, ctx, "REPORT_OPENED", file = document.file_name, invoice = invoice);
        Ok(document)
    }
}

/// Ask `confirm` before a destructive action. A declined confirmation
/// stops the action before any remote call.
fn confirm_action<F>(ctx: &LogContext, prompt: &str, confirm: F) -> Result<(), ConsoleError>
where
    F: FnOnce(&str) -> bool,
{
    if confirm(prompt) {
        Ok(())
    } else {
        log_event!(Info, ctx, "ACTION_DECLINED");
        Err(ValidationError::Declined.into())
    }
}
