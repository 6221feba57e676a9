//! In-memory backend for tests and demos.
//!
//! Implements all three collaborator traits over plain vectors. Error
//! messages mirror what the hosted services return so inline messages read
//! the same.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use super::services::{IdentityProvider, RecordStore, Session, UserFunctions};
use crate::error::{RemoteError, RemoteSystem};
use crate::extraction::value_to_text;
use crate::storage::models::{NewUser, Role, Table};
use crate::storage::queries::{CountQuery, Direction, ListQuery};

#[derive(Debug, Clone)]
struct Account {
    user_id: String,
    email: String,
    password: String,
    role: Role,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    accounts: Vec<Account>,
    tables: HashMap<Table, Vec<Value>>,
    session: Option<Session>,
    outage: Option<RemoteError>,
    /// Password reset emails sent, in order.
    pub reset_requests: Vec<String>,
    /// Mutating calls received, e.g. `delete inspections/i-1`.
    pub calls: Vec<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and its `profiles` row.
    pub fn with_account(mut self, email: &str, password: &str, role: Role, name: &str) -> Self {
        self.insert_account(email, password, role, name);
        self
    }

    pub fn with_row(mut self, table: Table, row: Value) -> Self {
        self.tables.entry(table).or_default().push(row);
        self
    }

    pub fn with_rows(mut self, table: Table, rows: impl IntoIterator<Item = Value>) -> Self {
        self.tables.entry(table).or_default().extend(rows);
        self
    }

    /// Make every call to `system` fail with `message` until cleared.
    pub fn set_outage(&mut self, system: RemoteSystem, message: &str) {
        self.outage = Some(RemoteError::new(system, message));
    }

    pub fn clear_outage(&mut self) {
        self.outage = None;
    }

    pub fn rows(&self, table: Table) -> &[Value] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    fn check(&self, system: RemoteSystem) -> Result<(), RemoteError> {
        match &self.outage {
            Some(err) if err.system == system => Err(err.clone()),
            _ => Ok(()),
        }
    }

    fn insert_account(&mut self, email: &str, password: &str, role: Role, name: &str) -> String {
        let user_id = Uuid::new_v4().to_string();
        self.accounts.push(Account {
            user_id: user_id.clone(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.clone(),
        });
        self.tables.entry(Table::Profiles).or_default().push(json!({
            "id": user_id,
            "full_name": name,
            "email": email,
            "role": role.as_str(),
            "created_at": Utc::now().to_rfc3339(),
        }));
        user_id
    }

    fn session_for(account: &Account) -> Session {
        Session {
            user_id: account.user_id.clone(),
            email: account.email.clone(),
            role: account.role.clone(),
        }
    }
}

fn column_text(row: &Value, column: &str) -> Option<String> {
    row.get(column).and_then(value_to_text)
}

fn matches_eq(row: &Value, eq: &[(String, String)]) -> bool {
    eq.iter()
        .all(|(column, value)| column_text(row, column).as_deref() == Some(value.as_str()))
}

impl IdentityProvider for MemoryBackend {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, RemoteError> {
        self.check(RemoteSystem::Identity)?;
        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
            .ok_or_else(|| RemoteError::new(RemoteSystem::Identity, "Invalid login credentials"))?;
        let session = Self::session_for(account);
        self.session = Some(session.clone());
        Ok(session)
    }

    fn sign_out(&mut self) -> Result<(), RemoteError> {
        self.check(RemoteSystem::Identity)?;
        self.session = None;
        Ok(())
    }

    fn current_session(&self) -> Result<Option<Session>, RemoteError> {
        self.check(RemoteSystem::Identity)?;
        Ok(self.session.clone())
    }

    fn send_password_reset(&mut self, email: &str) -> Result<(), RemoteError> {
        self.check(RemoteSystem::Identity)?;
        self.reset_requests.push(email.to_string());
        Ok(())
    }

    fn update_password(&mut self, new_password: &str) -> Result<(), RemoteError> {
        self.check(RemoteSystem::Identity)?;
        let user_id = match &self.session {
            Some(session) => session.user_id.clone(),
            None => return Err(RemoteError::new(RemoteSystem::Identity, "Auth session missing!")),
        };
        if let Some(account) = self.accounts.iter_mut().find(|a| a.user_id == user_id) {
            account.password = new_password.to_string();
        }
        Ok(())
    }
}

impl RecordStore for MemoryBackend {
    fn list(&self, query: &ListQuery) -> Result<Vec<Value>, RemoteError> {
        self.check(RemoteSystem::RecordStore)?;
        let mut rows: Vec<Value> = self
            .rows(query.table)
            .iter()
            .filter(|row| matches_eq(row, &query.eq))
            .cloned()
            .collect();

        if let Some((column, direction)) = &query.order {
            // RFC 3339 timestamps order correctly as strings.
            rows.sort_by(|a, b| {
                let ord = column_text(a, column).cmp(&column_text(b, column));
                match direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    fn count(&self, query: &CountQuery) -> Result<usize, RemoteError> {
        self.check(RemoteSystem::RecordStore)?;
        Ok(self
            .rows(query.table)
            .iter()
            .filter(|row| matches_eq(row, &query.eq))
            .count())
    }

    fn delete(&mut self, table: Table, id: &str) -> Result<bool, RemoteError> {
        self.check(RemoteSystem::RecordStore)?;
        self.calls.push(format!("delete {}/{}", table, id));
        let rows = self.tables.entry(table).or_default();
        let before = rows.len();
        rows.retain(|row| column_text(row, "id").as_deref() != Some(id));
        Ok(rows.len() < before)
    }
}

impl UserFunctions for MemoryBackend {
    fn create_user(&mut self, user: &NewUser) -> Result<String, RemoteError> {
        self.check(RemoteSystem::Functions)?;
        self.calls.push(format!("create_user {}", user.email));
        if self.accounts.iter().any(|a| a.email.eq_ignore_ascii_case(&user.email)) {
            return Err(RemoteError::new(
                RemoteSystem::Functions,
                "A user with this email address has already been registered",
            ));
        }
        Ok(self.insert_account(&user.email, &user.password, user.role.clone(), &user.name))
    }

    fn delete_user(&mut self, id: &str) -> Result<(), RemoteError> {
        self.check(RemoteSystem::Functions)?;
        self.calls.push(format!("delete_user {}", id));
        let before = self.accounts.len();
        self.accounts.retain(|a| a.user_id != id);
        if self.accounts.len() == before {
            return Err(RemoteError::new(RemoteSystem::Functions, "User not found"));
        }
        if let Some(profiles) = self.tables.get_mut(&Table::Profiles) {
            profiles.retain(|row| column_text(row, "id").as_deref() != Some(id));
        }
        Ok(())
    }
}
