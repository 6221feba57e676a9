//! Seams to the external collaborators.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RemoteError;
use crate::storage::models::{NewUser, Role, Table};
use crate::storage::queries::{CountQuery, ListQuery};

/// Signed-in identity with its role attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

pub trait IdentityProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, RemoteError>;

    fn sign_out(&mut self) -> Result<(), RemoteError>;

    /// Session persisted by the provider from an earlier sign-in, if any.
    fn current_session(&self) -> Result<Option<Session>, RemoteError>;

    fn send_password_reset(&mut self, email: &str) -> Result<(), RemoteError>;

    /// Change the password of the signed-in user.
    fn update_password(&mut self, new_password: &str) -> Result<(), RemoteError>;
}

pub trait RecordStore {
    fn list(&self, query: &ListQuery) -> Result<Vec<Value>, RemoteError>;

    fn count(&self, query: &CountQuery) -> Result<usize, RemoteError>;

    /// Delete one row by id. `Ok(false)` when no row had that id.
    fn delete(&mut self, table: Table, id: &str) -> Result<bool, RemoteError>;
}

pub trait UserFunctions {
    /// Create an account and its profile; returns the new user id.
    fn create_user(&mut self, user: &NewUser) -> Result<String, RemoteError>;

    fn delete_user(&mut self, id: &str) -> Result<(), RemoteError>;
}

/// Everything the console talks to.
pub trait Backend: IdentityProvider + RecordStore + UserFunctions {}

impl<T: IdentityProvider + RecordStore + UserFunctions> Backend for T {}
