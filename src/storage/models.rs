//! Record-store tables and user models.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extraction::FieldAliases;

/// Tables consumed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Profiles,
    Inspections,
    QualityReports,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Profiles => "profiles",
            Table::Inspections => "inspections",
            Table::QualityReports => "quality_reports",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User role attribute from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Manager,
    Inspector,
    Driver,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "manager" => Role::Manager,
            "inspector" => Role::Inspector,
            "driver" => Role::Driver,
            _ => Role::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Manager => "manager",
            Role::Inspector => "inspector",
            Role::Driver => "driver",
            Role::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const PROFILE_NAME: FieldAliases = FieldAliases::new("name", &["full_name", "name", "fullName"]);
const PROFILE_EMAIL: FieldAliases = FieldAliases::new("email", &["email"]);
const PROFILE_ROLE: FieldAliases = FieldAliases::new("role", &["role", "user_role"]);
const PROFILE_ID: FieldAliases = FieldAliases::new("id", &["id", "user_id"]);
const PROFILE_CREATED: FieldAliases = FieldAliases::new("created_at", &["created_at"]);

/// Row of the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: Option<String>,
}

impl UserProfile {
    pub fn from_row(row: &Value) -> Option<Self> {
        row.as_object()?;
        Some(Self {
            id: PROFILE_ID.text(row)?,
            name: PROFILE_NAME.text(row),
            email: PROFILE_EMAIL.text(row),
            role: Role::parse(&PROFILE_ROLE.text(row).unwrap_or_default()),
            created_at: PROFILE_CREATED.text(row),
        })
    }
}

/// Payload for the create-user function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
