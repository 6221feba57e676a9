//! Form validation for sign-in, password changes and user creation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;
use crate::storage::models::{NewUser, Role};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if !EMAIL.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// New password plus its confirmation.
pub fn validate_password(password: &str, confirm: &str, min_len: usize) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < min_len {
        return Err(ValidationError::PasswordTooShort { min: min_len });
    }
    Ok(())
}

/// Create-user form as entered by the manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl UserForm {
    /// Validate every field and build the payload for the create-user
    /// function. Name and email are trimmed; the password is not.
    pub fn validate(&self, min_password_len: usize) -> Result<NewUser, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        validate_email(&self.email)?;
        validate_password(&self.password, &self.confirm_password, min_password_len)?;
        if self.role.trim().is_empty() {
            return Err(ValidationError::MissingField("role"));
        }

        Ok(NewUser {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: Role::parse(&self.role),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UserForm {
        UserForm {
            name: " Achieng Otieno ".to_string(),
            email: "achieng@example.com".to_string(),
            password: "tanker42".to_string(),
            confirm_password: "tanker42".to_string(),
            role: "inspector".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let user = form().validate(6).unwrap();
        assert_eq!(user.name, "Achieng Otieno");
        assert_eq!(user.role, Role::Inspector);
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("ops@depot.co.ke").is_ok());
        assert_eq!(validate_email("  "), Err(ValidationError::MissingField("email")));
        assert!(matches!(validate_email("ops@depot"), Err(ValidationError::InvalidEmail(_))));
        assert!(matches!(validate_email("a b@c.d"), Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("abc", "abd", 6), Err(ValidationError::PasswordMismatch));
        assert_eq!(
            validate_password("abc", "abc", 6),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(validate_password("", "", 6), Err(ValidationError::MissingField("password")));
        assert!(validate_password("abcdef", "abcdef", 6).is_ok());
    }

    #[test]
    fn test_form_checks_run_in_order() {
        let mut f = form();
        f.name = String::new();
        f.email = "broken".to_string();
        assert_eq!(f.validate(6), Err(ValidationError::MissingField("name")));

        let mut f = form();
        f.confirm_password = "other".to_string();
        assert_eq!(f.validate(6), Err(ValidationError::PasswordMismatch));

        let mut f = form();
        f.role = " ".to_string();
        assert_eq!(f.validate(6), Err(ValidationError::MissingField("role")));
    }
}
