use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::error::{AppError, FieldError};
use crate::forms::{is_blank, is_valid_email};
use crate::users;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
}

impl SignUpForm {
    /// Per field, only the first failing check reports: required, then
    /// shape, then the uniqueness lookup.
    pub async fn validate(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let mut errors = Vec::new();

        match trimmed(&self.username) {
            None => errors.push(FieldError::new("username", "This field is required.")),
            Some(username) => {
                if users::find_by_username(db, username).await?.is_some() {
                    errors.push(FieldError::new("username", "Username is taken!"));
                }
            }
        }

        match trimmed(&self.email) {
            None => errors.push(FieldError::new("email", "This field is required.")),
            Some(email) => {
                if !is_valid_email(email) {
                    errors.push(FieldError::new("email", "Invalid email address."));
                } else if users::find_by_email(db, email).await?.is_some() {
                    errors.push(FieldError::new("email", "Email already exists!"));
                }
            }
        }

        if is_blank(&self.password) {
            errors.push(FieldError::new("password", "This field is required."));
        }
        if is_blank(&self.password2) {
            errors.push(FieldError::new("password2", "This field is required."));
        } else if self.password2 != self.password {
            errors.push(FieldError::new("password2", "Passwords must match."));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
