use serde::Deserialize;

use crate::error::{AppError, FieldError};
use crate::forms::{is_blank, is_valid_email};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequestForm {
    pub email: Option<String>,
}

impl ResetPasswordRequestForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        match self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            None => errors.push(FieldError::new("email", "This field is required.")),
            Some(email) => {
                if !is_valid_email(email) {
                    errors.push(FieldError::new("email", "Invalid email address."));
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordForm {
    pub password: Option<String>,
    pub password2: Option<String>,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_form_rejects_bad_email() {
        let form = ResetPasswordRequestForm {
            email: Some("not-an-email".to_string()),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.field_errors().unwrap()[0].message,
            "Invalid email address."
        );

        let form = ResetPasswordRequestForm {
            email: Some("a@x.com".to_string()),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_reset_form_requires_matching_passwords() {
        let form = ResetPasswordForm {
            password: Some("new-secret".to_string()),
            password2: Some("other".to_string()),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field_errors().unwrap()[0].field, "password2");
        assert_eq!(
            err.field_errors().unwrap()[0].message,
            "Passwords must match."
        );

        let form = ResetPasswordForm {
            password: Some("new-secret".to_string()),
            password2: Some("new-secret".to_string()),
        };
        assert!(form.validate().is_ok());
    }
}
