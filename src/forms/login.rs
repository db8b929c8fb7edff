use serde::Deserialize;

use crate::error::{AppError, FieldError};
use crate::forms::is_blank;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if is_blank(&self.username) {
            errors.push(FieldError::new("username", "This field is required."));
        }
        if is_blank(&self.password) {
            errors.push(FieldError::new("password", "This field is required."));
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
    fn test_both_fields_required() {
        let form = LoginForm::default();
        let err = form.validate().unwrap_err();
        let fields: Vec<_> = err
            .field_errors()
            .unwrap()
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_whitespace_is_blank() {
        let form = LoginForm {
            username: Some("   ".to_string()),
            password: Some("pw".to_string()),
            remember_me: false,
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field_errors().unwrap().len(), 1);
        assert_eq!(err.field_errors().unwrap()[0].field, "username");
    }

    #[test]
    fn test_valid_login_form() {
        let form = LoginForm {
            username: Some("alice".to_string()),
            password: Some("pw1".to_string()),
            remember_me: true,
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_remember_me_defaults_to_false() {
        let form: LoginForm = serde_json::from_str(r#"{"username":"a","password":"b"}"#).unwrap();
        assert!(!form.remember_me);
    }
}
