use serde::Deserialize;

use crate::error::{AppError, FieldError};
use crate::forms::is_blank;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostForm {
    pub body: Option<String>,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if is_blank(&self.body) {
            errors.push(FieldError::new("body", "This field is required."));
        } else if self.body.as_deref().unwrap_or_default().chars().count() > 140 {
            errors.push(FieldError::new(
                "body",
                "Field must be between 1 and 140 characters long.",
            ));
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

    fn form(body: &str) -> PostForm {
        PostForm {
            body: Some(body.to_string()),
        }
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(form("").validate().is_err());
        assert!(PostForm { body: None }.validate().is_err());
    }

    #[test]
    fn test_length_bounds() {
        assert!(form("a").validate().is_ok());
        assert!(form(&"x".repeat(140)).validate().is_ok());

        let err = form(&"x".repeat(141)).validate().unwrap_err();
        assert_eq!(err.field_errors().unwrap()[0].field, "body");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 140 multibyte characters are within bounds
        assert!(form(&"é".repeat(140)).validate().is_ok());
        assert!(form(&"é".repeat(141)).validate().is_err());
    }
}
