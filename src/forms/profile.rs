use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::error::{AppError, FieldError};
use crate::users;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileForm {
    pub username: Option<String>,
    pub about_me: Option<String>,
    /// The profile's current username, bound by the caller; keeping it
    /// unchanged must not trip the uniqueness check.
    #[serde(skip)]
    pub original_username: String,
}

impl EditProfileForm {
    pub fn with_original_username(mut self, original: impl Into<String>) -> Self {
        self.original_username = original.into();
        self
    }

    pub async fn validate(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let mut errors = Vec::new();

        match self
            .username
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            None => errors.push(FieldError::new("username", "This field is required.")),
            Some(username) => {
                if username != self.original_username
                    && users::find_by_username(db, username).await?.is_some()
                {
                    errors.push(FieldError::new(
                        "username",
                        "Please use a different username.",
                    ));
                }
            }
        }

        if let Some(about_me) = self.about_me.as_deref() {
            if about_me.chars().count() > 140 {
                errors.push(FieldError::new(
                    "aboutMe",
                    "Field cannot be longer than 140 characters.",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }
}
