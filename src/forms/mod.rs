use once_cell::sync::Lazy;
use regex::Regex;

pub mod login;
pub mod post;
pub mod profile;
pub mod reset;
pub mod signup;

pub use login::LoginForm;
pub use post::PostForm;
pub use profile::EditProfileForm;
pub use reset::{ResetPasswordForm, ResetPasswordRequestForm};
pub use signup::SignUpForm;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
