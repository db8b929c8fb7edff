use md5::{Digest, Md5};

/// Digest of an email address used as the stable avatar identity.
pub trait EmailDigest {
    fn digest(&self, email: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Digest;

impl EmailDigest for Md5Digest {
    fn digest(&self, email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        let mut hasher = Md5::new();
        hasher.update(normalized.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

pub fn avatar_url(email: &str, size: u32) -> String {
    avatar_url_with(&Md5Digest, email, size)
}

pub fn avatar_url_with(digest: &dyn EmailDigest, email: &str, size: u32) -> String {
    format!(
        "https://www.gravatar.com/avatar/{}?d=identicon&s={}",
        digest.digest(email),
        size
    )
}
